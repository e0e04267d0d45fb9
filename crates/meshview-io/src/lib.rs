//! # meshview-io
//!
//! Viewer configuration contract and settings validation.
//!
//! Defines the boundary types that external systems (CLI, window layer)
//! use to describe what to load and how to render it.

pub mod contract;
pub mod validator;

pub use contract::{DepthView, LightingSettings, RenderSettings, ShadingMode, ViewerConfig};
pub use validator::{reconcile, validate_config, Adjustment};
