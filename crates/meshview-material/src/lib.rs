//! # meshview-material
//!
//! Material palette support for meshview.
//!
//! ## Design
//!
//! A [`MaterialTable`] maps material names from an MTL library to their
//! diffuse (`Kd`) base color. The mesh loader holds one table at a time,
//! replacing it on every `mtllib` record.
//!
//! The [`tokenize`] module holds the record tokenizer shared by the MTL
//! and OBJ readers.

pub mod table;
pub mod tokenize;

pub use table::MaterialTable;
