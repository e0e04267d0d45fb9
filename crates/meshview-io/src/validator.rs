//! Settings reconciliation and config validation.
//!
//! Some setting combinations cannot be rendered as asked. [`reconcile`]
//! rewrites them into the nearest renderable combination and reports
//! each change; [`validate_config`] rejects values no rewrite can fix.

use std::fmt;

use meshview_render::Layout;
use meshview_types::{MeshviewError, MeshviewResult};

use crate::contract::{DepthView, RenderSettings, ShadingMode, ViewerConfig};

/// A change made by [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// A depth view was requested, so shading was turned off.
    ShadingDisabledForDepthView { was: ShadingMode, depth_view: DepthView },
    /// Flat shading needs per-triangle records; the layout was flattened.
    FlattenedForFlatShading,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::ShadingDisabledForDepthView { was, depth_view } => write!(
                f,
                "depth view {depth_view:?} is active, shading {was:?} set to None"
            ),
            Adjustment::FlattenedForFlatShading => {
                write!(f, "flat shading needs the flattened layout, indexed layout turned off")
            }
        }
    }
}

/// Resolves contradictory settings in place.
///
/// The depth view is checked first, so a depth view with flat shading
/// keeps the indexed layout.
pub fn reconcile(settings: &mut RenderSettings) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();

    if settings.depth_view != DepthView::None && settings.shading != ShadingMode::None {
        adjustments.push(Adjustment::ShadingDisabledForDepthView {
            was: settings.shading,
            depth_view: settings.depth_view,
        });
        settings.shading = ShadingMode::None;
    }

    if settings.layout == Layout::Indexed && settings.shading == ShadingMode::Flat {
        adjustments.push(Adjustment::FlattenedForFlatShading);
        settings.layout = Layout::Flattened;
    }

    for adjustment in &adjustments {
        tracing::info!(%adjustment, "render settings adjusted");
    }
    adjustments
}

/// Validates a complete viewer config.
///
/// Checks:
/// - A mesh path is given
/// - The projection is a proper frustum
/// - Lighting intensities are non-negative
pub fn validate_config(config: &ViewerConfig) -> MeshviewResult<()> {
    if config.mesh_path.as_os_str().is_empty() {
        return Err(MeshviewError::InvalidConfig("mesh_path must be set".into()));
    }

    let projection = &config.transform.projection;
    if !(projection.near > 0.0) {
        return Err(MeshviewError::InvalidConfig(format!(
            "Near plane must be positive, got {}",
            projection.near
        )));
    }
    if !(projection.far > projection.near) {
        return Err(MeshviewError::InvalidConfig(format!(
            "Far plane ({}) must lie beyond near plane ({})",
            projection.far, projection.near
        )));
    }
    if !(projection.aspect_ratio > 0.0) {
        return Err(MeshviewError::InvalidConfig(
            "Aspect ratio must be positive".into(),
        ));
    }
    if !(projection.fov_degrees > 0.0 && projection.fov_degrees <= 180.0) {
        return Err(MeshviewError::InvalidConfig(format!(
            "Field of view must be in (0, 180] degrees, got {}",
            projection.fov_degrees
        )));
    }

    let lighting = &config.lighting;
    if lighting.ambient_intensity < 0.0 || lighting.light_intensity < 0.0 {
        return Err(MeshviewError::InvalidConfig(
            "Light intensities must be non-negative".into(),
        ));
    }
    if lighting.specular_exponent < 0.0 {
        return Err(MeshviewError::InvalidConfig(
            "Specular exponent must be non-negative".into(),
        ));
    }

    Ok(())
}
