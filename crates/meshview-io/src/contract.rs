//! Viewer configuration contract types.
//!
//! These types are read from TOML. Every table and field is optional;
//! missing values fall back to the interactive viewer's startup state.
//!
//! Only the layout and [`RenderSettings::generate_flags`] feed buffer
//! generation. Draw state (`wireframe`, `background`, `shading`,
//! `depth_view`) and [`LightingSettings`] are uniforms for the window
//! layer that reads the config; they never travel on a `RenderFrame`.

use std::path::{Path, PathBuf};

use meshview_math::{TransformComposer, Vec3};
use meshview_render::{GenerateFlags, Layout};
use meshview_types::{MeshviewError, MeshviewResult};
use serde::{Deserialize, Serialize};

/// How the fragment stage lights the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    None,
    /// One normal per triangle. Needs the flattened layout.
    #[default]
    Flat,
    Gouraud,
    Phong,
}

/// Depth-buffer visualization. Any mode other than `None` replaces shading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthView {
    #[default]
    None,
    /// Raw window-space depth.
    Z,
    /// Depth linearized into view space.
    ZTilde,
    /// Linearized depth normalized to `[0, 1]` over the frustum.
    ZPrime,
}

/// Buffer generation and draw-state switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Vertex buffer layout.
    pub layout: Layout,
    /// Bake the transform into the vertex records every frame.
    pub cpu_transform: bool,
    /// Scale colors by a linear ramp over the record order.
    pub color_ramp: bool,
    /// Draw triangle outlines instead of filled polygons.
    pub wireframe: bool,
    pub shading: ShadingMode,
    pub depth_view: DepthView,
    /// Clear color, RGBA.
    pub background: [f32; 4],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            layout: Layout::Indexed,
            cpu_transform: false,
            color_ramp: false,
            wireframe: false,
            shading: ShadingMode::Flat,
            depth_view: DepthView::None,
            background: [0.54, 0.81, 0.94, 1.0],
        }
    }
}

impl RenderSettings {
    /// Buffer generation flags implied by these settings.
    ///
    /// Normals are written whenever shading is on; flat normals only for
    /// flat shading.
    pub fn generate_flags(&self) -> GenerateFlags {
        GenerateFlags {
            cpu_transform: self.cpu_transform,
            color_ramp: self.color_ramp,
            normals: self.shading != ShadingMode::None,
            flat_normals: self.shading == ShadingMode::Flat,
        }
    }
}

/// Phong lighting parameters passed to the shaders as uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    pub ambient_intensity: f32,
    pub light_intensity: f32,
    pub specular_exponent: f32,
    /// Direction the light travels, normalized on use.
    pub light_direction: Vec3,
    pub specular_color: Vec3,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.2,
            light_intensity: 0.8,
            specular_exponent: 16.0,
            light_direction: Vec3::new(-1.0, -1.0, 1.0).normalize(),
            specular_color: Vec3::ONE,
        }
    }
}

/// Complete description of one viewing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// OBJ file to load. Relative paths resolve against the config file.
    pub mesh_path: PathBuf,
    pub render: RenderSettings,
    pub lighting: LightingSettings,
    pub transform: TransformComposer,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mesh_path: PathBuf::new(),
            render: RenderSettings::default(),
            lighting: LightingSettings::default(),
            transform: TransformComposer::viewer_defaults(),
        }
    }
}

impl ViewerConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> MeshviewResult<Self> {
        toml::from_str(text).map_err(|e| MeshviewError::Serialization(format!("TOML parse failed: {e}")))
    }

    /// Serializes the config to TOML text.
    pub fn to_toml_string(&self) -> MeshviewResult<String> {
        toml::to_string(self).map_err(|e| MeshviewError::Serialization(format!("TOML write failed: {e}")))
    }

    /// Reads a config file and resolves `mesh_path` against its directory.
    pub fn from_path(path: impl AsRef<Path>) -> MeshviewResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;

        if config.mesh_path.is_relative() && !config.mesh_path.as_os_str().is_empty() {
            if let Some(dir) = path.parent() {
                config.mesh_path = dir.join(&config.mesh_path);
            }
        }
        tracing::debug!(path = %path.display(), mesh = %config.mesh_path.display(), "config loaded");
        Ok(config)
    }
}
