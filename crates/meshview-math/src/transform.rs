//! Model, view, and projection matrices.
//!
//! The surrounding application owns a [`TransformComposer`] and writes
//! its fields directly between frames (e.g. in response to input).
//! Every matrix getter recomputes from the current fields; nothing is
//! cached, so there is no invalidation to track.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Object placement: translation, Euler angles, and non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    /// World-space translation.
    pub translate: Vec3,
    /// Rotation about X in radians. Applied first.
    pub angle_x: f32,
    /// Rotation about Y in radians.
    pub angle_y: f32,
    /// Rotation about Z in radians. Applied last.
    pub angle_z: f32,
    /// Per-axis scale, applied before any rotation.
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            angle_x: 0.0,
            angle_y: 0.0,
            angle_z: 0.0,
            scale: Vec3::ZERO,
        }
    }
}

impl Pose {
    /// `T · Rz · Ry · Rx · S`: scale, then rotate X→Y→Z, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from_rotation_z(self.angle_z)
            * Mat4::from_rotation_y(self.angle_y)
            * Mat4::from_rotation_x(self.angle_x)
            * Mat4::from_scale(self.scale)
    }
}

/// Look-at camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Right-handed look-at view matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping distance.
    pub near: f32,
    /// Far clipping distance.
    pub far: f32,
    /// Width / height.
    pub aspect_ratio: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective with OpenGL's `[-1, 1]` clip depth.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

/// Composes pose, camera, and projection into a single clip-space transform.
///
/// Fields are public and unvalidated. Callers must sequence writes and
/// reads: update fields, then query matrices, never both concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformComposer {
    pub pose: Pose,
    pub camera: Camera,
    pub projection: Projection,
}

impl TransformComposer {
    /// The startup pose and camera of the interactive viewer: the model is
    /// pushed 10 units along +Z, tilted -45 radians about X, scaled to a
    /// quarter, and seen from `(0, 0, -1)` with a 4:3 frustum over `[0.2, 10]`.
    pub fn viewer_defaults() -> Self {
        Self {
            pose: Pose {
                translate: Vec3::new(0.0, 0.0, 10.0),
                angle_x: -45.0,
                angle_y: 0.0,
                angle_z: 0.0,
                scale: Vec3::splat(0.25),
            },
            camera: Camera {
                position: Vec3::new(0.0, 0.0, -1.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            projection: Projection {
                fov_degrees: 45.0,
                near: 0.2,
                far: 10.0,
                aspect_ratio: 4.0 / 3.0,
            },
        }
    }

    /// Model matrix from the current pose.
    pub fn model_matrix(&self) -> Mat4 {
        self.pose.matrix()
    }

    /// View matrix from the current camera.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.matrix()
    }

    /// Projection matrix from the current projection parameters.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// `projection · view · model`.
    pub fn full_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix() * self.model_matrix()
    }
}
