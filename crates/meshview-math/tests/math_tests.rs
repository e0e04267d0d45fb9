//! Integration tests for meshview-math.

use std::f32::consts::FRAC_PI_2;

use meshview_math::{Camera, Mat4, Pose, Projection, TransformComposer, Vec3, Vec4};

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ─── Pose Tests ───────────────────────────────────────────────

#[test]
fn unit_pose_is_identity() {
    let pose = Pose {
        scale: Vec3::ONE,
        ..Default::default()
    };
    assert!(pose.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn default_pose_collapses_to_origin() {
    // Scale defaults to zero, so every point lands on the translation.
    let pose = Pose::default();
    let p = pose.matrix().transform_point3(Vec3::new(3.0, -2.0, 5.0));
    assert!(approx_vec3(p, Vec3::ZERO));
}

#[test]
fn scale_applies_before_translation() {
    let pose = Pose {
        translate: Vec3::new(1.0, 0.0, 0.0),
        scale: Vec3::splat(2.0),
        ..Default::default()
    };
    let p = pose.matrix().transform_point3(Vec3::new(1.0, 1.0, 1.0));
    assert!(approx_vec3(p, Vec3::new(3.0, 2.0, 2.0)));
}

#[test]
fn rotation_order_is_x_then_y_then_z() {
    let pose = Pose {
        angle_x: FRAC_PI_2,
        angle_z: FRAC_PI_2,
        scale: Vec3::ONE,
        ..Default::default()
    };
    // Rx maps +Y to +Z; Rz leaves +Z alone.
    let p = pose.matrix().transform_point3(Vec3::Y);
    assert!(approx_vec3(p, Vec3::Z));

    // Rx leaves +X alone; Rz maps +X to +Y.
    let p = pose.matrix().transform_point3(Vec3::X);
    assert!(approx_vec3(p, Vec3::Y));
}

#[test]
fn non_uniform_scale() {
    let pose = Pose {
        scale: Vec3::new(1.0, 2.0, 3.0),
        ..Default::default()
    };
    let p = pose.matrix().transform_point3(Vec3::ONE);
    assert!(approx_vec3(p, Vec3::new(1.0, 2.0, 3.0)));
}

// ─── Camera / Projection Tests ────────────────────────────────

#[test]
fn camera_target_lands_on_negative_z() {
    let camera = Camera {
        position: Vec3::new(0.0, 0.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
    };
    let p = camera.matrix().transform_point3(Vec3::ZERO);
    assert!(approx_vec3(p, Vec3::new(0.0, 0.0, -5.0)));
}

#[test]
fn projection_maps_near_and_far_planes() {
    let projection = Projection {
        fov_degrees: 90.0,
        near: 1.0,
        far: 10.0,
        aspect_ratio: 1.0,
    };
    let m = projection.matrix();
    let near = m * Vec4::new(0.0, 0.0, -1.0, 1.0);
    let far = m * Vec4::new(0.0, 0.0, -10.0, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-5);
    assert!((far.z / far.w - 1.0).abs() < 1e-5);
}

#[test]
fn projection_fov_is_in_degrees() {
    let projection = Projection {
        fov_degrees: 90.0,
        near: 1.0,
        far: 10.0,
        aspect_ratio: 1.0,
    };
    // tan(45°) = 1, so a point at y = -z sits on the top edge.
    let clip = projection.matrix() * Vec4::new(0.0, 2.0, -2.0, 1.0);
    assert!((clip.y / clip.w - 1.0).abs() < 1e-5);
}

// ─── Composer Tests ───────────────────────────────────────────

#[test]
fn full_matrix_is_projection_view_model() {
    let composer = TransformComposer::viewer_defaults();
    let expected =
        composer.projection_matrix() * composer.view_matrix() * composer.model_matrix();
    assert!(composer.full_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn full_matrix_tracks_field_changes() {
    let mut composer = TransformComposer::viewer_defaults();
    let before = composer.full_matrix();
    composer.pose.translate.y += 0.02;
    let after = composer.full_matrix();
    assert!(!before.abs_diff_eq(after, 1e-9));

    composer.pose.translate.y -= 0.02;
    assert!(composer.full_matrix().abs_diff_eq(before, 1e-5));
}

#[test]
fn defaults() {
    let composer = TransformComposer::default();
    assert_eq!(composer.pose.scale, Vec3::ZERO);
    assert_eq!(composer.camera.up, Vec3::Y);
    assert_eq!(composer.projection.fov_degrees, 45.0);
    assert_eq!(composer.projection.near, 0.1);
    assert_eq!(composer.projection.far, 100.0);
    assert_eq!(composer.projection.aspect_ratio, 1.0);
}

#[test]
fn composer_deserializes_partial_toml() {
    let composer: TransformComposer = toml::from_str(
        r#"
        [pose]
        translate = [0.0, 0.0, 10.0]
        scale = [0.25, 0.25, 0.25]

        [projection]
        fov_degrees = 60.0
        "#,
    )
    .unwrap();
    assert_eq!(composer.pose.translate, Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(composer.projection.fov_degrees, 60.0);
    assert_eq!(composer.projection.far, 100.0);
    assert_eq!(composer.camera.up, Vec3::Y);
}
