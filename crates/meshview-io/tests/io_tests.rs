//! Integration tests for meshview-io.

use meshview_io::contract::{DepthView, LightingSettings, RenderSettings, ShadingMode, ViewerConfig};
use meshview_io::validator::{reconcile, validate_config, Adjustment};
use meshview_math::Vec3;
use meshview_render::Layout;

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_settings_match_viewer_startup() {
    let render = RenderSettings::default();
    assert_eq!(render.layout, Layout::Indexed);
    assert_eq!(render.shading, ShadingMode::Flat);
    assert_eq!(render.depth_view, DepthView::None);
    assert!(!render.cpu_transform);

    let lighting = LightingSettings::default();
    assert!((lighting.ambient_intensity - 0.2).abs() < 1e-6);
    assert!((lighting.light_direction.length() - 1.0).abs() < 1e-6);
}

#[test]
fn generate_flags_follow_shading() {
    let mut render = RenderSettings::default();
    let flags = render.generate_flags();
    assert!(flags.normals && flags.flat_normals);

    render.shading = ShadingMode::Phong;
    let flags = render.generate_flags();
    assert!(flags.normals && !flags.flat_normals);

    render.shading = ShadingMode::None;
    render.cpu_transform = true;
    let flags = render.generate_flags();
    assert!(!flags.normals && !flags.flat_normals);
    assert!(flags.cpu_transform);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = ViewerConfig::from_toml_str(
        r#"
mesh_path = "cube.obj"

[render]
shading = "gouraud"
depth_view = "z_prime"

[transform.pose]
angle_y = 1.5
"#,
    )
    .unwrap();
    assert_eq!(config.render.shading, ShadingMode::Gouraud);
    assert_eq!(config.render.depth_view, DepthView::ZPrime);
    assert_eq!(config.render.layout, Layout::Indexed);
    assert_eq!(config.transform.pose.angle_y, 1.5);
    assert_eq!(config.transform.projection.fov_degrees, 45.0);
    assert_eq!(config.lighting, LightingSettings::default());
}

#[test]
fn unknown_enum_value_rejected() {
    let result = ViewerConfig::from_toml_str("[render]\nshading = \"toon\"\n");
    assert!(result.is_err());
}

#[test]
fn toml_round_trip() {
    let mut config = ViewerConfig::default();
    config.mesh_path = "scene/teapot.obj".into();
    config.render.layout = Layout::Flattened;
    config.lighting.specular_color = Vec3::new(0.5, 0.5, 1.0);

    let text = config.to_toml_string().unwrap();
    let recovered = ViewerConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn json_round_trip() {
    let config = ViewerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: ViewerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn from_path_resolves_mesh_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.toml");
    std::fs::write(&path, "mesh_path = \"models/cube.obj\"\n").unwrap();

    let config = ViewerConfig::from_path(&path).unwrap();
    assert_eq!(config.mesh_path, dir.path().join("models/cube.obj"));
}

#[test]
fn from_path_missing_file() {
    assert!(ViewerConfig::from_path("/nonexistent/viewer.toml").is_err());
}

// ─── Reconcile Tests ──────────────────────────────────────────

#[test]
fn defaults_flatten_for_flat_shading() {
    let mut render = RenderSettings::default();
    let adjustments = reconcile(&mut render);
    assert_eq!(adjustments, vec![Adjustment::FlattenedForFlatShading]);
    assert_eq!(render.layout, Layout::Flattened);
}

#[test]
fn depth_view_disables_shading_first() {
    let mut render = RenderSettings {
        depth_view: DepthView::ZTilde,
        ..Default::default()
    };
    let adjustments = reconcile(&mut render);
    assert_eq!(
        adjustments,
        vec![Adjustment::ShadingDisabledForDepthView {
            was: ShadingMode::Flat,
            depth_view: DepthView::ZTilde,
        }]
    );
    assert_eq!(render.shading, ShadingMode::None);
    assert_eq!(render.layout, Layout::Indexed);
}

#[test]
fn consistent_settings_untouched() {
    let mut render = RenderSettings {
        shading: ShadingMode::Phong,
        ..Default::default()
    };
    let before = render;
    assert!(reconcile(&mut render).is_empty());
    assert_eq!(render, before);
}

#[test]
fn reconcile_is_idempotent() {
    let mut render = RenderSettings::default();
    reconcile(&mut render);
    assert!(reconcile(&mut render).is_empty());
}

// ─── Validator Tests ──────────────────────────────────────────

fn make_valid_config() -> ViewerConfig {
    ViewerConfig {
        mesh_path: "cube.obj".into(),
        ..Default::default()
    }
}

#[test]
fn valid_config_passes() {
    assert!(validate_config(&make_valid_config()).is_ok());
}

#[test]
fn missing_mesh_path_rejected() {
    assert!(validate_config(&ViewerConfig::default()).is_err());
}

#[test]
fn non_positive_near_rejected() {
    let mut config = make_valid_config();
    config.transform.projection.near = 0.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn far_before_near_rejected() {
    let mut config = make_valid_config();
    config.transform.projection.far = 0.1;
    assert!(validate_config(&config).is_err());
}

#[test]
fn fov_out_of_range_rejected() {
    let mut config = make_valid_config();
    config.transform.projection.fov_degrees = 190.0;
    assert!(validate_config(&config).is_err());
    config.transform.projection.fov_degrees = f32::NAN;
    assert!(validate_config(&config).is_err());
}

#[test]
fn negative_intensity_rejected() {
    let mut config = make_valid_config();
    config.lighting.ambient_intensity = -0.1;
    assert!(validate_config(&config).is_err());
}
