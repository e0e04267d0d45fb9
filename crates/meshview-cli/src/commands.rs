//! CLI command implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use meshview_io::{reconcile, validate_config, ViewerConfig};
use meshview_mesh::topology::Topology;
use meshview_mesh::{Mesh, ObjLoader};
use meshview_render::{FrameDriver, JsonFrameExporter, Renderer};

/// Print counts and topology facts for an OBJ file.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(path);
    let loader = match path.parent() {
        Some(dir) => ObjLoader::with_base_dir(dir),
        None => ObjLoader::new(),
    };
    let (mesh, stats) = loader.parse_with_stats(BufReader::new(File::open(path)?))?;

    println!("meshview Inspector");
    println!("──────────────────");
    println!("File:             {}", path.display());
    println!("Lines:            {}", stats.lines);
    println!("Skipped records:  {}", stats.skipped_records);
    println!("Dropped faces:    {}", stats.dropped_faces);
    println!("Material libs:    {}", stats.material_libraries);
    println!();
    println!("Vertices:         {}", mesh.vertex_count());
    println!("Triangles:        {}", mesh.triangle_count());
    println!("Faces:            {}", mesh.faces().len());
    println!("Tex coords:       {}", mesh.tex_coords().len());
    println!("Normal samples:   {}", mesh.normal_samples().len());
    println!("Isolated verts:   {}", mesh.topology().isolated_vertices().count());
    println!("Boundary edges:   {}", Topology::boundary_edge_count(&mesh));
    println!("Closed:           {}", Topology::is_closed(&mesh));
    Ok(())
}

/// Load the configured mesh, drive frames through the JSON exporter.
pub fn export(
    config_path: &str,
    output_path: &str,
    frames: u32,
    angle_step: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ViewerConfig::from_path(config_path)?;
    validate_config(&config)?;
    for adjustment in reconcile(&mut config.render) {
        println!("Note: {adjustment}");
    }

    let mesh = load_mesh(&config.mesh_path)?;
    let mut exporter = JsonFrameExporter::new(output_path);
    exporter.init(&mesh)?;

    let mut driver = FrameDriver::new(config.render.layout, config.render.generate_flags());
    let mut composer = config.transform;
    for _ in 0..frames {
        driver.render_frame(&mesh, &composer, &mut exporter)?;
        composer.pose.angle_y += angle_step;
    }
    exporter.finalize()?;

    println!(
        "Exported {} frame(s) of {} ({} verts, {} tris, {:?} layout) to {output_path}",
        exporter.frame_count(),
        config.mesh_path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        driver.layout(),
    );
    println!("Average frame time: {:.3} ms", driver.average_frame_time() * 1000.0);
    Ok(())
}

/// Validate a viewer config or a mesh.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("meshview Validator");
    println!("──────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let mut config = ViewerConfig::from_path(path)?;
        validate_config(&config)?;
        for adjustment in reconcile(&mut config.render) {
            println!("Note: {adjustment}");
        }
        println!("✅ Config is valid.");
    } else if path.ends_with(".obj") {
        println!("Validating mesh: {path}");
        let mesh = load_mesh(Path::new(path))?;
        println!(
            "✅ Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    } else {
        println!("Unsupported file format. Use .toml (config) or .obj (mesh).");
    }

    Ok(())
}

fn load_mesh(path: &Path) -> Result<Mesh, Box<dyn std::error::Error>> {
    let mesh = ObjLoader::try_load(path)?;
    if mesh.is_empty() {
        tracing::warn!(path = %path.display(), "mesh has no triangles");
    }
    Ok(mesh)
}
