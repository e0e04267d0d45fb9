//! meshview CLI: inspect OBJ meshes, export generated buffers, validate configs.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "meshview")]
#[command(version, about = "meshview: OBJ mesh loading and vertex buffer generation")]
struct Cli {
    /// Log filter directives, e.g. `info` or `meshview_mesh=debug`.
    #[arg(long, global = true, env = "MESHVIEW_LOG", default_value = "warn")]
    log_filter: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts and topology facts for an OBJ file.
    Inspect {
        /// Path to the OBJ file.
        path: String,
    },

    /// Load the mesh named by a viewer config and write generated frames to JSON.
    Export {
        /// Path to viewer config (TOML).
        config: String,

        /// Output JSON file path.
        #[arg(short, long, default_value = "frames.json")]
        output: String,

        /// Number of frames to generate.
        #[arg(short, long, default_value_t = 1)]
        frames: u32,

        /// Rotation about Y added to the pose after each frame, in radians.
        #[arg(long, default_value_t = 0.0)]
        angle_step: f32,
    },

    /// Validate a viewer config (.toml) or a mesh (.obj).
    Validate {
        /// Path to config or mesh file.
        path: String,
    },
}

fn initialize_tracing(log_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter);

    let result = match cli.command {
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Export {
            config,
            output,
            frames,
            angle_step,
        } => commands::export(&config, &output, frames, angle_step),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
