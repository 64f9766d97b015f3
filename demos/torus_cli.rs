use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use toroid_core::{TorusSpec, DEFAULT_MAJOR_SUBDIVISIONS, DEFAULT_MINOR_SUBDIVISIONS, NO_BORE};

/// Tessellate a torus or torus segment
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Load the torus from a JSON spec file (other shape flags are ignored)
    #[clap(short, long)]
    spec: Option<PathBuf>,

    /// Distance from the revolution axis to the tube centerline
    #[clap(long, default_value_t = 50.0)]
    major: f64,

    /// Outer radius of the tube cross-section
    #[clap(long, default_value_t = 30.0)]
    outer: f64,

    /// Bore radius: -1 for none, 0 for a solid tube
    #[clap(long, default_value_t = NO_BORE, allow_hyphen_values = true)]
    inner: f64,

    /// Start angle, in degrees
    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,

    /// Sweep angle, in degrees
    #[clap(long, default_value_t = 360.0, allow_hyphen_values = true)]
    sweep: f64,

    /// Segments along the sweep
    #[clap(long, default_value_t = DEFAULT_MAJOR_SUBDIVISIONS)]
    major_divs: u32,

    /// Segments around the cross-section
    #[clap(long, default_value_t = DEFAULT_MINOR_SUBDIVISIONS)]
    minor_divs: u32,

    /// Write the tessellation (`.obj`, `.csv`, `.xyz`)
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Write the effective spec as JSON
    #[clap(long)]
    save_spec: Option<PathBuf>,
}

impl Args {
    fn torus_spec(&self) -> Result<TorusSpec> {
        match &self.spec {
            Some(path) => toroid_io::read_spec(path)
                .with_context(|| format!("failed to load spec from {}", path.display())),
            None => Ok(TorusSpec::from_degrees(
                self.major,
                self.outer,
                self.inner,
                self.start,
                self.sweep,
                self.major_divs,
                self.minor_divs,
            )),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let spec = args.torus_spec()?;

    let start = Instant::now();
    let buffer = toroid_mesh::build(&spec)?;
    info!(
        "Built {} primitives / {} vertices in {:?}",
        buffer.primitive_count(),
        buffer.vertex_count(),
        start.elapsed()
    );
    for primitive in &buffer.primitives {
        info!(
            "  {}: {:?}, {} runs of {:?} vertices, {:?}",
            primitive.part.name(),
            primitive.kind,
            primitive.run_count(),
            primitive.vertex_counts.first().copied().unwrap_or(0),
            primitive.winding
        );
    }

    if let Some(out) = &args.out {
        toroid_io::write_mesh_buffer(&buffer, out)
            .with_context(|| format!("failed to write {}", out.display()))?;
        info!("Wrote {}", out.display());
    }

    if let Some(path) = &args.save_spec {
        toroid_io::write_spec(&spec, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
