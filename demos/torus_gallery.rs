//! Gallery of reference tori
//!
//! Builds a closed ring, a hollow three-quarter segment and a solid
//! three-quarter segment in parallel, and prints what the renderer would get.

use env_logger::Env;
use log::info;
use toroid_core::{Drawable, MeshBuffer, TorusSpec, NO_BORE};

fn describe(name: &str, buffer: &MeshBuffer) {
    println!("\n{name}");
    println!("{}", "-".repeat(name.len()));
    for primitive in &buffer.primitives {
        println!(
            "  {:<11} {:?} x{:<3} {:>5} vertices  {:?}",
            primitive.part.name(),
            primitive.kind,
            primitive.run_count(),
            primitive.vertex_count(),
            primitive.winding,
        );
    }
    let (min, max) = buffer.bounding_box();
    println!(
        "  total {} vertices, bounds ({:.1}, {:.1}, {:.1}) .. ({:.1}, {:.1}, {:.1})",
        buffer.vertex_count(),
        min.x,
        min.y,
        min.z,
        max.x,
        max.y,
        max.z
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("toroid gallery");
    println!("==============");

    let gallery = [
        ("Closed ring", TorusSpec::from_degrees(50.0, 30.0, NO_BORE, 0.0, 360.0, 50, 20)),
        ("Hollow segment", TorusSpec::from_degrees(50.0, 30.0, 10.0, 0.0, 270.0, 5, 4)),
        ("Solid segment", TorusSpec::from_degrees(50.0, 30.0, 0.0, 0.0, 270.0, 70, 40)),
    ];

    let specs: Vec<TorusSpec> = gallery.iter().map(|(_, spec)| *spec).collect();
    let results = toroid_mesh::build_all(&specs);
    info!("built {} tori", results.len());

    for ((name, _), result) in gallery.iter().zip(results) {
        describe(name, &result?);
    }

    Ok(())
}
