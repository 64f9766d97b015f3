//! JSON torus spec files
//!
//! ```json
//! {
//!   "major_radius": 50.0,
//!   "outer_radius": 30.0,
//!   "inner_radius": 10.0,
//!   "start_angle": 0.0,
//!   "sweep_angle": 4.71238898038469,
//!   "major_subdivisions": 70,
//!   "minor_subdivisions": 40
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use toroid_core::{Error, Result, TorusSpec};

/// Parse and validate a spec from JSON text
pub fn parse_spec(text: &str) -> Result<TorusSpec> {
    let spec: TorusSpec = serde_json::from_str(text)
        .map_err(|e| Error::InvalidData(format!("Malformed torus spec: {e}")))?;
    spec.validate()?;
    Ok(spec)
}

/// Read and validate a spec file
pub fn read_spec<P: AsRef<Path>>(path: P) -> Result<TorusSpec> {
    let mut text = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut text)?;
    parse_spec(&text)
}

/// Write a spec as pretty-printed JSON
pub fn write_spec<P: AsRef<Path>>(spec: &TorusSpec, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, spec)
        .map_err(|e| Error::InvalidData(format!("Could not serialize torus spec: {e}")))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
