//! Rebuild-on-change caching for callers that re-tessellate as parameters move.

use crate::assembler::build;
use log::trace;
use std::sync::Arc;
use toroid_core::{MeshBuffer, Result, TorusSpec};

/// Holds the buffer of the last spec built.
///
/// The buffer is rebuilt only when a different spec is requested. Buffers
/// are shared through `Arc`, so a consumer may keep one alive after the cache
/// has moved on.
#[derive(Debug, Default)]
pub struct TorusCache {
    entry: Option<(TorusSpec, Arc<MeshBuffer>)>,
}

impl TorusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached buffer was built from `spec`
    pub fn is_valid_for(&self, spec: &TorusSpec) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached == spec)
    }

    /// Return the buffer for `spec`, building it if the cache holds another spec.
    /// A failed build leaves the previous entry in place.
    pub fn get_or_build(&mut self, spec: &TorusSpec) -> Result<Arc<MeshBuffer>> {
        if let Some((cached, buffer)) = &self.entry {
            if cached == spec {
                trace!("torus cache hit");
                return Ok(Arc::clone(buffer));
            }
        }

        let buffer = Arc::new(build(spec)?);
        self.entry = Some((*spec, Arc::clone(&buffer)));
        Ok(buffer)
    }

    /// Drop the cached buffer
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_buffer_for_equal_spec() {
        let mut cache = TorusCache::new();
        let spec = TorusSpec::default();
        assert!(!cache.is_valid_for(&spec));

        let a = cache.get_or_build(&spec).unwrap();
        let b = cache.get_or_build(&spec).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(cache.is_valid_for(&spec));
    }

    #[test]
    fn test_rebuilds_on_change_and_invalidate() {
        let mut cache = TorusCache::new();
        let spec = TorusSpec::default();
        let a = cache.get_or_build(&spec).unwrap();

        let changed = spec.with_subdivisions(10, 8);
        let b = cache.get_or_build(&changed).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!cache.is_valid_for(&spec));

        cache.invalidate();
        assert!(!cache.is_valid_for(&changed));
        let c = cache.get_or_build(&changed).unwrap();
        assert_eq!(*b, *c);
    }

    #[test]
    fn test_failed_build_keeps_previous_entry() {
        let mut cache = TorusCache::new();
        let spec = TorusSpec::default();
        cache.get_or_build(&spec).unwrap();

        assert!(cache.get_or_build(&spec.with_bore(99.0)).is_err());
        assert!(cache.is_valid_for(&spec));
    }
}
