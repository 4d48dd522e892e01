//! # Mesh Cache
//!
//! Memoization table for parameter-driven rebuilds.
//!
//! The viewer regenerates a surface whenever one of its UI-bound parameters
//! changes. Since the builder is pure, the rebuild reduces to a lookup keyed
//! by the parameter tuple; this cache provides that lookup for hosts that
//! want it. The builder itself never caches.

use crate::error::MeshError;
use crate::mesh::MeshBuffer;
use crate::params::SurfaceParameters;
use crate::primitives::{create_torus, create_torus_smooth};
use std::collections::HashMap;

/// Cache key: the exact bit patterns of the parameter tuple plus the
/// normal-aware flag. Bit-level keying means a hit is only ever returned
/// for parameters the builder would map to an identical buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    width_segments: u32,
    height_segments: u32,
    smooth: bool,
    angles: [u64; 6],
}

impl CacheKey {
    fn new(params: &SurfaceParameters, smooth: bool) -> Self {
        Self {
            width_segments: params.width_segments,
            height_segments: params.height_segments,
            smooth,
            angles: [
                params.major_radius.to_bits(),
                params.minor_radius.to_bits(),
                params.meridian_start.to_bits(),
                params.meridian_length.to_bits(),
                params.longitude_start.to_bits(),
                params.longitude_length.to_bits(),
            ],
        }
    }
}

/// Memoizes torus builds keyed by their input parameters.
///
/// # Example
///
/// ```rust
/// use torus_mesh::{MeshCache, SurfaceParameters};
///
/// let mut cache = MeshCache::new();
/// let params = SurfaceParameters::default();
/// let _ = cache.get_or_build(&params).unwrap();
/// let _ = cache.get_or_build(&params).unwrap(); // hit, no rebuild
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshCache {
    entries: HashMap<CacheKey, MeshBuffer>,
}

impl MeshCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached positions+UVs mesh for `params`, building it on
    /// first use.
    ///
    /// Invalid parameters are rejected before anything is inserted.
    pub fn get_or_build(&mut self, params: &SurfaceParameters) -> Result<&MeshBuffer, MeshError> {
        self.get_or_insert(params, false)
    }

    /// Returns the cached normal-aware mesh for `params`, building it on
    /// first use.
    pub fn get_or_build_smooth(
        &mut self,
        params: &SurfaceParameters,
    ) -> Result<&MeshBuffer, MeshError> {
        self.get_or_insert(params, true)
    }

    fn get_or_insert(
        &mut self,
        params: &SurfaceParameters,
        smooth: bool,
    ) -> Result<&MeshBuffer, MeshError> {
        let key = CacheKey::new(params, smooth);

        if !self.entries.contains_key(&key) {
            let mesh = if smooth {
                create_torus_smooth(params)?
            } else {
                create_torus(params)?
            };
            self.entries.insert(key, mesh);
        }

        Ok(&self.entries[&key])
    }

    /// Returns the number of cached meshes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no meshes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all cached meshes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
