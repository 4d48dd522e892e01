//! # Torus Mesh
//!
//! Parametric torus and band mesh generation for the toroidal-splitting
//! viewer. Produces explicit vertex/index buffers (positions, UVs, optional
//! smooth normals, triangle indices) ready for GPU submission by a host
//! rendering layer.
//!
//! ## Architecture
//!
//! ```text
//! SurfaceParameters → torus-mesh (MeshBuffer) → host scene assembly
//! ```
//!
//! ## Properties
//!
//! The builder is a pure function: no state, no I/O, safe to call from any
//! number of threads concurrently. Each call returns ownership of a fresh
//! buffer. Parameter validation happens up front; a returned buffer is
//! always fully populated and structurally consistent.
//!
//! A closed (`2π`) sweep keeps its seam as duplicated vertex columns so the
//! UV mapping stays continuous for texture wrapping; no vertex welding is
//! performed.
//!
//! ## Usage
//!
//! ```rust
//! use torus_mesh::{create_torus_smooth, SurfaceParameters};
//!
//! let params = SurfaceParameters::full_torus(128, 64, 6.0 / 5.0, 1.0 / 3.0);
//! let mesh = create_torus_smooth(&params)?;
//!
//! let positions = mesh.positions_f32(); // [x, y, z, ...]
//! let uvs = mesh.uvs_f32();             // [u, v, ...]
//! let normals = mesh.normals_f32().unwrap();
//! let indices = mesh.indices();
//! # assert_eq!(positions.len() / 3, indices.iter().copied().max().unwrap() as usize + 1);
//! # Ok::<(), torus_mesh::MeshError>(())
//! ```

pub mod cache;
pub mod error;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use cache::MeshCache;
pub use error::MeshError;
pub use mesh::MeshBuffer;
pub use params::SurfaceParameters;
pub use primitives::{create_torus, create_torus_smooth};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_torus_builds() {
        let mesh = create_torus(&SurfaceParameters::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 129 * 65);
        assert_eq!(mesh.indices().len(), 128 * 64 * 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_gpu_export_lengths_agree() {
        let mesh = create_torus_smooth(&SurfaceParameters::full_torus(16, 8, 1.0, 0.3)).unwrap();
        let vertex_count = mesh.vertex_count();
        assert_eq!(mesh.positions_f32().len(), vertex_count * 3);
        assert_eq!(mesh.uvs_f32().len(), vertex_count * 2);
        assert_eq!(mesh.normals_f32().unwrap().len(), vertex_count * 3);
    }
}
