//! # Torus Primitive
//!
//! Generates torus and partial-band meshes from a rectangular parameter grid.

use crate::error::MeshError;
use crate::mesh::MeshBuffer;
use crate::params::SurfaceParameters;
use glam::{DVec2, DVec3};

/// Creates a torus or partial-band mesh with positions, UVs, and indices.
///
/// # Arguments
///
/// * `params` - Surface parameters (segment counts, radii, angular ranges)
///
/// # Returns
///
/// A mesh with `(width_segments + 1) * (height_segments + 1)` vertices and
/// `width_segments * height_segments * 2` triangles. Normals are not
/// computed; use [`create_torus_smooth`] for shaded rendering.
///
/// # Algorithm
///
/// The surface is treated as a deformed plane sampled on a uniform grid:
/// - Grid coordinates map to `u, v ∈ [0, 1]`, emitted directly as UVs.
/// - The meridian (tube) angle is `meridian_start + v * meridian_length`;
///   the longitude angle is `longitude_start + u * longitude_length`.
/// - Embedding: `x = (R + r·cos θ)·cos φ`, `y = (R + r·cos θ)·sin(−φ)`,
///   `z = r·sin θ`. The negated longitude in the `y` term sets the
///   handedness the triangulation's winding depends on.
/// - Each grid cell emits two counter-clockwise triangles.
///
/// For a full `2π` sweep the first and last grid columns land on coincident
/// points but stay separate vertices, keeping the UV seam intact for
/// texture wrapping.
///
/// # Example
///
/// ```rust
/// use torus_mesh::{create_torus, SurfaceParameters};
///
/// let params = SurfaceParameters::full_torus(128, 64, 6.0 / 5.0, 1.0 / 3.0);
/// let mesh = create_torus(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 129 * 65);
/// ```
pub fn create_torus(params: &SurfaceParameters) -> Result<MeshBuffer, MeshError> {
    params.validate()?;

    let mut mesh = MeshBuffer::with_capacity(params.vertex_count(), params.index_count());

    // Generate vertices row by row (meridian-major order)
    for iy in 0..=params.height_segments {
        let v = iy as f64 / params.height_segments as f64;
        let theta = params.meridian_start + v * params.meridian_length;
        let (sin_theta, cos_theta) = theta.sin_cos();

        // Distance from the torus axis for this tube ring
        let ring_radius = params.major_radius + params.minor_radius * cos_theta;
        let z = params.minor_radius * sin_theta;

        for ix in 0..=params.width_segments {
            let u = ix as f64 / params.width_segments as f64;
            let phi = params.longitude_start + u * params.longitude_length;

            let x = ring_radius * phi.cos();
            let y = ring_radius * (-phi).sin();

            mesh.add_vertex(DVec3::new(x, y, z), DVec2::new(u, v));
        }
    }

    // Generate triangles (two per grid cell, fixed winding)
    let verts_per_row = params.width_segments + 1;
    for iy in 0..params.height_segments {
        for ix in 0..params.width_segments {
            let a = iy * verts_per_row + ix;
            let b = a + 1;
            let c = a + verts_per_row;
            let d = c + 1;

            mesh.add_triangle(a, c, b);
            mesh.add_triangle(b, c, d);
        }
    }

    Ok(mesh)
}

/// Creates a torus or partial-band mesh with smooth per-vertex normals.
///
/// Identical to [`create_torus`], then derives normals by averaging
/// adjacent face normals over the generated index buffer. Normals are
/// mesh-accurate rather than taken from the closed-form surface normal, so
/// shading matches the discrete triangulation, including at the seam where
/// the duplicated columns are never normal-averaged across the boundary.
///
/// # Example
///
/// ```rust
/// use torus_mesh::{create_torus_smooth, SurfaceParameters};
///
/// let mesh = create_torus_smooth(&SurfaceParameters::default()).unwrap();
/// assert!(mesh.normals().is_some());
/// ```
pub fn create_torus_smooth(params: &SurfaceParameters) -> Result<MeshBuffer, MeshError> {
    let mut mesh = create_torus(params)?;
    mesh.compute_smooth_normals();
    Ok(mesh)
}
