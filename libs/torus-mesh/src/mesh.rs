//! # Mesh Buffer
//!
//! Vertex/index buffer representation for generated surfaces.

use glam::{DVec2, DVec3};

/// A triangle mesh with positions, UVs, optional normals, and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the GPU submission boundary.
///
/// Vertices are stored in row-major (meridian-major) grid order; index
/// triples describe counter-clockwise-wound triangles relative to the
/// surface's front face.
///
/// # Example
///
/// ```rust
/// use torus_mesh::MeshBuffer;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Parametric UV coordinates, aligned by index with positions
    uvs: Vec<DVec2>,
    /// Optional smooth vertex normals
    normals: Option<Vec<DVec3>>,
    /// Triangle indices (3 indices per triangle)
    indices: Vec<u32>,
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuffer {
    /// Creates an empty mesh buffer.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: None,
            indices: Vec::new(),
        }
    }

    /// Creates a mesh buffer with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            normals: None,
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its UV coordinate and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.push(v0);
        self.indices.push(v1);
        self.indices.push(v2);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the UV coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the vertex normals, if computed.
    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns a reference to the triangle indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the position at the given vertex index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the UV coordinate at the given vertex index.
    #[inline]
    pub fn uv(&self, index: u32) -> DVec2 {
        self.uvs[index as usize]
    }

    /// Computes smooth per-vertex normals over the discrete mesh.
    ///
    /// For each triangle the face normal is taken from the edge cross
    /// product and accumulated unnormalized into each of its three
    /// vertices; every vertex's sum is then normalized. Vertices are never
    /// merged: where a closed sweep's seam duplicates a column, each side
    /// of the seam averages only its own adjacent faces.
    pub fn compute_smooth_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Validates the mesh buffer for structural consistency.
    ///
    /// Checks:
    /// - Position and UV buffers have equal length
    /// - Normal buffer, if present, matches the vertex count
    /// - Index count is a multiple of 3 and every index is in range
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.uvs.len() != self.positions.len() {
            return false;
        }

        if let Some(normals) = &self.normals {
            if normals.len() != self.positions.len() {
                return false;
            }
        }

        if self.indices.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < vertex_count)
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 3);
        for p in &self.positions {
            result.push(p.x as f32);
            result.push(p.y as f32);
            result.push(p.z as f32);
        }
        result
    }

    /// Exports UV coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }
}
