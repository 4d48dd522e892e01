//! # Surface Parameters
//!
//! Parameter set describing a torus or partial-band surface.

use crate::error::MeshError;
use config::constants::{
    DEFAULT_HEIGHT_SEGMENTS, DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS, DEFAULT_WIDTH_SEGMENTS,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters for a torus or partial-band surface.
///
/// A full torus sweeps both the meridian (tube) circle and the longitude
/// (main) circle through `2π`. Restricting either sweep produces a band,
/// e.g. a boundary-curve ribbon or an obstruction ring segment.
///
/// Angles are in radians. `minor_radius >= major_radius` describes a
/// self-intersecting torus; that is geometrically valid input and is not
/// rejected.
///
/// # Example
///
/// ```rust
/// use torus_mesh::SurfaceParameters;
///
/// let torus = SurfaceParameters::full_torus(128, 64, 6.0 / 5.0, 1.0 / 3.0);
/// assert!(torus.validate().is_ok());
/// assert_eq!(torus.vertex_count(), 129 * 65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParameters {
    /// Subdivisions around the longitude (main) circle. Must be >= 1.
    pub width_segments: u32,
    /// Subdivisions around the meridian (tube) circle. Must be >= 1.
    pub height_segments: u32,
    /// Distance from the torus axis to the tube center. Must be > 0.
    pub major_radius: f64,
    /// Radius of the tube cross-section. Must be > 0.
    pub minor_radius: f64,
    /// Start angle of the meridian sweep, in radians.
    pub meridian_start: f64,
    /// Angular extent of the meridian sweep, in radians. Must be > 0;
    /// `2π` closes the tube.
    pub meridian_length: f64,
    /// Start angle of the longitude sweep, in radians.
    pub longitude_start: f64,
    /// Angular extent of the longitude sweep, in radians. Must be > 0;
    /// `2π` closes the torus.
    pub longitude_length: f64,
}

impl Default for SurfaceParameters {
    /// The viewer's default boundary torus: full sweeps, 128x64 grid,
    /// R = 6/5, r = 1/3.
    fn default() -> Self {
        Self::full_torus(
            DEFAULT_WIDTH_SEGMENTS,
            DEFAULT_HEIGHT_SEGMENTS,
            DEFAULT_MAJOR_RADIUS,
            DEFAULT_MINOR_RADIUS,
        )
    }
}

impl SurfaceParameters {
    /// Creates parameters for a closed torus (both sweeps are `2π`).
    pub fn full_torus(
        width_segments: u32,
        height_segments: u32,
        major_radius: f64,
        minor_radius: f64,
    ) -> Self {
        Self {
            width_segments,
            height_segments,
            major_radius,
            minor_radius,
            meridian_start: 0.0,
            meridian_length: TAU,
            longitude_start: 0.0,
            longitude_length: TAU,
        }
    }

    /// Number of vertices in the generated grid, including the seam
    /// rows/columns: `(width_segments + 1) * (height_segments + 1)`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.width_segments as usize + 1) * (self.height_segments as usize + 1)
    }

    /// Number of indices in the generated buffer: two triangles per grid
    /// cell, `width_segments * height_segments * 6`.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.width_segments as usize * self.height_segments as usize * 6
    }

    /// Validates all parameter constraints.
    ///
    /// Checks are performed before any buffer allocation:
    /// - `width_segments >= 1` and `height_segments >= 1`
    /// - `major_radius > 0` and `minor_radius > 0`
    /// - `meridian_length > 0` and `longitude_length > 0` (a zero-length
    ///   sweep would collapse a grid dimension)
    ///
    /// `minor_radius >= major_radius` is accepted: the builder has no
    /// opinion on embeddability, only on structural consistency.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.width_segments < 1 {
            return Err(MeshError::invalid_parameter(format!(
                "width_segments must be at least 1: {}",
                self.width_segments
            )));
        }

        if self.height_segments < 1 {
            return Err(MeshError::invalid_parameter(format!(
                "height_segments must be at least 1: {}",
                self.height_segments
            )));
        }

        if self.major_radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "major_radius must be positive: {}",
                self.major_radius
            )));
        }

        if self.minor_radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "minor_radius must be positive: {}",
                self.minor_radius
            )));
        }

        if self.meridian_length <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "meridian_length must be positive: {}",
                self.meridian_length
            )));
        }

        if self.longitude_length <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "longitude_length must be positive: {}",
                self.longitude_length
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_torus_sweeps() {
        let params = SurfaceParameters::full_torus(4, 4, 1.0, 0.3);
        assert_eq!(params.meridian_start, 0.0);
        assert_eq!(params.longitude_start, 0.0);
        assert_eq!(params.meridian_length, TAU);
        assert_eq!(params.longitude_length, TAU);
    }

    #[test]
    fn test_default_matches_viewer() {
        let params = SurfaceParameters::default();
        assert_eq!(params.width_segments, 128);
        assert_eq!(params.height_segments, 64);
        assert_eq!(params.major_radius, 6.0 / 5.0);
        assert_eq!(params.minor_radius, 1.0 / 3.0);
    }

    #[test]
    fn test_counts() {
        let params = SurfaceParameters::full_torus(4, 3, 1.0, 0.3);
        assert_eq!(params.vertex_count(), 5 * 4);
        assert_eq!(params.index_count(), 4 * 3 * 6);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(SurfaceParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_segments() {
        let mut params = SurfaceParameters::default();
        params.width_segments = 0;
        assert!(params.validate().is_err());

        let mut params = SurfaceParameters::default();
        params.height_segments = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_radii() {
        let mut params = SurfaceParameters::default();
        params.major_radius = 0.0;
        assert!(params.validate().is_err());

        let mut params = SurfaceParameters::default();
        params.minor_radius = -0.5;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_sweeps() {
        let mut params = SurfaceParameters::default();
        params.meridian_length = 0.0;
        assert!(params.validate().is_err());

        let mut params = SurfaceParameters::default();
        params.longitude_length = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_self_intersecting_torus() {
        // r >= R is geometrically valid input
        let params = SurfaceParameters::full_torus(8, 8, 0.5, 0.8);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let params = SurfaceParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: SurfaceParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
