//! # Configuration Constants
//!
//! Centralized constants for the toroidal-splitting mesh pipeline. All
//! geometry tolerances and default tessellation parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters for torus surfaces
//! - **Geometry**: Default radii of the viewer's boundary tori

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when checking that the two seam columns of a
/// closed sweep land on coincident points.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Allowed deviation of a unit normal's length from 1.0.
///
/// Smooth normals are accumulated from face normals and then normalized;
/// this tolerance bounds the residual numerical error a consumer may see.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_UNIT_TOLERANCE;
///
/// let length: f64 = 0.9999999;
/// assert!((1.0 - length).abs() < NORMAL_UNIT_TOLERANCE);
/// ```
pub const NORMAL_UNIT_TOLERANCE: f64 = 1e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of subdivisions around the longitude (main) circle.
///
/// Matches the viewer's default torus tessellation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_WIDTH_SEGMENTS;
///
/// let columns = DEFAULT_WIDTH_SEGMENTS + 1; // grid columns include the seam
/// assert_eq!(columns, 129);
/// ```
pub const DEFAULT_WIDTH_SEGMENTS: u32 = 128;

/// Default number of subdivisions around the meridian (tube) circle.
///
/// Matches the viewer's default torus tessellation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HEIGHT_SEGMENTS;
///
/// let rows = DEFAULT_HEIGHT_SEGMENTS + 1; // grid rows include the seam
/// assert_eq!(rows, 65);
/// ```
pub const DEFAULT_HEIGHT_SEGMENTS: u32 = 64;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default major radius (distance from the torus axis to the tube center).
///
/// The viewer's boundary tori use R = 6/5.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAJOR_RADIUS;
///
/// assert_eq!(DEFAULT_MAJOR_RADIUS, 6.0 / 5.0);
/// ```
pub const DEFAULT_MAJOR_RADIUS: f64 = 6.0 / 5.0;

/// Default minor radius (radius of the tube cross-section).
///
/// The viewer's boundary tori use r = 1/3. Smaller values are used for
/// boundary-curve ribbons and obstruction rings.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS};
///
/// // The default torus does not self-intersect.
/// assert!(DEFAULT_MINOR_RADIUS < DEFAULT_MAJOR_RADIUS);
/// ```
pub const DEFAULT_MINOR_RADIUS: f64 = 1.0 / 3.0;
