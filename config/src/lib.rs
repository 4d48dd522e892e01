//! # Config Crate
//!
//! Centralized configuration constants for the toroidal-splitting mesh
//! pipeline. All magic numbers and tunable parameters are defined here to
//! ensure consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_WIDTH_SEGMENTS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use resolution defaults for tessellation
//! let user_segments: Option<u32> = None;
//! let segments = user_segments.unwrap_or(DEFAULT_WIDTH_SEGMENTS);
//! assert_eq!(segments, DEFAULT_WIDTH_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Viewer Compatible**: Defaults match the toroidal-splitting viewer
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
