//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A surface parameter violates its constraint.
    ///
    /// Raised before any buffer allocation; the builder never returns a
    /// partially filled mesh. Callers should treat this as a configuration
    /// bug rather than a transient condition.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = MeshError::invalid_parameter("width_segments must be at least 1: 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: width_segments must be at least 1: 0"
        );
    }
}
