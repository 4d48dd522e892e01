//! # Primitives
//!
//! Mesh generation for the viewer's surfaces (full tori and partial bands).

pub mod torus;

pub use torus::{create_torus, create_torus_smooth};
