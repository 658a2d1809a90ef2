//! Scene data for the craftview viewer
//!
//! This crate owns the world-space geometry the projection pipeline consumes:
//!
//! - [`Color`] - flat RGB color with the demo palette
//! - [`Triangle`] - three world-space positions plus a flat color
//! - [`demo_scene`] - the built-in 12-triangle cube
//! - [`glb`] - reader for the chunked GLB binary container
//!
//! Scene geometry is static for the scene's duration; the renderer borrows
//! it every frame and never takes ownership.

mod color;
pub mod glb;
mod triangle;

pub use color::Color;
pub use triangle::{demo_scene, Triangle};
