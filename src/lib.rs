//! craftview - a minimal real-time 3D viewer
//!
//! A free-flying camera over a handful of world-space triangles, projected
//! to screen space on the CPU every frame and filled by a thin wgpu pass.

pub mod config;
