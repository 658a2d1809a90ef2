//! Rendering for the craftview viewer
//!
//! The interesting work happens on the CPU: [`projection`] turns world-space
//! triangles plus a camera pose into screen-space vertices once per frame.
//! The GPU side ([`context`], [`pipeline`]) is a dumb fill pass that takes
//! the 2D triangle list and rasterizes it, nothing more.
//!
//! ## Key components
//!
//! - [`camera::Camera`] - free-fly camera pose (position, yaw, pitch)
//! - [`projection`] - view-matrix composition, perspective projection,
//!   near-plane culling
//! - [`context::RenderContext`] - wgpu device, queue, and surface management
//! - [`pipeline::TrianglePipeline`] - screen-space flat-color triangle pass

pub mod camera;
pub mod context;
pub mod pipeline;
pub mod projection;

pub use camera::Camera;
pub use context::RenderContext;
pub use pipeline::TrianglePipeline;
pub use projection::{project_triangles, view_matrix, ScreenVertex, Viewport};
