//! Math library for the craftview viewer
//!
//! This crate provides the two value types the projection pipeline is built
//! on:
//!
//! - [`Vec4`] - 4-component vector (w = 1 for points, w = 0 for directions)
//! - [`Mat4`] - 4x4 matrix, row-major, with rotation constructors
//!
//! Every operation is total over finite floating-point input; non-finite
//! values propagate as NaN/Inf per IEEE semantics rather than signaling.

mod mat4;
mod vec4;

pub use mat4::Mat4;
pub use vec4::Vec4;
