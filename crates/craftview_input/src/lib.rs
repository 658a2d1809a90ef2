//! Input handling for the craftview viewer
//!
//! Accumulates keyboard and mouse state between frames and integrates it
//! into camera movement once per frame, with the frame clock passed in
//! explicitly by the caller.

mod controller;

pub use controller::{CameraControl, PlayerController};
