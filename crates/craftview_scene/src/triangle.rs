//! World-space triangles and the built-in demo scene

use serde::{Deserialize, Serialize};

use crate::Color;

/// A world-space triangle: exactly three positions plus one flat color.
///
/// Vertex order is preserved all the way through projection; the rasterizer
/// receives the vertices in the order they appear here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [[f32; 3]; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(a: [f32; 3], b: [f32; 3], c: [f32; 3], color: Color) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }
}

/// The built-in demo scene: a 5-unit cube near the origin, two triangles per
/// face, colored from the four-color demo palette.
pub fn demo_scene() -> Vec<Triangle> {
    vec![
        // top
        Triangle::new([0.0, 5.0, 0.0], [5.0, 5.0, 0.0], [5.0, 5.0, 5.0], Color::cyan()),
        Triangle::new([0.0, 5.0, 0.0], [0.0, 5.0, 5.0], [5.0, 5.0, 5.0], Color::white()),
        // back
        Triangle::new([0.0, 5.0, 0.0], [5.0, 5.0, 0.0], [5.0, 0.0, 0.0], Color::magenta()),
        Triangle::new([0.0, 5.0, 0.0], [0.0, 0.0, 0.0], [5.0, 0.0, 0.0], Color::cyan()),
        // right
        Triangle::new([5.0, 5.0, 0.0], [5.0, 5.0, 5.0], [5.0, 0.0, 0.0], Color::white()),
        Triangle::new([5.0, 0.0, 5.0], [5.0, 5.0, 5.0], [5.0, 0.0, 0.0], Color::yellow()),
        // bottom
        Triangle::new([0.0, 0.0, 0.0], [0.0, 0.0, 5.0], [5.0, 0.0, 5.0], Color::yellow()),
        Triangle::new([0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [5.0, 0.0, 5.0], Color::white()),
        // front
        Triangle::new([0.0, 5.0, 5.0], [0.0, 0.0, 5.0], [5.0, 0.0, 5.0], Color::cyan()),
        Triangle::new([0.0, 5.0, 5.0], [5.0, 5.0, 5.0], [5.0, 0.0, 5.0], Color::magenta()),
        // left
        Triangle::new([0.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 5.0, 5.0], Color::yellow()),
        Triangle::new([0.0, 0.0, 0.0], [0.0, 0.0, 5.0], [0.0, 5.0, 5.0], Color::white()),
    ]
}
