//! 4x4 matrix type
//!
//! Row-major storage: `element(row, col) = m[row * 4 + col]`. The rotation
//! constructors are right-handed and their sign placements fix the handedness
//! of the camera look direction; the projection pipeline depends on them
//! exactly as written.

use crate::Vec4;

/// 4x4 matrix of f32, 16 contiguous values in row-major order.
///
/// Represents an affine or linear transform in homogeneous coordinates.
/// Pure value semantics; every operation returns a new matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// Matrix with `value` on the diagonal and zero elsewhere
    pub const fn diagonal(value: f32) -> Self {
        let mut m = [0.0; 16];
        m[0] = value;
        m[5] = value;
        m[10] = value;
        m[15] = value;
        Self { m }
    }

    /// Matrix from a flat 16-element array in row-major order
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// The identity matrix
    pub const fn identity() -> Self {
        Self::diagonal(1.0)
    }

    /// Rotation about the X axis by `theta` radians.
    ///
    /// `[cos, -sin; sin, cos]` on the (y, z) block, identity elsewhere.
    pub fn rotation_x(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut m = Self::identity();
        m.m[5] = cos;
        m.m[6] = -sin;
        m.m[9] = sin;
        m.m[10] = cos;
        m
    }

    /// Rotation about the Y axis by `theta` radians.
    ///
    /// `[cos, sin; -sin, cos]` on the (x, z) block, identity elsewhere.
    pub fn rotation_y(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut m = Self::identity();
        m.m[0] = cos;
        m.m[2] = sin;
        m.m[8] = -sin;
        m.m[10] = cos;
        m
    }

    /// Rotation about the Z axis by `theta` radians.
    ///
    /// `[cos, -sin; sin, cos]` on the (x, y) block, identity elsewhere.
    pub fn rotation_z(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut m = Self::identity();
        m.m[0] = cos;
        m.m[1] = -sin;
        m.m[4] = sin;
        m.m[5] = cos;
        m
    }

    /// Extract row `row` (0..=3) as a Vec4.
    ///
    /// The result is a fresh value, not a live view into the matrix.
    #[inline]
    pub fn row(&self, row: usize) -> Vec4 {
        let base = row * 4;
        Vec4::new(self.m[base], self.m[base + 1], self.m[base + 2], self.m[base + 3])
    }

    /// Extract column `col` (0..=3) as a Vec4
    #[inline]
    pub fn col(&self, col: usize) -> Vec4 {
        Vec4::new(self.m[col], self.m[col + 4], self.m[col + 8], self.m[col + 12])
    }

    /// Element at (row, col)
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Mutable element at (row, col)
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.m[row * 4 + col]
    }

    /// Transposed matrix: `result[i][j] = m[j][i]`
    pub fn transpose(&self) -> Self {
        let mut result = Self::default();
        for i in 0..4 {
            for j in 0..4 {
                result.m[i * 4 + j] = self.m[j * 4 + i];
            }
        }
        result
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.m[index]
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.m[index]
    }
}

impl std::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut result = Self::default();
        for i in 0..16 {
            result.m[i] = self.m[i] + other.m[i];
        }
        result
    }
}

impl std::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut result = Self::default();
        for i in 0..16 {
            result.m[i] = self.m[i] - other.m[i];
        }
        result
    }
}

impl std::ops::Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        let mut result = Self::default();
        for i in 0..16 {
            result.m[i] = self.m[i] * scalar;
        }
        result
    }
}

/// Matrix product, row-by-column accumulation.
///
/// Not commutative; transform composition order matters.
impl std::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let mut result = Self::default();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i * 4 + j] += self.m[i * 4 + k] * other.m[k * 4 + j];
                }
            }
        }
        result
    }
}

/// Matrix times column vector: `result[i] = sum_j m[i][j] * v[j]`
impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        let mut result = Vec4::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result[i] += self.m[i * 4 + j] * v[j];
            }
        }
        result
    }
}
