//! 4-component vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 4-component vector with x, y, z, w components.
///
/// Doubles as a 3D point/direction in homogeneous coordinates (w = 1 for
/// points, w = 0 for directions) and as a generic 4-tuple inside matrix math.
///
/// Equality is exact component-wise comparison; do not compare results of
/// arithmetic for equality.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from a 4-element array
    #[inline]
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
            w: values[3],
        }
    }

    /// Broadcast one scalar to all four components
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    /// A 3D point in homogeneous coordinates (w = 1)
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Dot product over all four components
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean norm over all four components.
    ///
    /// Callers needing a 3D length must zero w first.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

/// Division by zero yields IEEE infinities/NaN, matching floating-point
/// convention; it is not treated as an error.
impl std::ops::Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Indexed access: 0..=2 map to x/y/z, everything else resolves to w.
///
/// The wrap-to-w fallback for out-of-range indices is kept for parity with
/// callers that rely on it in compact accumulation loops. It is a latent
/// hardening candidate, not a bounds check.
impl std::ops::Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.w,
        }
    }
}

impl std::ops::IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => &mut self.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_from_array() {
        let v = Vec4::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_splat() {
        let v = Vec4::splat(2.5);
        assert_eq!(v, Vec4::new(2.5, 2.5, 2.5, 2.5));
    }

    #[test]
    fn test_point_has_unit_w() {
        let p = Vec4::point(1.0, 2.0, 3.0);
        assert_eq!(p.w, 1.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(v.length(), 1.0);

        let v2 = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v2.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul_scalar() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_div_scalar() {
        let v = Vec4::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v / 2.0, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_div_by_zero_is_infinite() {
        let v = Vec4::new(1.0, -1.0, 0.0, 2.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert_eq!(v.w, f32::INFINITY);
    }

    #[test]
    fn test_index() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v[3], 4.0);
    }

    #[test]
    fn test_index_out_of_range_wraps_to_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        assert_eq!(v[17], 4.0);
    }

    #[test]
    fn test_index_mut() {
        let mut v = Vec4::ZERO;
        v[0] = 1.0;
        v[2] = 3.0;
        v[9] = 9.0; // wraps to w
        assert_eq!(v, Vec4::new(1.0, 0.0, 3.0, 9.0));
    }

    #[test]
    fn test_neg() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vec4::new(-1.0, 2.0, -3.0, 4.0));
    }
}
