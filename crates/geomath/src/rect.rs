//! Rectangular maps between 2D and 3D: `Mat2x3` (Vec3 → Vec2) and `Mat3x2`
//! (Vec2 → Vec3).
//!
//! The two shapes are transposes of each other; `transpose` changes type
//! rather than mutating in place. Products with a compatible inner dimension
//! land in the square types (`Mat2x3 * Mat3x2 -> Mat2`,
//! `Mat3x2 * Mat2x3 -> Mat3`); the two orders are not mutually inverse in
//! general.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::geom2::{Mat2, Vec2};
use crate::geom3::{Mat3, Vec3};
use crate::scalar::{approx_eq, Real};

/// Row-major 2x3 matrix; maps `Vec3` to `Vec2`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat2x3 {
    pub xx: Real,
    pub xy: Real,
    pub xz: Real,
    pub yx: Real,
    pub yy: Real,
    pub yz: Real,
}

/// Row-major 3x2 matrix; maps `Vec2` to `Vec3`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat3x2 {
    pub xx: Real,
    pub xy: Real,
    pub yx: Real,
    pub yy: Real,
    pub zx: Real,
    pub zy: Real,
}

impl Mat2x3 {
    #[inline]
    pub fn new(xx: Real, xy: Real, xz: Real, yx: Real, yy: Real, yz: Real) -> Self {
        Self {
            xx,
            xy,
            xz,
            yx,
            yy,
            yz,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Shape-changing transpose.
    #[inline]
    pub fn transpose(self) -> Mat3x2 {
        Mat3x2::new(self.xx, self.yx, self.xy, self.yy, self.xz, self.yz)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    /// Componentwise `|a - b| < eps`, independent per entry.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: Real) -> bool {
        approx_eq(self.xx, other.xx, eps)
            && approx_eq(self.xy, other.xy, eps)
            && approx_eq(self.xz, other.xz, eps)
            && approx_eq(self.yx, other.yx, eps)
            && approx_eq(self.yy, other.yy, eps)
            && approx_eq(self.yz, other.yz, eps)
    }
}

impl Mat3x2 {
    #[inline]
    pub fn new(xx: Real, xy: Real, yx: Real, yy: Real, zx: Real, zy: Real) -> Self {
        Self {
            xx,
            xy,
            yx,
            yy,
            zx,
            zy,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Shape-changing transpose.
    #[inline]
    pub fn transpose(self) -> Mat2x3 {
        Mat2x3::new(self.xx, self.yx, self.zx, self.xy, self.yy, self.zy)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    /// Componentwise `|a - b| < eps`, independent per entry.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: Real) -> bool {
        approx_eq(self.xx, other.xx, eps)
            && approx_eq(self.xy, other.xy, eps)
            && approx_eq(self.yx, other.yx, eps)
            && approx_eq(self.yy, other.yy, eps)
            && approx_eq(self.zx, other.zx, eps)
            && approx_eq(self.zy, other.zy, eps)
    }
}

impl Add for Mat2x3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.xz + rhs.xz,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
            self.yz + rhs.yz,
        )
    }
}

impl Sub for Mat2x3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.xz - rhs.xz,
            self.yx - rhs.yx,
            self.yy - rhs.yy,
            self.yz - rhs.yz,
        )
    }
}

impl Neg for Mat2x3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.xx, -self.xy, -self.xz, -self.yx, -self.yy, -self.yz)
    }
}

impl Mul<Real> for Mat2x3 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Real) -> Self {
        Self::new(
            self.xx * s,
            self.xy * s,
            self.xz * s,
            self.yx * s,
            self.yy * s,
            self.yz * s,
        )
    }
}

impl Div<Real> for Mat2x3 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        self * (1.0 / s)
    }
}

impl Mul<Vec3> for Mat2x3 {
    type Output = Vec2;
    /// Dimension-reducing apply.
    #[inline]
    fn mul(self, v: Vec3) -> Vec2 {
        Vec2::new(
            self.xx * v.x + self.xy * v.y + self.xz * v.z,
            self.yx * v.x + self.yy * v.y + self.yz * v.z,
        )
    }
}

impl Mul<Mat3x2> for Mat2x3 {
    type Output = Mat2;
    /// (2x3)·(3x2) product, inner dimension 3.
    fn mul(self, b: Mat3x2) -> Mat2 {
        Mat2::new(
            self.xx * b.xx + self.xy * b.yx + self.xz * b.zx,
            self.xx * b.xy + self.xy * b.yy + self.xz * b.zy,
            self.yx * b.xx + self.yy * b.yx + self.yz * b.zx,
            self.yx * b.xy + self.yy * b.yy + self.yz * b.zy,
        )
    }
}

impl Add for Mat3x2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
            self.zx + rhs.zx,
            self.zy + rhs.zy,
        )
    }
}

impl Sub for Mat3x2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.yx - rhs.yx,
            self.yy - rhs.yy,
            self.zx - rhs.zx,
            self.zy - rhs.zy,
        )
    }
}

impl Neg for Mat3x2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.xx, -self.xy, -self.yx, -self.yy, -self.zx, -self.zy)
    }
}

impl Mul<Real> for Mat3x2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Real) -> Self {
        Self::new(
            self.xx * s,
            self.xy * s,
            self.yx * s,
            self.yy * s,
            self.zx * s,
            self.zy * s,
        )
    }
}

impl Div<Real> for Mat3x2 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        self * (1.0 / s)
    }
}

impl Mul<Vec2> for Mat3x2 {
    type Output = Vec3;
    /// Dimension-raising apply.
    #[inline]
    fn mul(self, v: Vec2) -> Vec3 {
        Vec3::new(
            self.xx * v.x + self.xy * v.y,
            self.yx * v.x + self.yy * v.y,
            self.zx * v.x + self.zy * v.y,
        )
    }
}

impl Mul<Mat2x3> for Mat3x2 {
    type Output = Mat3;
    /// (3x2)·(2x3) product, inner dimension 2. Rank at most 2, so the
    /// result is always singular.
    fn mul(self, b: Mat2x3) -> Mat3 {
        Mat3::new(
            self.xx * b.xx + self.xy * b.yx,
            self.xx * b.xy + self.xy * b.yy,
            self.xx * b.xz + self.xy * b.yz,
            self.yx * b.xx + self.yy * b.yx,
            self.yx * b.xy + self.yy * b.yy,
            self.yx * b.xz + self.yy * b.yz,
            self.zx * b.xx + self.zy * b.yx,
            self.zx * b.xy + self.zy * b.yy,
            self.zx * b.xz + self.zy * b.yz,
        )
    }
}

impl Index<(usize, usize)> for Mat2x3 {
    type Output = Real;
    /// Row-major entry access `m[(i, j)]`. Panics on out-of-range indices.
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        match (i, j) {
            (0, 0) => &self.xx,
            (0, 1) => &self.xy,
            (0, 2) => &self.xz,
            (1, 0) => &self.yx,
            (1, 1) => &self.yy,
            (1, 2) => &self.yz,
            _ => panic!("Mat2x3 index out of range: ({i}, {j})"),
        }
    }
}

impl Index<(usize, usize)> for Mat3x2 {
    type Output = Real;
    /// Row-major entry access `m[(i, j)]`. Panics on out-of-range indices.
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        match (i, j) {
            (0, 0) => &self.xx,
            (0, 1) => &self.xy,
            (1, 0) => &self.yx,
            (1, 1) => &self.yy,
            (2, 0) => &self.zx,
            (2, 1) => &self.zy,
            _ => panic!("Mat3x2 index out of range: ({i}, {j})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Real = 1e-10;

    #[test]
    fn transpose_round_trips_exactly() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a.transpose().transpose(), a);
        let b = Mat3x2::new(3.0, 2.0, 1.0, 6.0, 5.0, 4.0);
        assert_eq!(b.transpose().transpose(), b);
    }

    #[test]
    fn products_with_own_transpose() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let c = Mat2::new(14.0, 32.0, 32.0, 77.0);
        assert!((a * a.transpose()).approx_eq(c, EPS));

        let b = Mat3x2::new(3.0, 2.0, 1.0, 6.0, 5.0, 4.0);
        let d = Mat3::new(13.0, 15.0, 23.0, 15.0, 37.0, 29.0, 23.0, 29.0, 41.0);
        assert!((b * b.transpose()).approx_eq(d, EPS));
    }

    #[test]
    fn applies_are_dimension_correct() {
        let a = Mat2x3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        let v = Vec3::new(7.0, 8.0, 9.0);
        assert!((a * v).approx_eq(Vec2::new(7.0, 8.0), EPS));

        let b = a.transpose();
        let w = Vec2::new(7.0, 8.0);
        assert!((b * w).approx_eq(Vec3::new(7.0, 8.0, 0.0), EPS));
    }

    #[test]
    fn tall_times_wide_is_singular() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let m = a.transpose() * a;
        assert!(approx_eq(m.determinant(), 0.0, EPS));
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert!((a - a).approx_eq(Mat2x3::zero(), EPS));
        assert!((a + a).approx_eq(a * 2.0, EPS));
        assert!((-a).approx_eq(Mat2x3::zero() - a, EPS));
        assert!((a / 2.0).approx_eq(a * 0.5, EPS));

        let b = Mat3x2::new(3.0, 2.0, 1.0, 6.0, 5.0, 4.0);
        assert!((b - b).approx_eq(Mat3x2::zero(), EPS));
        assert!((b + b).approx_eq(b * 2.0, EPS));
    }

    #[test]
    fn entry_access_is_row_major() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(a[(0, 2)], 3.0);
        assert_eq!(a[(1, 0)], 4.0);
        let b = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(b[(2, 1)], 6.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn entry_access_out_of_range_panics() {
        let a = Mat2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let _ = a[(2, 0)];
    }
}
