use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::vec::Vec2;
use crate::scalar::{approx_eq, Real};

/// Row-major 2x2 linear map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat2 {
    pub xx: Real,
    pub xy: Real,
    pub yx: Real,
    pub yy: Real,
}

impl Mat2 {
    #[inline]
    pub fn new(xx: Real, xy: Real, yx: Real, yy: Real) -> Self {
        Self { xx, xy, yx, yy }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Counterclockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(self.xx, self.yx, self.xy, self.yy)
    }

    #[inline]
    pub fn determinant(self) -> Real {
        self.xx * self.yy - self.xy * self.yx
    }

    /// Inverse via adjugate over determinant.
    ///
    /// No singularity check: a zero determinant divides through and yields
    /// non-finite entries. Use [`Mat2::try_inverse`] for an explicit signal.
    #[inline]
    pub fn inverse(self) -> Self {
        let adj = Self::new(self.yy, -self.xy, -self.yx, self.xx);
        adj / self.determinant()
    }

    /// Checked inverse: `None` when `|det| <= eps`.
    #[inline]
    pub fn try_inverse(self, eps: Real) -> Option<Self> {
        if self.determinant().abs() <= eps {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// Solve `self · x = b` by Cramer's rule (determinant ratios; the
    /// inverse is never formed). Same zero-determinant caveat as
    /// [`Mat2::inverse`].
    #[inline]
    pub fn solve(self, b: Vec2) -> Vec2 {
        let d = self.determinant();
        let dx = b.x * self.yy - self.xy * b.y;
        let dy = self.xx * b.y - b.x * self.yx;
        Vec2::new(dx / d, dy / d)
    }

    /// Checked solve: `None` when `|det| <= eps`.
    #[inline]
    pub fn try_solve(self, b: Vec2, eps: Real) -> Option<Vec2> {
        if self.determinant().abs() <= eps {
            None
        } else {
            Some(self.solve(b))
        }
    }

    /// Row `i` as a vector. Panics for `i > 1`.
    #[inline]
    pub fn row(self, i: usize) -> Vec2 {
        match i {
            0 => Vec2::new(self.xx, self.xy),
            1 => Vec2::new(self.yx, self.yy),
            _ => panic!("Mat2 row out of range: {i}"),
        }
    }

    /// Column `j` as a vector. Panics for `j > 1`.
    #[inline]
    pub fn column(self, j: usize) -> Vec2 {
        match j {
            0 => Vec2::new(self.xx, self.yx),
            1 => Vec2::new(self.xy, self.yy),
            _ => panic!("Mat2 column out of range: {j}"),
        }
    }

    /// Componentwise `|a - b| < eps`, independent per entry (not a matrix
    /// norm bound).
    #[inline]
    pub fn approx_eq(self, other: Self, eps: Real) -> bool {
        approx_eq(self.xx, other.xx, eps)
            && approx_eq(self.xy, other.xy, eps)
            && approx_eq(self.yx, other.yx, eps)
            && approx_eq(self.yy, other.yy, eps)
    }
}

impl Add for Mat2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
        )
    }
}

impl Sub for Mat2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.yx - rhs.yx,
            self.yy - rhs.yy,
        )
    }
}

impl Neg for Mat2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.xx, -self.xy, -self.yx, -self.yy)
    }
}

impl Mul<Real> for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Real) -> Self {
        Self::new(self.xx * s, self.xy * s, self.yx * s, self.yy * s)
    }
}

impl Div<Real> for Mat2 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        self * (1.0 / s)
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    /// Matrix-vector apply, row times column.
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.xx * v.x + self.xy * v.y,
            self.yx * v.x + self.yy * v.y,
        )
    }
}

impl Mul for Mat2 {
    type Output = Self;
    /// Matrix product. Not commutative.
    #[inline]
    fn mul(self, b: Self) -> Self {
        Self::new(
            self.xx * b.xx + self.xy * b.yx,
            self.xx * b.xy + self.xy * b.yy,
            self.yx * b.xx + self.yy * b.yx,
            self.yx * b.xy + self.yy * b.yy,
        )
    }
}

impl Index<(usize, usize)> for Mat2 {
    type Output = Real;
    /// Row-major entry access `m[(i, j)]`. Panics on out-of-range indices.
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        match (i, j) {
            (0, 0) => &self.xx,
            (0, 1) => &self.xy,
            (1, 0) => &self.yx,
            (1, 1) => &self.yy,
            _ => panic!("Mat2 index out of range: ({i}, {j})"),
        }
    }
}
