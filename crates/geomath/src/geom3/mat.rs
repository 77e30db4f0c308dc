use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::vec::Vec3;
use crate::scalar::{approx_eq, Real};

/// Row-major 3x3 linear map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mat3 {
    pub xx: Real,
    pub xy: Real,
    pub xz: Real,
    pub yx: Real,
    pub yy: Real,
    pub yz: Real,
    pub zx: Real,
    pub zy: Real,
    pub zz: Real,
}

impl Mat3 {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        xx: Real,
        xy: Real,
        xz: Real,
        yx: Real,
        yy: Real,
        yz: Real,
        zx: Real,
        zy: Real,
        zz: Real,
    ) -> Self {
        Self {
            xx,
            xy,
            xz,
            yx,
            yy,
            yz,
            zx,
            zy,
            zz,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation by `angle` radians about the x axis, right-handed.
    #[inline]
    pub fn rotation_x(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Rotation by `angle` radians about the y axis, right-handed.
    #[inline]
    pub fn rotation_y(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Rotation by `angle` radians about the z axis, right-handed.
    #[inline]
    pub fn rotation_z(angle: Real) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(
            self.xx, self.yx, self.zx, self.xy, self.yy, self.zy, self.xz, self.yz, self.zz,
        )
    }

    /// Six-term Leibniz expansion.
    #[inline]
    pub fn determinant(self) -> Real {
        self.xx * self.yy * self.zz + self.xy * self.yz * self.zx + self.yx * self.zy * self.xz
            - self.xz * self.yy * self.zx
            - self.xx * self.yz * self.zy
            - self.xy * self.yx * self.zz
    }

    /// Inverse via adjugate (transposed cofactors) over determinant.
    ///
    /// No singularity check: a zero determinant divides through and yields
    /// non-finite entries. Use [`Mat3::try_inverse`] for an explicit signal.
    pub fn inverse(self) -> Self {
        let adj = Self::new(
            self.yy * self.zz - self.yz * self.zy,
            self.zy * self.xz - self.zz * self.xy,
            self.xy * self.yz - self.xz * self.yy,
            self.yz * self.zx - self.yx * self.zz,
            self.zz * self.xx - self.zx * self.xz,
            self.xz * self.yx - self.xx * self.yz,
            self.yx * self.zy - self.yy * self.zx,
            self.zx * self.xy - self.zy * self.xx,
            self.xx * self.yy - self.xy * self.yx,
        );
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

    /// Solve `self · x = b` by Cramer's rule: each unknown is the ratio of
    /// the determinant with the matching column replaced by `b` to the
    /// system determinant. The inverse is never formed. Same zero-determinant
    /// caveat as [`Mat3::inverse`].
    pub fn solve(self, b: Vec3) -> Vec3 {
        let d = self.determinant();
        let dx = Self::new(
            b.x, self.xy, self.xz, b.y, self.yy, self.yz, b.z, self.zy, self.zz,
        )
        .determinant();
        let dy = Self::new(
            self.xx, b.x, self.xz, self.yx, b.y, self.yz, self.zx, b.z, self.zz,
        )
        .determinant();
        let dz = Self::new(
            self.xx, self.xy, b.x, self.yx, self.yy, b.y, self.zx, self.zy, b.z,
        )
        .determinant();
        Vec3::new(dx / d, dy / d, dz / d)
    }

    /// Checked solve: `None` when `|det| <= eps`.
    #[inline]
    pub fn try_solve(self, b: Vec3, eps: Real) -> Option<Vec3> {
        if self.determinant().abs() <= eps {
            None
        } else {
            Some(self.solve(b))
        }
    }

    /// Componentwise `|a - b| < eps`, independent per entry (not a matrix
    /// norm bound).
    pub fn approx_eq(self, other: Self, eps: Real) -> bool {
        approx_eq(self.xx, other.xx, eps)
            && approx_eq(self.xy, other.xy, eps)
            && approx_eq(self.xz, other.xz, eps)
            && approx_eq(self.yx, other.yx, eps)
            && approx_eq(self.yy, other.yy, eps)
            && approx_eq(self.yz, other.yz, eps)
            && approx_eq(self.zx, other.zx, eps)
            && approx_eq(self.zy, other.zy, eps)
            && approx_eq(self.zz, other.zz, eps)
    }
}

impl Add for Mat3 {
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
            self.zx + rhs.zx,
            self.zy + rhs.zy,
            self.zz + rhs.zz,
        )
    }
}

impl Sub for Mat3 {
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
            self.zx - rhs.zx,
            self.zy - rhs.zy,
            self.zz - rhs.zz,
        )
    }
}

impl Neg for Mat3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(
            -self.xx, -self.xy, -self.xz, -self.yx, -self.yy, -self.yz, -self.zx, -self.zy,
            -self.zz,
        )
    }
}

impl Mul<Real> for Mat3 {
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
            self.zx * s,
            self.zy * s,
            self.zz * s,
        )
    }
}

impl Div<Real> for Mat3 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        self * (1.0 / s)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Matrix-vector apply, row times column.
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.xx * v.x + self.xy * v.y + self.xz * v.z,
            self.yx * v.x + self.yy * v.y + self.yz * v.z,
            self.zx * v.x + self.zy * v.y + self.zz * v.z,
        )
    }
}

impl Mul for Mat3 {
    type Output = Self;
    /// Matrix product. Not commutative.
    fn mul(self, b: Self) -> Self {
        Self::new(
            self.xx * b.xx + self.xy * b.yx + self.xz * b.zx,
            self.xx * b.xy + self.xy * b.yy + self.xz * b.zy,
            self.xx * b.xz + self.xy * b.yz + self.xz * b.zz,
            self.yx * b.xx + self.yy * b.yx + self.yz * b.zx,
            self.yx * b.xy + self.yy * b.yy + self.yz * b.zy,
            self.yx * b.xz + self.yy * b.yz + self.yz * b.zz,
            self.zx * b.xx + self.zy * b.yx + self.zz * b.zx,
            self.zx * b.xy + self.zy * b.yy + self.zz * b.zy,
            self.zx * b.xz + self.zy * b.yz + self.zz * b.zz,
        )
    }
}

impl Index<(usize, usize)> for Mat3 {
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
            (2, 0) => &self.zx,
            (2, 1) => &self.zy,
            (2, 2) => &self.zz,
            _ => panic!("Mat3 index out of range: ({i}, {j})"),
        }
    }
}
