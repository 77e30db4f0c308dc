use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::scalar::{approx_eq, sqrt_wide, Real};

/// 3D vector/point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vec3 {
    #[inline]
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed. Anticommutative:
    /// `a.cross(b) == -b.cross(a)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_sq(self) -> Real {
        self.dot(self)
    }

    /// Euclidean length. The square root is taken in `f64` regardless of the
    /// configured precision, then narrowed back.
    #[inline]
    pub fn length(self) -> Real {
        sqrt_wide(self.length_sq())
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero vector divides by zero and yields non-finite components; the
    /// caller is responsible for guarding against zero length.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    #[inline]
    pub fn distance_sq(self, other: Self) -> Real {
        (self - other).length_sq()
    }

    #[inline]
    pub fn distance(self, other: Self) -> Real {
        (self - other).length()
    }

    /// Componentwise `|a - b| < eps`, independent per axis. This is a
    /// Chebyshev-style box comparison, not a norm ball.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: Real) -> bool {
        approx_eq(self.x, other.x, eps)
            && approx_eq(self.y, other.y, eps)
            && approx_eq(self.z, other.z, eps)
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<Real> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Index<usize> for Vec3 {
    type Output = Real;
    /// Component access, `x = 0`, `y = 1`, `z = 2`. Panics on any other index.
    #[inline]
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}
