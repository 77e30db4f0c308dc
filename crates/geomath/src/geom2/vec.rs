use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::scalar::{approx_eq, sqrt_wide, Real};

/// 2D vector/point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    #[inline]
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y
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
        approx_eq(self.x, other.x, eps) && approx_eq(self.y, other.y, eps)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Real> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Div<Real> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, s: Real) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl Index<usize> for Vec2 {
    type Output = Real;
    /// Component access, `x = 0`, `y = 1`. Panics on any other index.
    #[inline]
    fn index(&self, i: usize) -> &Real {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}
