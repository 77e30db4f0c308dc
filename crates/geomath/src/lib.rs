//! Fixed-size 2D/3D linear algebra kernel.
//!
//! Value types `Vec2`, `Vec3`, `Mat2`, `Mat3`, `Mat2x3`, `Mat3x2` with
//! arithmetic, geometric, and linear-solve operations. Everything is a small
//! `Copy` struct on the stack; every operation is a pure function returning a
//! new value. No allocation anywhere.
//!
//! Numeric policy
//! - One scalar type [`Real`] for the whole crate (`f64`, or `f32` with the
//!   `single` feature). See [`scalar`].
//! - Singular inputs are not trapped: `inverse`/`solve` on a matrix with zero
//!   determinant and `normalize` on a zero vector propagate IEEE-754
//!   infinities/NaNs. The `try_*` variants return `Option` for callers that
//!   want an explicit signal.
//! - Approximate equality is componentwise against a caller-supplied epsilon,
//!   independent per entry; it is deliberately not a norm-ball comparison.

pub mod geom2;
pub mod geom3;
pub mod rect;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Mat2, Vec2};
pub use geom3::{Mat3, Vec3};
pub use rect::{Mat2x3, Mat3x2};
pub use scalar::{approx_eq, Real};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{Mat2, Vec2};
    pub use crate::geom3::{Mat3, Vec3};
    pub use crate::rect::{Mat2x3, Mat3x2};
    pub use crate::scalar::{approx_eq, Real};
}

/// Signed area of the parallelogram spanned by `a` and `b`: the determinant
/// of the 2x2 matrix with rows `a` and `b`. Positive when `b` lies
/// counterclockwise of `a`, negative clockwise, zero for parallel vectors.
#[inline]
pub fn parallelogram_area(a: Vec2, b: Vec2) -> Real {
    a.x * b.y - a.y * b.x
}
