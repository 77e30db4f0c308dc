//! 2D kernel: `Vec2` and the row-major 2x2 linear map `Mat2`.
//!
//! - `Vec2`: vector-space ops, dot/length/normalize, distances.
//! - `Mat2`: arithmetic, transpose, apply/compose, determinant, inverse,
//!   Cramer solve, rotation, row/column extraction.
//!
//! Both are plain `Copy` value types; nothing here allocates.

mod mat;
mod vec;

pub use mat::Mat2;
pub use vec::Vec2;
