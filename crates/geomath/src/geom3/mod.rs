//! 3D kernel: `Vec3` and the row-major 3x3 linear map `Mat3`.
//!
//! Mirrors `geom2` one dimension up; `Vec3` additionally carries the cross
//! product, and `Mat3` the three axis-aligned rotations.

mod mat;
mod vec;

pub use mat::Mat3;
pub use vec::Vec3;
