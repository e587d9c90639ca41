//! Coordinate and matrix types carried by GPU state snapshots.
//!
//! All types here are `#[repr(C)]` and `Pod` so they can be copied straight out
//! of native memory.
//!
//! Conventions:
//! - Integer rects are in physical pixels, origin top-left, +Y down
//! - Matrices are column-major, 16 floats

mod int_rect;
mod matrix;
mod vec4;

pub use int_rect::IntRect;
pub use matrix::Matrix4x4;
pub use vec4::Vec4;
