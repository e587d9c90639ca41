use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// 4x4 float matrix, column-major.
///
/// `data[col * 4 + row]` addresses row `row` of column `col`, matching the
/// native `Matrix4x4` layout. Translation lives in `data[12..15]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub data: [f32; 16],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.data
    }

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Pure translation by `(x, y)`.
    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.data[12] = x;
        m.data[13] = y;
        m
    }

    /// Orthographic projection from pixel space to NDC.
    ///
    /// Maps `[0, width] x [0, height]` (top-left origin, +Y down) onto
    /// `[-1, 1]` with +Y up. `flip_y` keeps +Y down instead, which is what
    /// render-to-texture targets expect on some backends. Z is passed through.
    pub fn orthographic(width: f32, height: f32, flip_y: bool) -> Self {
        let w = width.max(1.0);
        let h = height.max(1.0);
        let (sy, ty) = if flip_y { (2.0 / h, -1.0) } else { (-2.0 / h, 1.0) };

        Self {
            data: [
                2.0 / w, 0.0, 0.0, 0.0, //
                0.0, sy, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                -1.0, ty, 0.0, 1.0,
            ],
        }
    }

    /// Transforms the point `(x, y, 0, 1)` and returns the projected `(x, y)`.
    pub fn transform_point(&self, x: f32, y: f32) -> [f32; 2] {
        let px = self.get(0, 0) * x + self.get(0, 1) * y + self.get(0, 3);
        let py = self.get(1, 0) * x + self.get(1, 1) * y + self.get(1, 3);
        let w = self.get(3, 0) * x + self.get(3, 1) * y + self.get(3, 3);

        if w != 0.0 && w != 1.0 { [px / w, py / w] } else { [px, py] }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = (0..4).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        Self { data: out }
    }
}
