use bytemuck::{Pod, Zeroable};

/// Integer rectangle stored as edges (left, top, right, bottom).
///
/// Matches the native `IntRect` layout. Edges are not normalized on
/// construction; an inverted rect simply reports zero width/height.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rect covering `[0, width) x [0, height)`.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_to_i32(width), clamp_to_i32(height))
    }

    #[inline]
    pub fn width(self) -> u32 {
        (i64::from(self.right) - i64::from(self.left)).max(0) as u32
    }

    #[inline]
    pub fn height(self) -> u32 {
        (i64::from(self.bottom) - i64::from(self.top)).max(0) as u32
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Half-open containment: [left, right) x [top, bottom).
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && y >= self.top && x < self.right && y < self.bottom
    }

    #[inline]
    pub fn intersect(self, other: IntRect) -> Option<IntRect> {
        let r = IntRect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );

        if r.is_empty() { None } else { Some(r) }
    }
}

const fn clamp_to_i32(v: u32) -> i32 {
    if v > i32::MAX as u32 { i32::MAX } else { v as i32 }
}
