/// Shader variant selected by a snapshot's `shader_type` byte.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderType {
    /// Solid fills, images, gradients and glyphs (quad geometry).
    Fill = 0,
    /// Anti-aliased vector paths.
    FillPath = 1,
}

impl ShaderType {
    #[inline]
    pub const fn from_raw(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Fill),
            1 => Some(Self::FillPath),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}
