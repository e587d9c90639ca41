/// Offscreen render target referenced by `GpuState::render_buffer_id`.
///
/// Backed by the texture `texture_id`; `width`/`height` are that texture's size.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderBuffer {
    pub texture_id: u32,
    pub width: u32,
    pub height: u32,
    pub has_stencil_buffer: bool,
    pub has_depth_buffer: bool,
}

impl RenderBuffer {
    #[inline]
    pub const fn new(texture_id: u32, width: u32, height: u32) -> Self {
        Self {
            texture_id,
            width,
            height,
            has_stencil_buffer: false,
            has_depth_buffer: false,
        }
    }

    /// Whether a draw with this viewport fits inside the buffer.
    #[inline]
    pub fn fits_viewport(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }
}
