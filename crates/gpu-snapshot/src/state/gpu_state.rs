use crate::coords::{IntRect, Matrix4x4, Vec4};

use super::ShaderType;

/// Number of scalar uniforms carried by a snapshot.
pub const UNIFORM_SCALARS: usize = 8;
/// Number of vector uniforms carried by a snapshot.
pub const UNIFORM_VECTORS: usize = 8;
/// Capacity of the clip matrix stack.
pub const MAX_CLIPS: usize = 8;

/// Point-in-time GPU state for a single command.
///
/// Field order and widths mirror the engine's native structure exactly, so
/// this type is `#[repr(C)]` and can be marshaled without reinterpretation
/// (see [`crate::native`]). Fields are private; every accessor returns the
/// value exactly as supplied at construction.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GpuState {
    pub(crate) viewport_width: u32,
    pub(crate) viewport_height: u32,
    pub(crate) transform: Matrix4x4,
    pub(crate) enable_texturing: bool,
    pub(crate) enable_blend: bool,
    pub(crate) shader_type: u8,
    pub(crate) render_buffer_id: u32,
    pub(crate) texture_1_id: u32,
    pub(crate) texture_2_id: u32,
    pub(crate) texture_3_id: u32,
    pub(crate) uniform_scalar: [f32; UNIFORM_SCALARS],
    pub(crate) uniform_vector: [Vec4; UNIFORM_VECTORS],
    pub(crate) clip_size: u8,
    pub(crate) clip: [Matrix4x4; MAX_CLIPS],
    pub(crate) enable_scissor: bool,
    pub(crate) scissor_rect: IntRect,
}

/// Construction input for [`GpuState`].
///
/// Every field is supplied verbatim; nothing is validated or normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuStateDesc {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub transform: Matrix4x4,
    pub enable_texturing: bool,
    pub enable_blend: bool,
    /// Raw shader selector. See [`ShaderType`] for the known values.
    pub shader_type: u8,
    /// 0 = unbound.
    pub render_buffer_id: u32,
    /// Texture slots 1..=3. 0 = unbound.
    pub texture_ids: [u32; 3],
    pub uniform_scalar: [f32; UNIFORM_SCALARS],
    pub uniform_vector: [Vec4; UNIFORM_VECTORS],
    /// Number of meaningful entries at the front of `clip`.
    pub clip_size: u8,
    pub clip: [Matrix4x4; MAX_CLIPS],
    pub enable_scissor: bool,
    pub scissor_rect: IntRect,
}

impl Default for GpuStateDesc {
    fn default() -> Self {
        Self {
            viewport_width: 0,
            viewport_height: 0,
            transform: Matrix4x4::IDENTITY,
            enable_texturing: false,
            enable_blend: false,
            shader_type: ShaderType::Fill.as_raw(),
            render_buffer_id: 0,
            texture_ids: [0; 3],
            uniform_scalar: [0.0; UNIFORM_SCALARS],
            uniform_vector: [Vec4::ZERO; UNIFORM_VECTORS],
            clip_size: 0,
            clip: [Matrix4x4::IDENTITY; MAX_CLIPS],
            enable_scissor: false,
            scissor_rect: IntRect::default(),
        }
    }
}

impl GpuState {
    /// Builds a snapshot from `desc`. Plain field assignment; cannot fail.
    pub fn new(desc: GpuStateDesc) -> Self {
        let [texture_1_id, texture_2_id, texture_3_id] = desc.texture_ids;
        Self {
            viewport_width: desc.viewport_width,
            viewport_height: desc.viewport_height,
            transform: desc.transform,
            enable_texturing: desc.enable_texturing,
            enable_blend: desc.enable_blend,
            shader_type: desc.shader_type,
            render_buffer_id: desc.render_buffer_id,
            texture_1_id,
            texture_2_id,
            texture_3_id,
            uniform_scalar: desc.uniform_scalar,
            uniform_vector: desc.uniform_vector,
            clip_size: desc.clip_size,
            clip: desc.clip,
            enable_scissor: desc.enable_scissor,
            scissor_rect: desc.scissor_rect,
        }
    }

    /// Returns the fields as a [`GpuStateDesc`], the inverse of [`GpuState::new`].
    pub fn describe(&self) -> GpuStateDesc {
        GpuStateDesc {
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            transform: self.transform,
            enable_texturing: self.enable_texturing,
            enable_blend: self.enable_blend,
            shader_type: self.shader_type,
            render_buffer_id: self.render_buffer_id,
            texture_ids: self.texture_ids(),
            uniform_scalar: self.uniform_scalar,
            uniform_vector: self.uniform_vector,
            clip_size: self.clip_size,
            clip: self.clip,
            enable_scissor: self.enable_scissor,
            scissor_rect: self.scissor_rect,
        }
    }

    // ── raw fields ────────────────────────────────────────────────────────

    #[inline]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    #[inline]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Column-major transform applied to geometry before projection.
    #[inline]
    pub fn transform(&self) -> &Matrix4x4 {
        &self.transform
    }

    #[inline]
    pub fn enable_texturing(&self) -> bool {
        self.enable_texturing
    }

    #[inline]
    pub fn enable_blend(&self) -> bool {
        self.enable_blend
    }

    #[inline]
    pub fn enable_scissor(&self) -> bool {
        self.enable_scissor
    }

    #[inline]
    pub fn shader_type(&self) -> u8 {
        self.shader_type
    }

    #[inline]
    pub fn render_buffer_id(&self) -> u32 {
        self.render_buffer_id
    }

    #[inline]
    pub fn texture_1_id(&self) -> u32 {
        self.texture_1_id
    }

    #[inline]
    pub fn texture_2_id(&self) -> u32 {
        self.texture_2_id
    }

    #[inline]
    pub fn texture_3_id(&self) -> u32 {
        self.texture_3_id
    }

    #[inline]
    pub fn texture_ids(&self) -> [u32; 3] {
        [self.texture_1_id, self.texture_2_id, self.texture_3_id]
    }

    #[inline]
    pub fn uniform_scalar(&self) -> &[f32; UNIFORM_SCALARS] {
        &self.uniform_scalar
    }

    #[inline]
    pub fn uniform_vector(&self) -> &[Vec4; UNIFORM_VECTORS] {
        &self.uniform_vector
    }

    #[inline]
    pub fn clip_size(&self) -> u8 {
        self.clip_size
    }

    /// The whole clip array, including entries past `clip_size`.
    #[inline]
    pub fn clip(&self) -> &[Matrix4x4; MAX_CLIPS] {
        &self.clip
    }

    /// Stored scissor rect regardless of `enable_scissor`.
    #[inline]
    pub fn scissor_rect(&self) -> IntRect {
        self.scissor_rect
    }

    // ── views ─────────────────────────────────────────────────────────────

    /// Known shader variant, or `None` for an unrecognized selector.
    #[inline]
    pub fn shader(&self) -> Option<ShaderType> {
        ShaderType::from_raw(self.shader_type)
    }

    /// Render target id, `None` when unbound.
    #[inline]
    pub fn render_buffer(&self) -> Option<u32> {
        (self.render_buffer_id != 0).then_some(self.render_buffer_id)
    }

    /// Bound texture slots as `(slot, id)` with slot in `1..=3`; unbound slots are skipped.
    pub fn bound_textures(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.texture_ids()
            .into_iter()
            .enumerate()
            .filter(|&(_, id)| id != 0)
            .map(|(i, id)| (i + 1, id))
    }

    /// Meaningful clip matrices (the first `clip_size`, capped at [`MAX_CLIPS`]).
    #[inline]
    pub fn active_clips(&self) -> &[Matrix4x4] {
        &self.clip[..usize::from(self.clip_size).min(MAX_CLIPS)]
    }

    /// Scissor rect, only when scissor testing is enabled.
    #[inline]
    pub fn scissor(&self) -> Option<IntRect> {
        self.enable_scissor.then_some(self.scissor_rect)
    }

    /// Viewport as a rect at the origin.
    #[inline]
    pub fn viewport_rect(&self) -> IntRect {
        IntRect::from_size(self.viewport_width, self.viewport_height)
    }
}

impl Default for GpuState {
    fn default() -> Self {
        Self::new(GpuStateDesc::default())
    }
}

impl From<GpuStateDesc> for GpuState {
    fn from(desc: GpuStateDesc) -> Self {
        Self::new(desc)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A desc with every field set to a distinct non-default value.
    pub(crate) fn sample_desc() -> GpuStateDesc {
        let mut clip = [Matrix4x4::IDENTITY; MAX_CLIPS];
        for (i, m) in clip.iter_mut().enumerate() {
            *m = Matrix4x4::translation(i as f32, -(i as f32));
        }
        let mut uniform_vector = [Vec4::ZERO; UNIFORM_VECTORS];
        for (i, v) in uniform_vector.iter_mut().enumerate() {
            *v = Vec4::new(i as f32, 0.5, -1.0, 2.0 * i as f32);
        }

        GpuStateDesc {
            viewport_width: 1280,
            viewport_height: 720,
            transform: Matrix4x4::translation(12.5, -3.0),
            enable_texturing: true,
            enable_blend: true,
            shader_type: ShaderType::FillPath.as_raw(),
            render_buffer_id: 7,
            texture_ids: [3, 0, 9],
            uniform_scalar: [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.5],
            uniform_vector,
            clip_size: 3,
            clip,
            enable_scissor: true,
            scissor_rect: IntRect::new(10, 20, 300, 400),
        }
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn accessors_return_supplied_values() {
        let desc = sample_desc();
        let s = GpuState::new(desc.clone());

        assert_eq!(s.viewport_width(), 1280);
        assert_eq!(s.viewport_height(), 720);
        assert_eq!(*s.transform(), desc.transform);
        assert!(s.enable_texturing());
        assert!(s.enable_blend());
        assert!(s.enable_scissor());
        assert_eq!(s.shader_type(), 1);
        assert_eq!(s.render_buffer_id(), 7);
        assert_eq!(s.texture_1_id(), 3);
        assert_eq!(s.texture_2_id(), 0);
        assert_eq!(s.texture_3_id(), 9);
        assert_eq!(*s.uniform_scalar(), desc.uniform_scalar);
        assert_eq!(*s.uniform_vector(), desc.uniform_vector);
        assert_eq!(s.clip_size(), 3);
        assert_eq!(*s.clip(), desc.clip);
        assert_eq!(s.scissor_rect(), IntRect::new(10, 20, 300, 400));
    }

    #[test]
    fn describe_is_inverse_of_new() {
        let desc = sample_desc();
        assert_eq!(GpuState::new(desc.clone()).describe(), desc);
        assert_eq!(GpuState::default().describe(), GpuStateDesc::default());
    }

    #[test]
    fn repeated_reads_are_stable() {
        let s = GpuState::new(sample_desc());
        let first = s.describe();
        for _ in 0..3 {
            assert_eq!(s.describe(), first);
            assert_eq!(s.active_clips().len(), 3);
        }
    }

    #[test]
    fn unknown_shader_selector_is_kept_verbatim() {
        let s = GpuState::new(GpuStateDesc { shader_type: 200, ..Default::default() });
        assert_eq!(s.shader_type(), 200);
        assert_eq!(s.shader(), None);
    }

    // ── views ─────────────────────────────────────────────────────────────

    #[test]
    fn shader_view() {
        assert_eq!(GpuState::new(sample_desc()).shader(), Some(ShaderType::FillPath));
        assert_eq!(GpuState::default().shader(), Some(ShaderType::Fill));
    }

    #[test]
    fn zero_ids_are_unbound() {
        let s = GpuState::new(sample_desc());
        assert_eq!(s.render_buffer(), Some(7));
        assert_eq!(s.bound_textures().collect::<Vec<_>>(), vec![(1, 3), (3, 9)]);

        let empty = GpuState::default();
        assert_eq!(empty.render_buffer(), None);
        assert_eq!(empty.bound_textures().count(), 0);
    }

    #[test]
    fn active_clips_follow_clip_size() {
        let s = GpuState::new(sample_desc());
        let clips = s.active_clips();
        assert_eq!(clips.len(), 3);
        assert_eq!(clips[2], Matrix4x4::translation(2.0, -2.0));
    }

    #[test]
    fn active_clips_capped_at_capacity() {
        let s = GpuState::new(GpuStateDesc { clip_size: 255, ..sample_desc() });
        assert_eq!(s.clip_size(), 255);
        assert_eq!(s.active_clips().len(), MAX_CLIPS);
    }

    #[test]
    fn scissor_gated_by_flag() {
        let on = GpuState::new(sample_desc());
        assert_eq!(on.scissor(), Some(IntRect::new(10, 20, 300, 400)));

        let off = GpuState::new(GpuStateDesc { enable_scissor: false, ..sample_desc() });
        assert_eq!(off.scissor(), None);
        // The stored rect is still readable.
        assert_eq!(off.scissor_rect(), IntRect::new(10, 20, 300, 400));
    }

    #[test]
    fn snapshot_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GpuState>();
    }
}
