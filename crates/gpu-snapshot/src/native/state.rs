use core::mem::offset_of;

use crate::coords::{IntRect, Matrix4x4, Vec4};
use crate::error::{Error, Result};
use crate::state::{GpuState, MAX_CLIPS, UNIFORM_SCALARS, UNIFORM_VECTORS};

use super::{ensure_len, read_bool, read_pod, read_u8, write_pod};

/// Size in bytes of the native GPU state struct.
pub const GPU_STATE_SIZE: usize = size_of::<GpuState>();

// Native layout, 4-byte aligned.
const _: () = {
    assert!(GPU_STATE_SIZE == 788);
    assert!(align_of::<GpuState>() == 4);
    assert!(offset_of!(GpuState, transform) == 8);
    assert!(offset_of!(GpuState, enable_texturing) == 72);
    assert!(offset_of!(GpuState, enable_blend) == 73);
    assert!(offset_of!(GpuState, shader_type) == 74);
    assert!(offset_of!(GpuState, render_buffer_id) == 76);
    assert!(offset_of!(GpuState, texture_3_id) == 88);
    assert!(offset_of!(GpuState, uniform_scalar) == 92);
    assert!(offset_of!(GpuState, uniform_vector) == 124);
    assert!(offset_of!(GpuState, clip_size) == 252);
    assert!(offset_of!(GpuState, clip) == 256);
    assert!(offset_of!(GpuState, enable_scissor) == 768);
    assert!(offset_of!(GpuState, scissor_rect) == 772);
};

impl GpuState {
    /// Decodes a snapshot from native bytes.
    ///
    /// Only the first [`GPU_STATE_SIZE`] bytes are read. Padding is ignored.
    /// Unknown shader selectors are preserved; out-of-range bools and a
    /// `clip_size` above the stack capacity are rejected.
    pub fn from_native_bytes(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, GPU_STATE_SIZE)?;

        let clip_size = read_u8(bytes, offset_of!(GpuState, clip_size));
        if usize::from(clip_size) > MAX_CLIPS {
            log::debug!("rejecting native state with clip_size {clip_size}");
            return Err(Error::ClipOverflow(clip_size));
        }

        Ok(Self {
            viewport_width: read_pod::<u32>(bytes, offset_of!(GpuState, viewport_width)),
            viewport_height: read_pod::<u32>(bytes, offset_of!(GpuState, viewport_height)),
            transform: read_pod::<Matrix4x4>(bytes, offset_of!(GpuState, transform)),
            enable_texturing: read_bool(
                bytes,
                offset_of!(GpuState, enable_texturing),
                "enable_texturing",
            )?,
            enable_blend: read_bool(bytes, offset_of!(GpuState, enable_blend), "enable_blend")?,
            shader_type: read_u8(bytes, offset_of!(GpuState, shader_type)),
            render_buffer_id: read_pod::<u32>(bytes, offset_of!(GpuState, render_buffer_id)),
            texture_1_id: read_pod::<u32>(bytes, offset_of!(GpuState, texture_1_id)),
            texture_2_id: read_pod::<u32>(bytes, offset_of!(GpuState, texture_2_id)),
            texture_3_id: read_pod::<u32>(bytes, offset_of!(GpuState, texture_3_id)),
            uniform_scalar: read_pod::<[f32; UNIFORM_SCALARS]>(
                bytes,
                offset_of!(GpuState, uniform_scalar),
            ),
            uniform_vector: read_pod::<[Vec4; UNIFORM_VECTORS]>(
                bytes,
                offset_of!(GpuState, uniform_vector),
            ),
            clip_size,
            clip: read_pod::<[Matrix4x4; MAX_CLIPS]>(bytes, offset_of!(GpuState, clip)),
            enable_scissor: read_bool(
                bytes,
                offset_of!(GpuState, enable_scissor),
                "enable_scissor",
            )?,
            scissor_rect: read_pod::<IntRect>(bytes, offset_of!(GpuState, scissor_rect)),
        })
    }

    /// Copies a snapshot out of native memory.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of [`GPU_STATE_SIZE`] bytes for the
    /// duration of the call. No alignment is required.
    pub unsafe fn from_native_ptr(ptr: *const u8) -> Result<Self> {
        // SAFETY: the caller guarantees `GPU_STATE_SIZE` readable bytes; u8 has no alignment.
        let bytes = unsafe { core::slice::from_raw_parts(ptr, GPU_STATE_SIZE) };
        Self::from_native_bytes(bytes)
    }

    /// Encodes the snapshot in native layout with zeroed padding.
    ///
    /// Fails with [`Error::ClipOverflow`] when `clip_size` exceeds the clip
    /// stack, since the native struct cannot hold it.
    pub fn to_native_bytes(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; GPU_STATE_SIZE];
        self.write_native(&mut out)?;
        Ok(out)
    }

    /// Writes the native encoding into `out[..GPU_STATE_SIZE]`.
    pub(crate) fn write_native(&self, out: &mut [u8]) -> Result<()> {
        if usize::from(self.clip_size) > MAX_CLIPS {
            log::debug!("refusing to encode state with clip_size {}", self.clip_size);
            return Err(Error::ClipOverflow(self.clip_size));
        }

        write_pod(out, offset_of!(GpuState, viewport_width), &self.viewport_width);
        write_pod(out, offset_of!(GpuState, viewport_height), &self.viewport_height);
        write_pod(out, offset_of!(GpuState, transform), &self.transform);
        out[offset_of!(GpuState, enable_texturing)] = u8::from(self.enable_texturing);
        out[offset_of!(GpuState, enable_blend)] = u8::from(self.enable_blend);
        out[offset_of!(GpuState, shader_type)] = self.shader_type;
        write_pod(out, offset_of!(GpuState, render_buffer_id), &self.render_buffer_id);
        write_pod(out, offset_of!(GpuState, texture_1_id), &self.texture_1_id);
        write_pod(out, offset_of!(GpuState, texture_2_id), &self.texture_2_id);
        write_pod(out, offset_of!(GpuState, texture_3_id), &self.texture_3_id);
        write_pod(out, offset_of!(GpuState, uniform_scalar), &self.uniform_scalar);
        write_pod(out, offset_of!(GpuState, uniform_vector), &self.uniform_vector);
        out[offset_of!(GpuState, clip_size)] = self.clip_size;
        write_pod(out, offset_of!(GpuState, clip), &self.clip);
        out[offset_of!(GpuState, enable_scissor)] = u8::from(self.enable_scissor);
        write_pod(out, offset_of!(GpuState, scissor_rect), &self.scissor_rect);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GpuStateDesc;
    use crate::state::sample_desc;

    #[test]
    fn decode_reads_native_offsets() {
        let mut bytes = vec![0u8; GPU_STATE_SIZE];
        bytes[0..4].copy_from_slice(&640u32.to_ne_bytes());
        bytes[4..8].copy_from_slice(&480u32.to_ne_bytes());
        bytes[8..72].copy_from_slice(bytemuck::bytes_of(&Matrix4x4::IDENTITY));
        bytes[73] = 1; // enable_blend
        bytes[74] = 1; // shader_type
        bytes[84..88].copy_from_slice(&42u32.to_ne_bytes()); // texture_2_id
        bytes[252] = 2; // clip_size
        bytes[768] = 1; // enable_scissor
        bytes[772..788].copy_from_slice(bytemuck::bytes_of(&IntRect::new(1, 2, 3, 4)));

        let s = GpuState::from_native_bytes(&bytes).unwrap();
        assert_eq!(s.viewport_width(), 640);
        assert_eq!(s.viewport_height(), 480);
        assert_eq!(*s.transform(), Matrix4x4::IDENTITY);
        assert!(!s.enable_texturing());
        assert!(s.enable_blend());
        assert_eq!(s.shader_type(), 1);
        assert_eq!(s.texture_ids(), [0, 42, 0]);
        assert_eq!(s.clip_size(), 2);
        assert_eq!(s.scissor(), Some(IntRect::new(1, 2, 3, 4)));
    }

    #[test]
    fn encode_then_decode_preserves_state() {
        let s = GpuState::new(sample_desc());
        let bytes = s.to_native_bytes().unwrap();
        assert_eq!(bytes.len(), GPU_STATE_SIZE);
        assert_eq!(GpuState::from_native_bytes(&bytes).unwrap(), s);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = GpuState::default().to_native_bytes().unwrap();
        bytes.extend_from_slice(&[0xab; 16]);
        assert_eq!(GpuState::from_native_bytes(&bytes).unwrap(), GpuState::default());
    }

    #[test]
    fn padding_is_zeroed() {
        let bytes = GpuState::new(sample_desc()).to_native_bytes().unwrap();
        assert_eq!(bytes[75], 0);
        assert_eq!(&bytes[253..256], &[0, 0, 0]);
        assert_eq!(&bytes[769..772], &[0, 0, 0]);
    }

    #[test]
    fn pointer_decode_matches_slice_decode() {
        let bytes = GpuState::new(sample_desc()).to_native_bytes().unwrap();
        let s = unsafe { GpuState::from_native_ptr(bytes.as_ptr()) }.unwrap();
        assert_eq!(s, GpuState::new(sample_desc()));
    }

    #[test]
    fn extreme_values_survive_encoding() {
        let s = GpuState::new(GpuStateDesc {
            viewport_width: u32::MAX,
            viewport_height: u32::MAX,
            shader_type: u8::MAX,
            render_buffer_id: u32::MAX,
            texture_ids: [u32::MAX; 3],
            clip_size: MAX_CLIPS as u8,
            enable_scissor: true,
            scissor_rect: IntRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX),
            ..sample_desc()
        });
        let back = GpuState::from_native_bytes(&s.to_native_bytes().unwrap()).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.active_clips().len(), MAX_CLIPS);
    }

    // ── rejection ─────────────────────────────────────────────────────────

    #[test]
    fn short_buffer_is_rejected() {
        let bytes = vec![0u8; GPU_STATE_SIZE - 1];
        assert_eq!(
            GpuState::from_native_bytes(&bytes),
            Err(Error::Truncated { needed: GPU_STATE_SIZE, got: GPU_STATE_SIZE - 1 })
        );
    }

    #[test]
    fn bad_bool_is_rejected() {
        let mut bytes = GpuState::default().to_native_bytes().unwrap();
        bytes[768] = 7;
        assert_eq!(
            GpuState::from_native_bytes(&bytes),
            Err(Error::InvalidBool { field: "enable_scissor", value: 7 })
        );
    }

    #[test]
    fn clip_overflow_is_rejected() {
        let mut bytes = GpuState::default().to_native_bytes().unwrap();
        bytes[252] = 9;
        assert_eq!(GpuState::from_native_bytes(&bytes), Err(Error::ClipOverflow(9)));
    }

    #[test]
    fn clip_overflow_is_not_encoded() {
        let s = GpuState::new(GpuStateDesc { clip_size: 9, ..Default::default() });
        assert_eq!(s.clip_size(), 9);
        assert_eq!(s.to_native_bytes(), Err(Error::ClipOverflow(9)));
    }

    #[test]
    fn unknown_shader_is_preserved() {
        let s = GpuState::new(GpuStateDesc { shader_type: 0x7f, ..Default::default() });
        let back = GpuState::from_native_bytes(&s.to_native_bytes().unwrap()).unwrap();
        assert_eq!(back.shader_type(), 0x7f);
        assert_eq!(back.shader(), None);
    }
}
