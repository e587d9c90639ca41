use bytemuck::{Pod, Zeroable};

use crate::coords::{Matrix4x4, Vec4};
use crate::state::{GpuState, MAX_CLIPS, UNIFORM_VECTORS};

use super::projected_transform;

/// Uniform block consumed by the fill shaders, std140-compatible.
///
/// ```wgsl
/// struct Uniforms {
///     state: vec4<f32>,       // time, viewport w, viewport h, scale
///     transform: mat4x4<f32>, // projection * state transform
///     scalar4: array<vec4<f32>, 2>,
///     vector: array<vec4<f32>, 8>,
///     clip_size: u32,
///     clip: array<mat4x4<f32>, 8>,
/// }
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub state: [f32; 4],
    pub transform: Matrix4x4,
    pub scalar4: [Vec4; 2],
    pub vector: [Vec4; UNIFORM_VECTORS],
    pub clip_size: u32,
    pub _pad: [u32; 3], // 16-byte alignment
    pub clip: [Matrix4x4; MAX_CLIPS],
}

const _: () = assert!(size_of::<ShaderUniforms>() == 768);

impl ShaderUniforms {
    /// Packs `state` for upload. `time` is seconds, `scale` the device pixel ratio.
    pub fn from_state(state: &GpuState, time: f32, scale: f32) -> Self {
        let s = state.uniform_scalar();
        let active = state.active_clips();

        let mut clip = [Matrix4x4::IDENTITY; MAX_CLIPS];
        clip[..active.len()].copy_from_slice(active);

        Self {
            state: [
                time,
                state.viewport_width() as f32,
                state.viewport_height() as f32,
                scale,
            ],
            transform: projected_transform(state),
            scalar4: [Vec4::new(s[0], s[1], s[2], s[3]), Vec4::new(s[4], s[5], s[6], s[7])],
            vector: *state.uniform_vector(),
            clip_size: active.len() as u32,
            _pad: [0; 3],
            clip,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Minimum binding size for the uniform buffer in bind group layouts.
pub fn uniforms_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(size_of::<ShaderUniforms>() as u64)
        .expect("ShaderUniforms has non-zero size by construction")
}
