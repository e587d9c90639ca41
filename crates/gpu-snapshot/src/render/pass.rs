use crate::coords::Matrix4x4;
use crate::state::GpuState;

/// Premultiplied-alpha "over" blending.
fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Blend state for the pipeline. `None` means blending disabled (replace).
pub fn blend_state(state: &GpuState) -> Option<wgpu::BlendState> {
    state.enable_blend().then(premul_alpha_blend)
}

/// Scissor rect as `(x, y, w, h)` arguments for `set_scissor_rect`.
///
/// With scissoring disabled this is the full viewport. An enabled rect is
/// clamped to the viewport. Returns `None` when the clamped area is zero
/// (the caller should skip the draw).
pub fn scissor_rect(state: &GpuState) -> Option<(u32, u32, u32, u32)> {
    let viewport = state.viewport_rect();

    let r = match state.scissor() {
        None => viewport,
        Some(rect) => rect.intersect(viewport)?,
    };

    if r.is_empty() {
        return None;
    }

    // Both edges are clamped to the viewport, which starts at 0.
    Some((r.left as u32, r.top as u32, r.width(), r.height()))
}

/// Orthographic viewport projection applied after the state's transform.
///
/// This is the matrix vertex shaders expect: pixel-space geometry in, NDC out.
pub fn projected_transform(state: &GpuState) -> Matrix4x4 {
    let projection = Matrix4x4::orthographic(
        state.viewport_width() as f32,
        state.viewport_height() as f32,
        false,
    );
    projection * *state.transform()
}

/// Pass-level parameters for one command, gathered in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    pub blend: Option<wgpu::BlendState>,
    /// `None` = nothing visible, skip the draw.
    pub scissor: Option<(u32, u32, u32, u32)>,
    /// `(x, y, w, h, min_depth, max_depth)` for `set_viewport`.
    pub viewport: (f32, f32, f32, f32, f32, f32),
}

impl DrawParams {
    pub fn from_state(state: &GpuState) -> Self {
        let scissor = scissor_rect(state);
        if scissor.is_none() {
            log::trace!(
                "empty scissor for viewport {}x{} (scissor {:?})",
                state.viewport_width(),
                state.viewport_height(),
                state.scissor(),
            );
        }

        Self {
            blend: blend_state(state),
            scissor,
            viewport: (
                0.0,
                0.0,
                state.viewport_width() as f32,
                state.viewport_height() as f32,
                0.0,
                1.0,
            ),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.scissor.is_some()
    }
}
