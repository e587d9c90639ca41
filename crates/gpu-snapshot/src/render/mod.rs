//! wgpu-facing views of a GPU state snapshot.
//!
//! Nothing here touches a device or records commands. Each function reads a
//! [`GpuState`](crate::state::GpuState) and returns the wgpu parameters a
//! driver would bind for it:
//! - blend state and scissor rect for the render pass
//! - a packed uniform block for the fill shaders
//! - vertex buffer layouts for the two engine vertex formats

mod pass;
mod uniforms;
mod vertex;

pub use pass::{blend_state, projected_transform, scissor_rect, DrawParams};
pub use uniforms::{uniforms_min_binding_size, ShaderUniforms};
pub use vertex::{vertex_buffer_layout, FillVertex, PathVertex};
