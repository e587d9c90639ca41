//! Passive descriptions of the GPU resources a snapshot refers to by id.

mod buffers;
mod render_buffer;

pub use buffers::{IndexBuffer, VertexBuffer, VertexBufferFormat};
pub use render_buffer::RenderBuffer;
