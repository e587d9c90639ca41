//! GPU render state snapshots.
//!
//! A [`GpuState`] is the full set of parameters the engine attaches to one
//! draw or clear command. It is built once (from a [`GpuStateDesc`] or from
//! native memory, see [`crate::native`]) and only read afterwards.

mod gpu_state;
mod shader;

pub use gpu_state::{GpuState, GpuStateDesc, MAX_CLIPS, UNIFORM_SCALARS, UNIFORM_VECTORS};
pub use shader::ShaderType;

#[cfg(test)]
pub(crate) use gpu_state::tests::sample_desc;
