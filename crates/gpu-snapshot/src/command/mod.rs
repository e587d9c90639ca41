//! Commands carrying GPU state snapshots.
//!
//! The engine emits a flat list of commands per frame. Each one is either a
//! clear of a render buffer or a geometry draw, and each carries the full
//! [`GpuState`](crate::state::GpuState) it must be executed with.

mod list;
mod record;

pub use list::CommandList;
pub use record::{CommandType, GpuCommand, GPU_COMMAND_SIZE};
