//! Native memory layout and checked marshaling.
//!
//! The engine hands state over as raw C structs. Decoding never transmutes:
//! each field is copied out at its `#[repr(C)]` offset, and `bool`/count
//! fields are range-checked first so a corrupt buffer cannot produce an
//! invalid Rust value.

mod bytes;
mod state;

pub use state::GPU_STATE_SIZE;

pub(crate) use bytes::{ensure_len, read_bool, read_pod, read_u8, write_pod};

pub use crate::command::GPU_COMMAND_SIZE;
