//! GPU render state snapshots as handed over by a native rendering engine.
//!
//! The engine describes every draw with a [`GpuState`]: viewport, transform,
//! bound textures, shader uniforms, clip stack and scissor rect. This crate
//! mirrors that record field-for-field, marshals it to and from native
//! memory, and derives the wgpu parameters a driver binds for it.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `IntRect`, `Vec4`, `Matrix4x4` |
//! | [`state`] | `GpuState`, `GpuStateDesc`, `ShaderType` |
//! | [`native`] | native layout sizes; decode/encode live on the types |
//! | [`command`] | `GpuCommand`, `CommandList` |
//! | [`resource`] | render/vertex/index buffer descriptions |
//! | [`render`] | blend, scissor, uniforms, vertex layouts |
//!
//! ```rust
//! use gpu_snapshot::{GpuState, GpuStateDesc};
//!
//! let state = GpuState::new(GpuStateDesc {
//!     viewport_width: 800,
//!     viewport_height: 600,
//!     enable_blend: true,
//!     ..Default::default()
//! });
//!
//! let bytes = state.to_native_bytes()?;
//! assert_eq!(GpuState::from_native_bytes(&bytes)?, state);
//! # Ok::<(), gpu_snapshot::Error>(())
//! ```

pub mod command;
pub mod coords;
pub mod error;
pub mod logging;
pub mod native;
pub mod render;
pub mod resource;
pub mod state;

pub use command::{CommandList, CommandType, GpuCommand};
pub use error::{Error, Result};
pub use state::{GpuState, GpuStateDesc, ShaderType};
