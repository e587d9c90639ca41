use core::mem::offset_of;
use core::ops::Range;

use crate::error::{Error, Result};
use crate::native::{ensure_len, read_pod, read_u8, write_pod};
use crate::state::GpuState;

/// Size in bytes of the native command struct.
pub const GPU_COMMAND_SIZE: usize = size_of::<GpuCommand>();

const _: () = {
    assert!(GPU_COMMAND_SIZE == 804);
    assert!(offset_of!(GpuCommand, gpu_state) == 4);
    assert!(offset_of!(GpuCommand, geometry_id) == 792);
    assert!(offset_of!(GpuCommand, indices_offset) == 800);
};

/// What a [`GpuCommand`] asks the driver to do.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CommandType {
    /// Clear the state's render buffer. Geometry fields are unused.
    ClearRenderBuffer = 0,
    /// Draw `indices_count` indices of a geometry starting at `indices_offset`.
    DrawGeometry = 1,
}

impl CommandType {
    #[inline]
    pub const fn from_raw(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::ClearRenderBuffer),
            1 => Some(Self::DrawGeometry),
            _ => None,
        }
    }
}

/// One command from the engine, in native layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GpuCommand {
    pub(crate) command_type: CommandType,
    pub(crate) gpu_state: GpuState,
    pub(crate) geometry_id: u32,
    pub(crate) indices_count: u32,
    pub(crate) indices_offset: u32,
}

impl GpuCommand {
    pub fn clear(gpu_state: GpuState) -> Self {
        Self {
            command_type: CommandType::ClearRenderBuffer,
            gpu_state,
            geometry_id: 0,
            indices_count: 0,
            indices_offset: 0,
        }
    }

    pub fn draw(gpu_state: GpuState, geometry_id: u32, indices: Range<u32>) -> Self {
        Self {
            command_type: CommandType::DrawGeometry,
            gpu_state,
            geometry_id,
            indices_count: indices.end.saturating_sub(indices.start),
            indices_offset: indices.start,
        }
    }

    #[inline]
    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    #[inline]
    pub fn gpu_state(&self) -> &GpuState {
        &self.gpu_state
    }

    #[inline]
    pub fn geometry_id(&self) -> u32 {
        self.geometry_id
    }

    #[inline]
    pub fn indices_count(&self) -> u32 {
        self.indices_count
    }

    #[inline]
    pub fn indices_offset(&self) -> u32 {
        self.indices_offset
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.command_type == CommandType::DrawGeometry
    }

    /// Index range into the geometry's index buffer. Saturates on overflow.
    #[inline]
    pub fn index_range(&self) -> Range<u32> {
        self.indices_offset..self.indices_offset.saturating_add(self.indices_count)
    }

    /// Decodes one command from native bytes.
    pub fn from_native_bytes(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, GPU_COMMAND_SIZE)?;

        let tag = read_u8(bytes, offset_of!(GpuCommand, command_type));
        let Some(command_type) = CommandType::from_raw(tag) else {
            log::debug!("rejecting native command with type {tag}");
            return Err(Error::UnknownCommand(tag));
        };

        let state_at = offset_of!(GpuCommand, gpu_state);
        Ok(Self {
            command_type,
            gpu_state: GpuState::from_native_bytes(&bytes[state_at..])?,
            geometry_id: read_pod::<u32>(bytes, offset_of!(GpuCommand, geometry_id)),
            indices_count: read_pod::<u32>(bytes, offset_of!(GpuCommand, indices_count)),
            indices_offset: read_pod::<u32>(bytes, offset_of!(GpuCommand, indices_offset)),
        })
    }

    /// Encodes the command in native layout with zeroed padding.
    ///
    /// Fails when the embedded state cannot be encoded.
    pub fn to_native_bytes(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; GPU_COMMAND_SIZE];
        out[offset_of!(GpuCommand, command_type)] = self.command_type as u8;
        self.gpu_state
            .write_native(&mut out[offset_of!(GpuCommand, gpu_state)..])?;
        write_pod(&mut out, offset_of!(GpuCommand, geometry_id), &self.geometry_id);
        write_pod(&mut out, offset_of!(GpuCommand, indices_count), &self.indices_count);
        write_pod(&mut out, offset_of!(GpuCommand, indices_offset), &self.indices_offset);
        Ok(out)
    }
}
