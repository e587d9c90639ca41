use crate::error::{Error, Result};

use super::{GpuCommand, GPU_COMMAND_SIZE};

/// Ordered commands for one frame, in the order the engine issued them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<GpuCommand>,
}

impl CommandList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, cmd: GpuCommand) {
        self.commands.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GpuCommand> {
        self.commands.iter()
    }

    /// Number of geometry draws (clears excluded).
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    /// Decodes `count` consecutive native commands from `bytes`.
    ///
    /// Stops at the first malformed command; nothing is returned on error.
    pub fn from_native_bytes(count: usize, bytes: &[u8]) -> Result<Self> {
        let needed = count.checked_mul(GPU_COMMAND_SIZE).unwrap_or(usize::MAX);
        if bytes.len() < needed {
            return Err(Error::Truncated { needed, got: bytes.len() });
        }

        let commands = bytes
            .chunks_exact(GPU_COMMAND_SIZE)
            .take(count)
            .map(GpuCommand::from_native_bytes)
            .collect::<Result<Vec<_>>>()?;

        log::trace!("decoded {} native commands", commands.len());
        Ok(Self { commands })
    }

    /// Copies `count` native commands out of engine memory.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `count * GPU_COMMAND_SIZE` bytes for
    /// the duration of the call.
    pub unsafe fn from_native_ptr(count: usize, ptr: *const u8) -> Result<Self> {
        if count == 0 {
            return Ok(Self::new());
        }
        let len = count
            .checked_mul(GPU_COMMAND_SIZE)
            .ok_or(Error::Truncated { needed: usize::MAX, got: 0 })?;
        // SAFETY: the caller guarantees `count * GPU_COMMAND_SIZE` readable bytes.
        let bytes = unsafe { core::slice::from_raw_parts(ptr, len) };
        Self::from_native_bytes(count, bytes)
    }
}

impl FromIterator<GpuCommand> for CommandList {
    fn from_iter<I: IntoIterator<Item = GpuCommand>>(iter: I) -> Self {
        Self { commands: iter.into_iter().collect() }
    }
}

impl IntoIterator for CommandList {
    type Item = GpuCommand;
    type IntoIter = std::vec::IntoIter<GpuCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a GpuCommand;
    type IntoIter = std::slice::Iter<'a, GpuCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandType;
    use crate::state::GpuState;

    fn frame() -> CommandList {
        let mut list = CommandList::new();
        list.push(GpuCommand::clear(GpuState::default()));
        list.push(GpuCommand::draw(GpuState::default(), 1, 0..6));
        list.push(GpuCommand::draw(GpuState::default(), 2, 6..12));
        list
    }

    #[test]
    fn keeps_issue_order() {
        let list = frame();
        assert_eq!(list.len(), 3);
        assert_eq!(list.draw_count(), 2);
        let kinds: Vec<_> = list.iter().map(|c| c.command_type()).collect();
        assert_eq!(
            kinds,
            vec![CommandType::ClearRenderBuffer, CommandType::DrawGeometry, CommandType::DrawGeometry]
        );
    }

    #[test]
    fn decodes_consecutive_native_commands() {
        let list = frame();
        let bytes: Vec<u8> = list.iter().flat_map(|c| c.to_native_bytes().unwrap()).collect();
        assert_eq!(CommandList::from_native_bytes(3, &bytes).unwrap(), list);

        // A shorter count only reads the prefix.
        let prefix = CommandList::from_native_bytes(1, &bytes).unwrap();
        assert_eq!(prefix.commands(), &list.commands()[..1]);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let bytes = vec![0u8; GPU_COMMAND_SIZE];
        assert_eq!(
            CommandList::from_native_bytes(2, &bytes),
            Err(Error::Truncated { needed: 2 * GPU_COMMAND_SIZE, got: GPU_COMMAND_SIZE })
        );
    }

    #[test]
    fn overflowing_count_is_rejected() {
        let huge = usize::MAX / 2;
        assert_eq!(
            CommandList::from_native_bytes(huge, &[]),
            Err(Error::Truncated { needed: usize::MAX, got: 0 })
        );
        // Rejected before any memory is read.
        assert_eq!(
            unsafe { CommandList::from_native_ptr(huge, core::ptr::null()) },
            Err(Error::Truncated { needed: usize::MAX, got: 0 })
        );
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(CommandList::from_native_bytes(0, &[]).unwrap().is_empty());
        assert!(unsafe { CommandList::from_native_ptr(0, core::ptr::null()) }.unwrap().is_empty());
    }
}
