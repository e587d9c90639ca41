use bytemuck::Pod;

use crate::error::{Error, Result};

/// Copies a `T` out of `bytes` at `offset`.
///
/// Callers check the buffer length up front; offsets come from `offset_of!`.
#[inline]
pub(crate) fn read_pod<T: Pod>(bytes: &[u8], offset: usize) -> T {
    bytemuck::pod_read_unaligned(&bytes[offset..offset + size_of::<T>()])
}

#[inline]
pub(crate) fn read_u8(bytes: &[u8], offset: usize) -> u8 {
    bytes[offset]
}

pub(crate) fn read_bool(bytes: &[u8], offset: usize, field: &'static str) -> Result<bool> {
    match bytes[offset] {
        0 => Ok(false),
        1 => Ok(true),
        value => {
            log::debug!("rejecting native bool `{field}` = {value:#04x}");
            Err(Error::InvalidBool { field, value })
        }
    }
}

#[inline]
pub(crate) fn write_pod<T: Pod>(out: &mut [u8], offset: usize, value: &T) {
    out[offset..offset + size_of::<T>()].copy_from_slice(bytemuck::bytes_of(value));
}

/// Fails with [`Error::Truncated`] unless `bytes` holds at least `needed` bytes.
#[inline]
pub(crate) fn ensure_len(bytes: &[u8], needed: usize) -> Result<()> {
    if bytes.len() < needed {
        return Err(Error::Truncated { needed, got: bytes.len() });
    }
    Ok(())
}
