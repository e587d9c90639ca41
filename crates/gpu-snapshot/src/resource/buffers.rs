use core::ops::Range;

use crate::error::{Error, Result};

/// Vertex layouts the engine emits.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexBufferFormat {
    /// position 2f, color 4ub, object coords 2f. Used with `ShaderType::FillPath`.
    F2Ub4F2 = 0,
    /// position 2f, color 4ub, texcoords 2f, object coords 2f, 28f of fill data.
    /// Used with `ShaderType::Fill`.
    F2Ub4F2F2F28 = 1,
}

impl VertexBufferFormat {
    #[inline]
    pub fn from_raw(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::F2Ub4F2),
            1 => Ok(Self::F2Ub4F2F2F28),
            _ => Err(Error::UnknownVertexFormat(v)),
        }
    }

    /// Bytes per vertex.
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            Self::F2Ub4F2 => 20,
            Self::F2Ub4F2F2F28 => 140,
        }
    }
}

/// Raw vertex data tagged with its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexBuffer {
    format: VertexBufferFormat,
    data: Vec<u8>,
}

impl VertexBuffer {
    /// Wraps `data`, which must hold a whole number of vertices.
    pub fn new(format: VertexBufferFormat, data: Vec<u8>) -> Result<Self> {
        let stride = format.stride();
        if data.len() % stride != 0 {
            return Err(Error::MisalignedBuffer { len: data.len(), stride });
        }
        Ok(Self { format, data })
    }

    #[inline]
    pub fn format(&self) -> VertexBufferFormat {
        self.format
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.format.stride()
    }

    /// Bytes of vertex `i`.
    pub fn vertex(&self, i: usize) -> Option<&[u8]> {
        let stride = self.format.stride();
        let start = i.checked_mul(stride)?;
        self.data.get(start..start.checked_add(stride)?)
    }
}

/// 32-bit index data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexBuffer {
    indices: Vec<u32>,
}

impl IndexBuffer {
    #[inline]
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Reads native-endian `u32` indices.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const STRIDE: usize = size_of::<u32>();
        if bytes.len() % STRIDE != 0 {
            return Err(Error::MisalignedBuffer { len: bytes.len(), stride: STRIDE });
        }
        Ok(Self { indices: bytemuck::pod_collect_to_vec(bytes) })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Indices addressed by a draw command's index range.
    pub fn slice(&self, range: Range<u32>) -> Result<&[u32]> {
        let (start, end) = (range.start as usize, range.end as usize);
        self.indices
            .get(start..end)
            .ok_or(Error::IndexOutOfRange { end, len: self.indices.len() })
    }

    /// Largest referenced vertex index, if any.
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }
}
