use crate::error::BindError;

/// Element width of an index buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum IndexType {
    U8,
    U16,
    #[default]
    U32,
}

impl IndexType {
    /// Width of one index in bytes.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Borrowed index buffer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IndexBuffer<'a> {
    data: &'a [u8],
    ty: IndexType,
}

impl<'a> IndexBuffer<'a> {
    /// Wraps raw native-endian index bytes.
    pub fn new(data: &'a [u8], ty: IndexType) -> Result<Self, BindError> {
        let width = ty.width();
        if data.len() % width != 0 {
            return Err(BindError::IndexBufferMisaligned {
                len: data.len(),
                width,
            });
        }
        Ok(Self { data, ty })
    }

    #[inline]
    pub fn from_u8(indices: &'a [u8]) -> Self {
        Self {
            data: indices,
            ty: IndexType::U8,
        }
    }

    #[inline]
    pub fn from_u16(indices: &'a [u16]) -> Self {
        Self {
            data: bytemuck::cast_slice(indices),
            ty: IndexType::U16,
        }
    }

    #[inline]
    pub fn from_u32(indices: &'a [u32]) -> Self {
        Self {
            data: bytemuck::cast_slice(indices),
            ty: IndexType::U32,
        }
    }

    /// Number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.ty.width()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads index `i`, widened to `u32`. Panics past the end.
    #[inline]
    pub fn get(&self, i: usize) -> u32 {
        let width = self.ty.width();
        let bytes = &self.data[i * width..(i + 1) * width];
        match self.ty {
            IndexType::U8 => bytes[0] as u32,
            IndexType::U16 => bytemuck::pod_read_unaligned::<u16>(bytes) as u32,
            IndexType::U32 => bytemuck::pod_read_unaligned::<u32>(bytes),
        }
    }
}
