use crate::error::BindError;
use crate::value::{AttribType, Value};

/// How to read one attribute slot out of a raw byte buffer.
///
/// Element `i` lives at byte `offset + stride * i` and is `ty.byte_size()`
/// bytes of native-endian `f32`s. No alignment is required.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AttribDesc<'a> {
    pub ty: AttribType,
    pub data: &'a [u8],
    pub offset: usize,
    pub stride: usize,
}

impl<'a> AttribDesc<'a> {
    /// Inert descriptor.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ty: AttribType::Empty,
            data: &[],
            offset: 0,
            stride: 0,
        }
    }

    /// Creates a descriptor, checking that at least the first element fits.
    pub fn new(ty: AttribType, data: &'a [u8], offset: usize, stride: usize) -> Result<Self, BindError> {
        let size = ty.byte_size();
        if ty != AttribType::Empty && offset.checked_add(size).is_none_or(|end| end > data.len()) {
            return Err(BindError::AttributeOutOfBounds {
                offset,
                size,
                len: data.len(),
            });
        }
        Ok(Self {
            ty,
            data,
            offset,
            stride,
        })
    }

    /// Tightly packed, zero-offset descriptor.
    #[inline]
    pub fn packed(ty: AttribType, data: &'a [u8]) -> Result<Self, BindError> {
        Self::new(ty, data, 0, ty.byte_size())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ty == AttribType::Empty
    }

    /// Number of elements addressable through this descriptor.
    ///
    /// A zero stride repeats the first element for every vertex.
    pub fn capacity(&self) -> usize {
        let size = self.ty.byte_size();
        if self.is_empty() {
            return usize::MAX;
        }
        if self.offset.checked_add(size).is_none_or(|end| end > self.data.len()) {
            return 0;
        }
        if self.stride == 0 {
            return usize::MAX;
        }
        (self.data.len() - self.offset - size) / self.stride + 1
    }

    /// Reads element `index` in the declared shape.
    ///
    /// Panics if the element lies outside `data`; [`VertexArray::validate`]
    /// rules that out ahead of a draw.
    ///
    /// [`VertexArray::validate`]: super::VertexArray::validate
    pub fn read(&self, index: u32) -> Value {
        if self.is_empty() {
            return Value::Empty;
        }
        let start = self.offset + self.stride * index as usize;
        let bytes = &self.data[start..start + self.ty.byte_size()];

        let mut comps = [0.0f32; 4];
        for (c, chunk) in comps.iter_mut().zip(bytes.chunks_exact(4)) {
            *c = bytemuck::pod_read_unaligned(chunk);
        }
        Value::from_components(self.ty, &comps)
    }
}
