use crate::error::BindError;
use crate::value::Value;

use super::{AttribDesc, IndexBuffer, MAX_ATTRIBUTES};

/// Vertex-shader input: resolved vertex id + raw attributes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InVertex {
    pub vertex_id: u32,
    pub attributes: [Value; MAX_ATTRIBUTES],
}

/// Attribute slots + optional index buffer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexArray<'a> {
    pub attribs: [AttribDesc<'a>; MAX_ATTRIBUTES],
    pub indices: Option<IndexBuffer<'a>>,
}

impl<'a> VertexArray<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `desc` to attribute `slot`.
    pub fn set_attrib(&mut self, slot: usize, desc: AttribDesc<'a>) -> Result<(), BindError> {
        let target = self.attribs.get_mut(slot).ok_or(BindError::SlotOutOfRange {
            slot,
            max: MAX_ATTRIBUTES,
        })?;
        *target = desc;
        Ok(())
    }

    /// Builder-style [`set_attrib`](Self::set_attrib).
    pub fn with_attrib(mut self, slot: usize, desc: AttribDesc<'a>) -> Result<Self, BindError> {
        self.set_attrib(slot, desc)?;
        Ok(self)
    }

    /// Binds or unbinds the index buffer.
    #[inline]
    pub fn set_indices(&mut self, indices: Option<IndexBuffer<'a>>) {
        self.indices = indices;
    }

    /// Maps a shader invocation to a vertex id.
    ///
    /// Without an index buffer this is the identity. With one, `invocation`
    /// must be below the index count.
    #[inline]
    pub fn resolve_vertex_id(&self, invocation: u32) -> u32 {
        match &self.indices {
            None => invocation,
            Some(ib) => ib.get(invocation as usize),
        }
    }

    /// Reads every bound attribute for vertex `index`.
    pub fn fetch_attributes(&self, index: u32) -> [Value; MAX_ATTRIBUTES] {
        let mut out = [Value::Empty; MAX_ATTRIBUTES];
        for (slot, desc) in out.iter_mut().zip(&self.attribs) {
            *slot = desc.read(index);
        }
        out
    }

    /// Vertex assembly for one invocation.
    #[inline]
    pub fn assemble(&self, invocation: u32) -> InVertex {
        let vertex_id = self.resolve_vertex_id(invocation);
        InVertex {
            vertex_id,
            attributes: self.fetch_attributes(vertex_id),
        }
    }

    /// Checks that a draw of `vertex_count` vertices stays inside every bound
    /// buffer.
    ///
    /// Only invocations that belong to a whole triangle are considered, which is
    /// what the pipeline driver reaches.
    pub fn validate(&self, vertex_count: u32) -> Result<(), BindError> {
        let reached = vertex_count - vertex_count % 3;
        if reached == 0 {
            return Ok(());
        }

        let max_id = match &self.indices {
            None => reached - 1,
            Some(ib) => {
                if (reached as usize) > ib.len() {
                    return Err(BindError::IndexCountExceeded {
                        requested: reached,
                        available: ib.len(),
                    });
                }
                (0..reached as usize).map(|i| ib.get(i)).max().unwrap_or(0)
            }
        };

        for (slot, desc) in self.attribs.iter().enumerate() {
            if (max_id as usize) >= desc.capacity() {
                return Err(BindError::VertexOutOfRange {
                    slot,
                    vertex: max_id,
                    len: desc.data.len(),
                });
            }
        }
        Ok(())
    }
}
