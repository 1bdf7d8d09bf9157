//! Vertex pulling.
//!
//! A [`VertexArray`] describes how each attribute slot is read out of
//! caller-owned byte buffers, plus an optional index buffer. Buffers are
//! borrowed for the lifetime of the array; nothing is copied.
//!
//! Layout checks happen when descriptors are built ([`AttribDesc::new`],
//! [`IndexBuffer::new`]) or once per draw ([`VertexArray::validate`]). Reads
//! themselves only rely on slice indexing.

mod array;
mod attrib;
mod index;

pub use array::{InVertex, VertexArray};
pub use attrib::AttribDesc;
pub use index::{IndexBuffer, IndexType};

/// Number of attribute / varying slots.
pub const MAX_ATTRIBUTES: usize = 4;
