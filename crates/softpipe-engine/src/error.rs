use thiserror::Error;

/// Bind-time validation failure.
///
/// Buffers and model tables are checked once when they are bound, never per
/// vertex or per pixel.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BindError {
    #[error("attribute slot {slot} out of range (max {max})")]
    SlotOutOfRange { slot: usize, max: usize },

    #[error("attribute buffer of {len} bytes cannot hold an element at offset {offset} of size {size}")]
    AttributeOutOfBounds { offset: usize, size: usize, len: usize },

    #[error("attribute slot {slot} reads past its buffer for vertex {vertex} ({len} bytes)")]
    VertexOutOfRange { slot: usize, vertex: u32, len: usize },

    #[error("index buffer of {len} bytes is not a multiple of the {width}-byte element width")]
    IndexBufferMisaligned { len: usize, width: usize },

    #[error("draw of {requested} vertices exceeds the {available} bound indices")]
    IndexCountExceeded { requested: u32, available: usize },

    #[error("texture has {0} channels (max 4)")]
    TooManyChannels(u32),

    #[error("texture buffer of {len} bytes is smaller than the {expected} bytes its size requires")]
    TextureTooSmall { expected: usize, len: usize },

    #[error("root {0} is not a node of the model")]
    MissingRoot(usize),

    #[error("node {node} references missing {what} {index}")]
    DanglingReference { node: usize, what: &'static str, index: usize },

    #[error("node {0} is reachable more than once")]
    SharedNode(usize),
}
