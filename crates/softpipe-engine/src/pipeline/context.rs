use crate::frame::Frame;
use crate::program::Program;
use crate::vertex::VertexArray;

use super::PipelineOptions;

/// The single mutable session object threaded through every pipeline call.
///
/// Borrowed buffers (attributes, indices, textures) must outlive `'a`; the
/// context cannot be mutated by anyone else while a draw runs.
#[derive(Debug, Clone)]
pub struct GpuContext<'a> {
    pub frame: Frame,
    pub vao: VertexArray<'a>,
    pub prg: Program<'a>,
    /// Skip counter-clockwise triangles.
    pub backface_culling: bool,
    pub options: PipelineOptions,
}

impl<'a> GpuContext<'a> {
    /// Context rendering into a fresh `width × height` frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_frame(Frame::new(width, height))
    }

    pub fn with_frame(frame: Frame) -> Self {
        Self {
            frame,
            vao: VertexArray::default(),
            prg: Program::default(),
            backface_culling: false,
            options: PipelineOptions::default(),
        }
    }
}
