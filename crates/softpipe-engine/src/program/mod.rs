//! Shader program: stage callbacks, uniform bank and the varying table.
//!
//! Shaders are plain function pointers. They are swapped per draw by
//! assigning onto [`Program`] and are called synchronously by the pipeline;
//! they cannot retain references past a call.

mod stages;
mod uniforms;

pub use stages::{InFragment, OutFragment, OutVertex};
pub use uniforms::{Uniforms, MAX_TEXTURES, MAX_UNIFORMS};

use crate::value::AttribType;
use crate::vertex::{InVertex, MAX_ATTRIBUTES};

/// Vertex stage: one input vertex + uniforms → one clip-space vertex.
pub type VertexShader = fn(&InVertex, &Uniforms<'_>) -> OutVertex;

/// Fragment stage: one interpolated fragment + uniforms → one color.
pub type FragmentShader = fn(&InFragment, &Uniforms<'_>) -> OutFragment;

/// Shader pair plus everything they read during a draw.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    pub vertex_shader: VertexShader,
    pub fragment_shader: FragmentShader,
    pub uniforms: Uniforms<'a>,
    /// Shape of each varying passed from the vertex to the fragment stage.
    /// `Empty` slots are not interpolated.
    pub vs2fs: [AttribType; MAX_ATTRIBUTES],
}

impl<'a> Program<'a> {
    pub fn new(vertex_shader: VertexShader, fragment_shader: FragmentShader) -> Self {
        Self {
            vertex_shader,
            fragment_shader,
            uniforms: Uniforms::default(),
            vs2fs: [AttribType::Empty; MAX_ATTRIBUTES],
        }
    }

    /// Declares the shape of varying `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= MAX_ATTRIBUTES`.
    #[inline]
    pub fn set_varying(&mut self, slot: usize, ty: AttribType) {
        self.vs2fs[slot] = ty;
    }
}

impl Default for Program<'_> {
    fn default() -> Self {
        Self::new(passthrough_vertex, black_fragment)
    }
}

fn passthrough_vertex(_: &InVertex, _: &Uniforms<'_>) -> OutVertex {
    OutVertex::default()
}

fn black_fragment(_: &InFragment, _: &Uniforms<'_>) -> OutFragment {
    OutFragment::default()
}
