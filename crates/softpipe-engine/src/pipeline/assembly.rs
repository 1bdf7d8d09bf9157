use crate::coords::Viewport;
use crate::program::{OutVertex, Program};
use crate::vertex::VertexArray;

/// Three shaded vertices forming one primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [OutVertex; 3],
}

impl Triangle {
    /// Runs vertex assembly and the vertex shader for invocations
    /// `last - 2`, `last - 1` and `last`.
    pub fn assemble(vao: &VertexArray<'_>, prg: &Program<'_>, last: u32) -> Self {
        let vertices = [last - 2, last - 1, last].map(|invocation| {
            let input = vao.assemble(invocation);
            (prg.vertex_shader)(&input, &prg.uniforms)
        });
        Self { vertices }
    }

    /// Homogeneous divide of x, y, z. W is kept for perspective correction.
    pub fn perspective_divide(&mut self) {
        for v in &mut self.vertices {
            let w = v.position.w;
            v.position.x /= w;
            v.position.y /= w;
            v.position.z /= w;
        }
    }

    /// Maps x, y from normalized device coordinates to pixels. Z is untouched.
    pub fn viewport_transform(&mut self, viewport: Viewport) {
        for v in &mut self.vertices {
            let (x, y) = viewport.ndc_to_screen(v.position.x, v.position.y);
            v.position.x = x;
            v.position.y = y;
        }
    }

    /// Retained clip-space w of each vertex.
    #[inline]
    pub fn w(&self) -> [f32; 3] {
        self.vertices.map(|v| v.position.w)
    }
}
