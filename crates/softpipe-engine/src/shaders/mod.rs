//! Shader pair used by [`draw_model`](crate::scene::draw_model).
//!
//! Vertex stage outputs world position, world normal and texture
//! coordinates; the fragment stage applies Lambert diffuse lighting to
//! either the bound texture or a flat color.

mod lambert;

pub use lambert::{model_fragment_shader, model_vertex_shader};

/// Uniform slot layout shared by the model shaders and `draw_model`.
pub mod slots {
    /// `Mat4`: projection × view.
    pub const VIEW_PROJECTION: usize = 0;
    /// `Mat4`: node world transform.
    pub const MODEL: usize = 1;
    /// `Mat4`: inverse-transpose of `MODEL`.
    pub const NORMAL_MATRIX: usize = 2;
    /// `Vec3`: world-space point light.
    pub const LIGHT_POSITION: usize = 3;
    /// `Vec3`: world-space eye position.
    pub const CAMERA_POSITION: usize = 4;
    /// `Vec4`: base color when no texture is bound.
    pub const DIFFUSE_COLOR: usize = 5;
    /// `Float`: > 0.5 samples texture 0 instead of `DIFFUSE_COLOR`.
    pub const USE_TEXTURE: usize = 6;
}
