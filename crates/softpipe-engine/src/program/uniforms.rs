use crate::texture::Texture;
use crate::value::Uniform;

pub const MAX_UNIFORMS: usize = 16;
pub const MAX_TEXTURES: usize = 4;

/// Values constant across one draw.
///
/// Written by the caller between draws; read-only while a draw runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Uniforms<'a> {
    pub uniform: [Uniform; MAX_UNIFORMS],
    pub textures: [Texture<'a>; MAX_TEXTURES],
}

impl<'a> Uniforms<'a> {
    /// # Panics
    /// Panics if `slot >= MAX_UNIFORMS`.
    #[inline]
    pub fn set(&mut self, slot: usize, value: impl Into<Uniform>) {
        self.uniform[slot] = value.into();
    }

    #[inline]
    pub fn get(&self, slot: usize) -> &Uniform {
        &self.uniform[slot]
    }

    #[inline]
    pub fn texture(&self, slot: usize) -> &Texture<'a> {
        &self.textures[slot]
    }
}
