//! Nearest-neighbour texture sampling.

use cgmath::{Vector2, Vector4};

use crate::error::BindError;

/// Color returned for channels a texture does not carry.
pub const MISSING_CHANNEL_COLOR: Vector4<f32> = Vector4 { x: 1.0, y: 0.0, z: 0.0, w: 1.0 };

/// Borrowed 8-bit texture, `channels` interleaved bytes per texel, row-major.
///
/// The default texture has no pixel buffer and samples as transparent black.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Texture<'a> {
    data: Option<&'a [u8]>,
    width: u32,
    height: u32,
    channels: u32,
}

impl<'a> Texture<'a> {
    /// Wraps a pixel buffer, checking its size against the dimensions.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: u32) -> Result<Self, BindError> {
        if channels > 4 {
            return Err(BindError::TooManyChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() < expected {
            return Err(BindError::TextureTooSmall {
                expected,
                len: data.len(),
            });
        }
        Ok(Self {
            data: Some(data),
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Samples the texel nearest to `uv`, repeating outside `[0, 1)`.
    ///
    /// Channels beyond `channels` keep [`MISSING_CHANNEL_COLOR`].
    pub fn sample(&self, uv: Vector2<f32>) -> Vector4<f32> {
        let data = match self.data {
            Some(data) if self.channels > 0 && self.width > 0 && self.height > 0 => data,
            _ => return Vector4::new(0.0, 0.0, 0.0, 0.0),
        };

        let u = uv.x - uv.x.floor();
        let v = uv.y - uv.y.floor();
        let px = (u * (self.width - 1) as f32 + 0.5) as usize;
        let py = (v * (self.height - 1) as f32 + 0.5) as usize;

        let channels = self.channels as usize;
        let base = (py * self.width as usize + px) * channels;

        let mut color = MISSING_CHANNEL_COLOR;
        for c in 0..channels {
            color[c] = data[base + c] as f32 / 255.0;
        }
        color
    }
}

/// Free-function form of [`Texture::sample`] for shader bodies.
#[inline]
pub fn read_texture(texture: &Texture<'_>, uv: Vector2<f32>) -> Vector4<f32> {
    texture.sample(uv)
}
