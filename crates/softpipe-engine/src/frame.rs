//! Color + depth render target.

/// Depth written by [`Frame::clear`]; farther than any real fragment.
pub const CLEAR_DEPTH: f32 = 10e10;

/// RGBA8 color buffer and `f32` depth buffer of the same size.
///
/// Pixels are row-major, `(0, 0)` first. Both buffers are sized once at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Frame {
    /// Allocates a frame cleared to transparent black at [`CLEAR_DEPTH`].
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; pixels * 4],
            depth: vec![CLEAR_DEPTH; pixels],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Linear pixel index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Raw RGBA bytes, `width * height * 4`.
    #[inline]
    pub fn color(&self) -> &[u8] {
        &self.color
    }

    #[inline]
    pub fn color_mut(&mut self) -> &mut [u8] {
        &mut self.color
    }

    /// Raw depth values, `width * height`.
    #[inline]
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    #[inline]
    pub fn depth_mut(&mut self) -> &mut [f32] {
        &mut self.depth
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y) * 4;
        [self.color[i], self.color[i + 1], self.color[i + 2], self.color[i + 3]]
    }

    #[inline]
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    /// Resets depth to [`CLEAR_DEPTH`] and fills color with `rgba`.
    ///
    /// Channels are scaled by 255 and saturate to `[0, 255]`.
    pub fn clear(&mut self, r: f32, g: f32, b: f32, a: f32) {
        let rgba = [r, g, b, a].map(|c| (c * 255.0).min(255.0) as u8);

        self.depth.fill(CLEAR_DEPTH);
        for px in self.color.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Number of pixels whose color differs from `rgba`.
    pub fn count_not(&self, rgba: [u8; 4]) -> usize {
        self.color.chunks_exact(4).filter(|px| **px != rgba[..]).count()
    }
}
