/// Target size in pixels for the viewport transform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps normalized device x, y in `[-1, 1]` to pixel coordinates.
    ///
    /// `-1` lands on pixel edge 0 and `+1` on `width` / `height`. Y is not
    /// flipped: NDC +y grows towards higher rows.
    #[inline]
    pub fn ndc_to_screen(self, x: f32, y: f32) -> (f32, f32) {
        ((x * 0.5 + 0.5) * self.width, (y * 0.5 + 0.5) * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_frame_edges() {
        let vp = Viewport::new(100.0, 50.0);
        assert_eq!(vp.ndc_to_screen(-1.0, -1.0), (0.0, 0.0));
        assert_eq!(vp.ndc_to_screen(1.0, 1.0), (100.0, 50.0));
        assert_eq!(vp.ndc_to_screen(0.0, 0.0), (50.0, 25.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
