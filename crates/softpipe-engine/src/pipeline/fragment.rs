//! Per-fragment operations: color quantization, depth test, blending.

use cgmath::Vector4;

use crate::frame::Frame;

use super::options::{ClampPolicy, LOOSE_TOLERANCE};

/// Outcome of [`depth_test_and_blend`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FragmentResult {
    /// Failed the depth test; nothing written.
    Discarded,
    /// Color blended, depth left as is (alpha ≤ 0.5).
    Blended,
    /// Color blended and depth written.
    BlendedWithDepth,
}

#[inline]
fn near_one(v: f32) -> bool {
    (v - 1.0).abs() < LOOSE_TOLERANCE
}

/// Brings RGB from `[0, 1]` to `[0, 255]` according to `policy`.
///
/// Alpha is passed through untouched; it is only a blend factor.
pub fn quantize_color(color: Vector4<f32>, policy: ClampPolicy) -> Vector4<f32> {
    let clamp = |v: f32| v.clamp(0.0, 1.0);

    let red = match policy {
        ClampPolicy::SkipNearWhite if near_one(color.x) || near_one(color.y) || near_one(color.z) => color.x,
        _ => clamp(color.x),
    };

    Vector4::new(red * 255.0, clamp(color.y) * 255.0, clamp(color.z) * 255.0, color.w)
}

/// Depth test (nearer wins) and `src·α + dst·(1-α)` blend at `(x, y)`.
///
/// `color` is already quantized: RGB in `[0, 255]`, alpha in `[0, 1]`. Depth
/// is written only for fragments with alpha above one half. The frame's own
/// alpha channel is never touched.
pub fn depth_test_and_blend(frame: &mut Frame, x: u32, y: u32, color: Vector4<f32>, depth: f32) -> FragmentResult {
    let i = frame.index(x, y);
    if frame.depth()[i] <= depth {
        return FragmentResult::Discarded;
    }

    let alpha = color.w;
    let result = if alpha > 0.5 {
        frame.depth_mut()[i] = depth;
        FragmentResult::BlendedWithDepth
    } else {
        FragmentResult::Blended
    };

    let px = &mut frame.color_mut()[i * 4..i * 4 + 3];
    for (dst, src) in px.iter_mut().zip([color.x, color.y, color.z]) {
        *dst = (*dst as f32 * (1.0 - alpha) + src * alpha) as u8;
    }
    result
}
