//! Perspective-correct varying interpolation.

use crate::value::{AttribType, Value};
use crate::vertex::MAX_ATTRIBUTES;

use super::Triangle;

/// Converts screen-linear weights into perspective-correct ones using each
/// vertex's retained clip-space `w`.
///
/// `s = Σ dᵢ/wᵢ`, `λᵢ = dᵢ / (wᵢ·s)`.
#[inline]
pub fn perspective_weights([d0, d1, d2]: [f32; 3], [w0, w1, w2]: [f32; 3]) -> [f32; 3] {
    let s = d0 / w0 + d1 / w1 + d2 / w2;
    [d0 / (w0 * s), d1 / (w1 * s), d2 / (w2 * s)]
}

/// Interpolates every varying declared non-empty in `vs2fs`.
pub fn interpolate_varyings(
    tri: &Triangle,
    vs2fs: &[AttribType; MAX_ATTRIBUTES],
    screen_weights: [f32; 3],
) -> [Value; MAX_ATTRIBUTES] {
    let lambda = perspective_weights(screen_weights, tri.w());
    let [a, b, c] = &tri.vertices;

    let mut out = [Value::Empty; MAX_ATTRIBUTES];
    for (slot, (dst, &ty)) in out.iter_mut().zip(vs2fs).enumerate() {
        if ty == AttribType::Empty {
            continue;
        }
        *dst = Value::blend3(
            ty,
            [&a.attributes[slot], &b.attributes[slot], &c.attributes[slot]],
            lambda,
        );
    }
    out
}
