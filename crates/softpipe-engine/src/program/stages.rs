use cgmath::{Vector3, Vector4};

use crate::value::Value;
use crate::vertex::MAX_ATTRIBUTES;

/// Vertex-shader output.
///
/// `position` is homogeneous clip space. The pipeline later divides x, y, z
/// by w in place and keeps w for perspective correction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutVertex {
    pub position: Vector4<f32>,
    pub attributes: [Value; MAX_ATTRIBUTES],
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            position: Vector4::new(0.0, 0.0, 0.0, 1.0),
            attributes: [Value::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// Fragment-shader input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InFragment {
    /// Pixel center x, y and interpolated depth.
    pub coord: Vector3<f32>,
    pub attributes: [Value; MAX_ATTRIBUTES],
}

/// Fragment-shader output. RGBA, nominally in `[0, 1]` before clamping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutFragment {
    pub color: Vector4<f32>,
}

impl OutFragment {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: Vector4::new(r, g, b, a),
        }
    }
}

impl Default for OutFragment {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
