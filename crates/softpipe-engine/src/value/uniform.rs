use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// A uniform slot: any [`Value`](super::Value) shape plus a 4×4 matrix.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Uniform {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat4(Matrix4<f32>),
}

impl Uniform {
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Uniform::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vector2<f32>> {
        match *self {
            Uniform::Vec2(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec3(&self) -> Option<Vector3<f32>> {
        match *self {
            Uniform::Vec3(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec4(&self) -> Option<Vector4<f32>> {
        match *self {
            Uniform::Vec4(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mat4(&self) -> Option<Matrix4<f32>> {
        match *self {
            Uniform::Mat4(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f32> for Uniform {
    fn from(v: f32) -> Self {
        Uniform::Float(v)
    }
}

impl From<Vector3<f32>> for Uniform {
    fn from(v: Vector3<f32>) -> Self {
        Uniform::Vec3(v)
    }
}

impl From<Vector4<f32>> for Uniform {
    fn from(v: Vector4<f32>) -> Self {
        Uniform::Vec4(v)
    }
}

impl From<Matrix4<f32>> for Uniform {
    fn from(m: Matrix4<f32>) -> Self {
        Uniform::Mat4(m)
    }
}
