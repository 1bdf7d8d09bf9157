use cgmath::{Vector2, Vector3, Vector4};

/// Shape of an attribute or varying slot.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AttribType {
    /// Inert slot.
    #[default]
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl AttribType {
    /// Number of `f32` components carried by this shape.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            AttribType::Empty => 0,
            AttribType::Float => 1,
            AttribType::Vec2 => 2,
            AttribType::Vec3 => 3,
            AttribType::Vec4 => 4,
        }
    }

    /// Size in bytes of one tightly packed element of this shape.
    #[inline]
    pub const fn byte_size(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }
}

/// A vertex attribute or varying value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
}

impl Value {
    /// Shape tag of this value.
    #[inline]
    pub fn ty(&self) -> AttribType {
        match self {
            Value::Empty => AttribType::Empty,
            Value::Float(_) => AttribType::Float,
            Value::Vec2(_) => AttribType::Vec2,
            Value::Vec3(_) => AttribType::Vec3,
            Value::Vec4(_) => AttribType::Vec4,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vector2<f32>> {
        match *self {
            Value::Vec2(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec3(&self) -> Option<Vector3<f32>> {
        match *self {
            Value::Vec3(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec4(&self) -> Option<Vector4<f32>> {
        match *self {
            Value::Vec4(v) => Some(v),
            _ => None,
        }
    }

    /// Builds a value of shape `ty` from a packed run of `f32`s.
    ///
    /// `src` must hold at least `ty.components()` floats.
    pub fn from_components(ty: AttribType, src: &[f32]) -> Value {
        match ty {
            AttribType::Empty => Value::Empty,
            AttribType::Float => Value::Float(src[0]),
            AttribType::Vec2 => Value::Vec2(Vector2::new(src[0], src[1])),
            AttribType::Vec3 => Value::Vec3(Vector3::new(src[0], src[1], src[2])),
            AttribType::Vec4 => Value::Vec4(Vector4::new(src[0], src[1], src[2], src[3])),
        }
    }

    /// Weighted sum `a*w[0] + b*w[1] + c*w[2]` in the declared shape `ty`.
    ///
    /// All three inputs must carry shape `ty`; otherwise the result is `Empty`.
    pub fn blend3(ty: AttribType, [a, b, c]: [&Value; 3], [wa, wb, wc]: [f32; 3]) -> Value {
        match (ty, a, b, c) {
            (AttribType::Empty, ..) => Value::Empty,
            (AttribType::Float, &Value::Float(a), &Value::Float(b), &Value::Float(c)) => {
                Value::Float(a * wa + b * wb + c * wc)
            }
            (AttribType::Vec2, &Value::Vec2(a), &Value::Vec2(b), &Value::Vec2(c)) => {
                Value::Vec2(a * wa + b * wb + c * wc)
            }
            (AttribType::Vec3, &Value::Vec3(a), &Value::Vec3(b), &Value::Vec3(c)) => {
                Value::Vec3(a * wa + b * wb + c * wc)
            }
            (AttribType::Vec4, &Value::Vec4(a), &Value::Vec4(b), &Value::Vec4(c)) => {
                Value::Vec4(a * wa + b * wb + c * wc)
            }
            _ => {
                debug_assert!(
                    false,
                    "varying shape mismatch: declared {ty:?}, got {:?}/{:?}/{:?}",
                    a.ty(),
                    b.ty(),
                    c.ty()
                );
                Value::Empty
            }
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<Vector2<f32>> for Value {
    fn from(v: Vector2<f32>) -> Self {
        Value::Vec2(v)
    }
}

impl From<Vector3<f32>> for Value {
    fn from(v: Vector3<f32>) -> Self {
        Value::Vec3(v)
    }
}

impl From<Vector4<f32>> for Value {
    fn from(v: Vector4<f32>) -> Self {
        Value::Vec4(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shape tags ────────────────────────────────────────────────────────

    #[test]
    fn byte_size_matches_components() {
        assert_eq!(AttribType::Empty.byte_size(), 0);
        assert_eq!(AttribType::Float.byte_size(), 4);
        assert_eq!(AttribType::Vec3.byte_size(), 12);
        assert_eq!(AttribType::Vec4.byte_size(), 16);
    }

    #[test]
    fn ty_reports_variant() {
        assert_eq!(Value::Empty.ty(), AttribType::Empty);
        assert_eq!(Value::from(Vector2::new(1.0, 2.0)).ty(), AttribType::Vec2);
    }

    #[test]
    fn accessors_reject_other_shapes() {
        let v = Value::Vec3(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.as_vec3(), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.as_vec4(), None);
        assert_eq!(v.as_float(), None);
    }

    #[test]
    fn from_components_reads_prefix() {
        let src = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Value::from_components(AttribType::Vec2, &src), Value::Vec2(Vector2::new(1.0, 2.0)));
        assert_eq!(Value::from_components(AttribType::Empty, &src), Value::Empty);
    }

    // ── blend3 ────────────────────────────────────────────────────────────

    #[test]
    fn blend3_weights_each_component() {
        let a = Value::Vec3(Vector3::new(1.0, 0.0, 0.0));
        let b = Value::Vec3(Vector3::new(0.0, 1.0, 0.0));
        let c = Value::Vec3(Vector3::new(0.0, 0.0, 1.0));
        let out = Value::blend3(AttribType::Vec3, [&a, &b, &c], [0.5, 0.25, 0.25]);
        assert_eq!(out, Value::Vec3(Vector3::new(0.5, 0.25, 0.25)));
    }

    #[test]
    fn blend3_empty_declared_skips() {
        let a = Value::Float(1.0);
        assert_eq!(Value::blend3(AttribType::Empty, [&a, &a, &a], [1.0, 0.0, 0.0]), Value::Empty);
    }

    #[test]
    fn blend3_float() {
        let (a, b, c) = (Value::Float(3.0), Value::Float(6.0), Value::Float(9.0));
        let out = Value::blend3(AttribType::Float, [&a, &b, &c], [1.0 / 3.0; 3]);
        let v = out.as_float().unwrap();
        approx::assert_abs_diff_eq!(v, 6.0, epsilon = 1e-5);
    }
}
