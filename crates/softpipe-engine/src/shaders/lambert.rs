use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector2, Vector3, Vector4, Zero};

use crate::program::{InFragment, OutFragment, OutVertex, Uniforms};
use crate::texture::read_texture;
use crate::value::Value;
use crate::vertex::InVertex;

use super::slots;

fn mat4(u: &Uniforms<'_>, slot: usize) -> Matrix4<f32> {
    u.get(slot).as_mat4().unwrap_or_else(Matrix4::identity)
}

/// Attributes: 0 = position (vec3), 1 = normal (vec3), 2 = uv (vec2).
pub fn model_vertex_shader(v: &InVertex, u: &Uniforms<'_>) -> OutVertex {
    let position = v.attributes[0].as_vec3().unwrap_or_else(Vector3::zero);
    let normal = v.attributes[1].as_vec3().unwrap_or_else(Vector3::zero);
    let uv = v.attributes[2].as_vec2().unwrap_or_else(Vector2::zero);

    let world = mat4(u, slots::MODEL) * position.extend(1.0);
    let world_normal = (mat4(u, slots::NORMAL_MATRIX) * normal.extend(0.0)).truncate();

    OutVertex {
        position: mat4(u, slots::VIEW_PROJECTION) * world,
        attributes: [
            Value::Vec3(world.truncate()),
            Value::Vec3(world_normal),
            Value::Vec2(uv),
            Value::Empty,
        ],
    }
}

/// Lambert diffuse: `base.rgb * max(N·L, 0)`, alpha from `base`.
pub fn model_fragment_shader(f: &InFragment, u: &Uniforms<'_>) -> OutFragment {
    let position = f.attributes[0].as_vec3().unwrap_or_else(Vector3::zero);
    let normal = f.attributes[1].as_vec3().unwrap_or_else(Vector3::zero);
    let uv = f.attributes[2].as_vec2().unwrap_or_else(Vector2::zero);

    let use_texture = u.get(slots::USE_TEXTURE).as_float().unwrap_or(0.0) > 0.5;
    let base = if use_texture {
        read_texture(u.texture(0), uv)
    } else {
        u.get(slots::DIFFUSE_COLOR)
            .as_vec4()
            .unwrap_or(Vector4::new(1.0, 1.0, 1.0, 1.0))
    };

    let light = u.get(slots::LIGHT_POSITION).as_vec3().unwrap_or_else(Vector3::zero);
    let to_light = light - position;
    let diffuse = if normal.magnitude2() > 0.0 && to_light.magnitude2() > 0.0 {
        normal.normalize().dot(to_light.normalize()).max(0.0)
    } else {
        0.0
    };

    OutFragment::new(base.x * diffuse, base.y * diffuse, base.z * diffuse, base.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use approx::assert_abs_diff_eq;

    fn fragment_at(position: Vector3<f32>, normal: Vector3<f32>, uv: Vector2<f32>) -> InFragment {
        InFragment {
            coord: Vector3::new(0.5, 0.5, 0.0),
            attributes: [Value::Vec3(position), Value::Vec3(normal), Value::Vec2(uv), Value::Empty],
        }
    }

    // ── vertex stage ──────────────────────────────────────────────────────

    #[test]
    fn vertex_stage_applies_model_then_view_projection() {
        let mut u = Uniforms::default();
        u.set(slots::MODEL, Matrix4::from_translation(Vector3::new(1.0f32, 0.0, 0.0)));
        u.set(slots::VIEW_PROJECTION, Matrix4::from_scale(2.0f32));
        u.set(slots::NORMAL_MATRIX, Matrix4::<f32>::identity());

        let input = InVertex {
            vertex_id: 0,
            attributes: [
                Value::Vec3(Vector3::new(0.0, 1.0, 0.0)),
                Value::Vec3(Vector3::new(0.0, 0.0, 1.0)),
                Value::Vec2(Vector2::new(0.25, 0.75)),
                Value::Empty,
            ],
        };
        let out = model_vertex_shader(&input, &u);

        assert_eq!(out.position, Vector4::new(2.0, 2.0, 0.0, 1.0));
        assert_eq!(out.attributes[0], Value::Vec3(Vector3::new(1.0, 1.0, 0.0)));
        assert_eq!(out.attributes[1], Value::Vec3(Vector3::new(0.0, 0.0, 1.0)));
        assert_eq!(out.attributes[2], Value::Vec2(Vector2::new(0.25, 0.75)));
    }

    #[test]
    fn normals_ignore_translation() {
        let mut u = Uniforms::default();
        u.set(slots::NORMAL_MATRIX, Matrix4::from_translation(Vector3::new(5.0f32, 5.0, 5.0)));
        let input = InVertex {
            attributes: [
                Value::Vec3(Vector3::zero()),
                Value::Vec3(Vector3::new(0.0, 1.0, 0.0)),
                Value::Empty,
                Value::Empty,
            ],
            ..InVertex::default()
        };
        let out = model_vertex_shader(&input, &u);
        assert_eq!(out.attributes[1], Value::Vec3(Vector3::new(0.0, 1.0, 0.0)));
    }

    // ── fragment stage ────────────────────────────────────────────────────

    #[test]
    fn facing_light_gets_full_diffuse_color() {
        let mut u = Uniforms::default();
        u.set(slots::DIFFUSE_COLOR, Vector4::new(0.5f32, 0.25, 1.0, 0.8));
        u.set(slots::LIGHT_POSITION, Vector3::new(0.0f32, 0.0, 5.0));
        let out = model_fragment_shader(&fragment_at(Vector3::zero(), Vector3::new(0.0, 0.0, 3.0), Vector2::zero()), &u);
        assert_abs_diff_eq!(out.color.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(out.color.y, 0.25, epsilon = 1e-6);
        assert_abs_diff_eq!(out.color.z, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out.color.w, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn facing_away_is_black_but_keeps_alpha() {
        let mut u = Uniforms::default();
        u.set(slots::DIFFUSE_COLOR, Vector4::new(1.0f32, 1.0, 1.0, 1.0));
        u.set(slots::LIGHT_POSITION, Vector3::new(0.0f32, 0.0, -5.0));
        let out = model_fragment_shader(&fragment_at(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0), Vector2::zero()), &u);
        assert_eq!(out.color, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn texture_replaces_diffuse_color() {
        let texel = [0u8, 255, 0, 255];
        let mut u = Uniforms::default();
        u.textures[0] = Texture::new(&texel, 1, 1, 4).unwrap();
        u.set(slots::USE_TEXTURE, 1.0f32);
        u.set(slots::DIFFUSE_COLOR, Vector4::new(1.0f32, 0.0, 0.0, 1.0));
        u.set(slots::LIGHT_POSITION, Vector3::new(0.0f32, 0.0, 1.0));
        let out = model_fragment_shader(&fragment_at(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0), Vector2::new(0.3, 0.3)), &u);
        assert_eq!(out.color, Vector4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn missing_normal_is_unlit() {
        let mut u = Uniforms::default();
        u.set(slots::LIGHT_POSITION, Vector3::new(0.0f32, 0.0, 1.0));
        let out = model_fragment_shader(&fragment_at(Vector3::zero(), Vector3::zero(), Vector2::zero()), &u);
        assert_eq!(out.color, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }
}
