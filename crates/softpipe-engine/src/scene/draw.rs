use cgmath::{Matrix, Matrix4, SquareMatrix, Vector3};

use crate::error::BindError;
use crate::pipeline::{self, DrawStats, GpuContext};
use crate::shaders::{self, slots};
use crate::texture::Texture;
use crate::value::AttribType;
use crate::vertex::AttribDesc;

use super::Model;

/// Renders every mesh of `model` with the Lambert model shaders.
///
/// Backface culling is disabled. The model and each mesh's buffers are
/// validated before anything is drawn for them.
pub fn draw_model<'a>(
    ctx: &mut GpuContext<'a>,
    model: &Model<'a>,
    proj: Matrix4<f32>,
    view: Matrix4<f32>,
    light: Vector3<f32>,
    camera: Vector3<f32>,
) -> Result<DrawStats, BindError> {
    model.validate()?;

    ctx.backface_culling = false;
    ctx.prg.vertex_shader = shaders::model_vertex_shader;
    ctx.prg.fragment_shader = shaders::model_fragment_shader;
    ctx.prg.vs2fs = [AttribType::Vec3, AttribType::Vec3, AttribType::Vec2, AttribType::Empty];

    let uniforms = &mut ctx.prg.uniforms;
    uniforms.set(slots::VIEW_PROJECTION, proj * view);
    uniforms.set(slots::LIGHT_POSITION, light);
    uniforms.set(slots::CAMERA_POSITION, camera);

    let mut total = DrawStats::default();
    let mut meshes = 0usize;

    for (id, world) in model.walk() {
        let Some(mesh) = model.nodes[id.0].mesh.map(|m| &model.meshes[m]) else {
            continue;
        };

        let normal_matrix = world.invert().map(|inv| inv.transpose()).unwrap_or_else(|| {
            log::warn!("node {}: singular transform, normals left untransformed", id.0);
            Matrix4::identity()
        });

        let uniforms = &mut ctx.prg.uniforms;
        uniforms.set(slots::MODEL, world);
        uniforms.set(slots::NORMAL_MATRIX, normal_matrix);
        match mesh.diffuse_texture {
            Some(tex) => {
                uniforms.textures[0] = model.textures[tex];
                uniforms.set(slots::USE_TEXTURE, 1.0f32);
            }
            None => {
                uniforms.textures[0] = Texture::default();
                uniforms.set(slots::DIFFUSE_COLOR, mesh.diffuse_color);
                uniforms.set(slots::USE_TEXTURE, 0.0f32);
            }
        }

        ctx.vao.attribs = [mesh.position, mesh.normal, mesh.tex_coord, AttribDesc::empty()];
        ctx.vao.indices = mesh.indices;
        ctx.vao.validate(mesh.index_count)?;

        let stats = pipeline::draw(ctx, mesh.index_count);
        total.triangles += stats.triangles;
        total.fragments += stats.fragments;
        total.written += stats.written;
        meshes += 1;
    }

    log::debug!("draw_model: {meshes} meshes, {} triangles", total.triangles);
    Ok(total)
}
