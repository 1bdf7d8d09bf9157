//! Renders a small lit scene with the software pipeline and writes a PNG.
//!
//! Usage: `softpipe-studio [output.png] [width] [height]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use bytemuck::{Pod, Zeroable};
use cgmath::{Deg, Matrix4, Point3, Vector3, Vector4};
use image::{RgbaImage, imageops};

use softpipe_engine::logging::{LoggingConfig, init_logging};
use softpipe_engine::scene::{Mesh, Model, Node, draw_model};
use softpipe_engine::texture::Texture;
use softpipe_engine::value::AttribType;
use softpipe_engine::vertex::{AttribDesc, IndexBuffer};
use softpipe_engine::{GpuContext, clear};

const DEFAULT_OUTPUT: &str = "softpipe.png";
const DEFAULT_SIZE: u32 = 512;
const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

const STRIDE: usize = size_of::<Vertex>();

const fn vertex(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex { position, normal, uv }
}

static FLOOR: [Vertex; 4] = [
    vertex([-2.0, 0.0, -2.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    vertex([2.0, 0.0, -2.0], [0.0, 1.0, 0.0], [4.0, 0.0]),
    vertex([2.0, 0.0, 2.0], [0.0, 1.0, 0.0], [4.0, 4.0]),
    vertex([-2.0, 0.0, 2.0], [0.0, 1.0, 0.0], [0.0, 4.0]),
];
static FLOOR_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// Non-indexed; each face carries its own normal.
static PYRAMID: [Vertex; 12] = {
    const A: [f32; 3] = [-0.5, 0.0, 0.5];
    const B: [f32; 3] = [0.5, 0.0, 0.5];
    const C: [f32; 3] = [0.5, 0.0, -0.5];
    const D: [f32; 3] = [-0.5, 0.0, -0.5];
    const TOP: [f32; 3] = [0.0, 1.0, 0.0];
    const S: f32 = 0.894_427_2;
    const Y: f32 = 0.447_213_6;
    [
        vertex(A, [0.0, Y, S], [0.0, 0.0]),
        vertex(B, [0.0, Y, S], [0.0, 0.0]),
        vertex(TOP, [0.0, Y, S], [0.0, 0.0]),
        vertex(B, [S, Y, 0.0], [0.0, 0.0]),
        vertex(C, [S, Y, 0.0], [0.0, 0.0]),
        vertex(TOP, [S, Y, 0.0], [0.0, 0.0]),
        vertex(C, [0.0, Y, -S], [0.0, 0.0]),
        vertex(D, [0.0, Y, -S], [0.0, 0.0]),
        vertex(TOP, [0.0, Y, -S], [0.0, 0.0]),
        vertex(D, [-S, Y, 0.0], [0.0, 0.0]),
        vertex(A, [-S, Y, 0.0], [0.0, 0.0]),
        vertex(TOP, [-S, Y, 0.0], [0.0, 0.0]),
    ]
};

/// Renders a small lit scene with the software pipeline and writes a PNG.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    /// Output PNG path.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Frame width in pixels.
    #[arg(default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Frame height in pixels. Defaults to the width.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
}

fn checker_texels() -> Vec<u8> {
    let mut texels = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 3) as usize);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let light = ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0;
            let rgb: [u8; 3] = if light { [220, 220, 210] } else { [60, 70, 90] };
            texels.extend_from_slice(&rgb);
        }
    }
    texels
}

fn interleaved(bytes: &[u8]) -> Result<[AttribDesc<'_>; 3]> {
    Ok([
        AttribDesc::new(AttribType::Vec3, bytes, 0, STRIDE)?,
        AttribDesc::new(AttribType::Vec3, bytes, 12, STRIDE)?,
        AttribDesc::new(AttribType::Vec2, bytes, 24, STRIDE)?,
    ])
}

fn build_model<'a>(
    floor: &'a [u8],
    floor_indices: &'a [u16],
    pyramid: &'a [u8],
    texels: &'a [u8],
) -> Result<Model<'a>> {
    let mut model = Model::new();

    let checker = model.add_texture(
        Texture::new(texels, CHECKER_SIZE, CHECKER_SIZE, 3).context("checker texture")?,
    );

    let [position, normal, tex_coord] = interleaved(floor)?;
    let floor_mesh = model.add_mesh(Mesh {
        position,
        normal,
        tex_coord,
        indices: Some(IndexBuffer::from_u16(floor_indices)),
        index_count: floor_indices.len() as u32,
        diffuse_texture: Some(checker),
        ..Mesh::default()
    });

    let [position, normal, tex_coord] = interleaved(pyramid)?;
    let pyramid_mesh = model.add_mesh(Mesh {
        position,
        normal,
        tex_coord,
        index_count: PYRAMID.len() as u32,
        diffuse_color: Vector4::new(0.9, 0.45, 0.2, 1.0),
        ..Mesh::default()
    });

    let root = model.add_root(Node::default().with_mesh(floor_mesh));
    let stand = model.add_child(root, Node::new(Matrix4::from_translation(Vector3::new(0.6, 0.0, -0.3))));
    model.add_child(
        stand,
        Node::new(Matrix4::from_angle_y(Deg(30.0)) * Matrix4::from_scale(1.2)).with_mesh(pyramid_mesh),
    );
    model.add_child(
        root,
        Node::new(Matrix4::from_translation(Vector3::new(-1.0, 0.0, 0.8)) * Matrix4::from_scale(0.5))
            .with_mesh(pyramid_mesh),
    );

    model.validate().context("demo model")?;
    Ok(model)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = Args::parse();
    let (width, height) = (args.width, args.height.unwrap_or(args.width));

    let floor = bytemuck::cast_slice::<Vertex, u8>(&FLOOR);
    let pyramid = bytemuck::cast_slice::<Vertex, u8>(&PYRAMID);
    let texels = checker_texels();
    let model = build_model(floor, &FLOOR_INDICES, pyramid, &texels)?;

    let mut ctx = GpuContext::new(width, height);
    clear(&mut ctx, 0.1, 0.1, 0.12, 1.0);

    let eye = Point3::new(3.0, 2.5, 4.0);
    let light = Vector3::new(2.0, 4.0, 3.0);
    let aspect = width as f32 / height as f32;
    let proj = cgmath::perspective(Deg(50.0), aspect, 0.1, 100.0);
    let view = Matrix4::look_at_rh(eye, Point3::new(0.0, 0.3, 0.0), Vector3::unit_y());

    let stats = draw_model(&mut ctx, &model, proj, view, light, Vector3::new(eye.x, eye.y, eye.z))
        .context("drawing demo model")?;
    log::info!(
        "rendered {}x{}: {} triangles, {} fragments, {} written",
        width,
        height,
        stats.triangles,
        stats.fragments,
        stats.written
    );

    // Row 0 of the frame is NDC y = -1; images store the top row first.
    let mut img = RgbaImage::from_raw(width, height, ctx.frame.color().to_vec())
        .context("frame buffer does not match image dimensions")?;
    imageops::flip_vertical_in_place(&mut img);
    img.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
