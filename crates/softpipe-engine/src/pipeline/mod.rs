//! Pipeline driver.
//!
//! [`draw`] runs, per independent triangle:
//! 1. vertex assembly + vertex shader for three consecutive invocations
//! 2. homogeneous divide (w retained)
//! 3. viewport transform into the bound frame
//! 4. rasterization, fragment shading, depth test and blend
//!
//! There is no clipping: geometry outside the view volume is rasterized as is
//! and only bounded by the frame itself.

mod assembly;
mod context;
pub mod fragment;
pub mod interp;
mod options;
pub mod raster;

pub use assembly::Triangle;
pub use context::GpuContext;
pub use options::{ClampPolicy, InsideTest, PipelineOptions, LOOSE_TOLERANCE};
pub use raster::{RasterStats, Winding};

use crate::coords::Viewport;

/// Counters for one [`draw`] call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub triangles: u32,
    pub fragments: u64,
    pub written: u64,
}

/// Draws `vertex_count` vertices as an independent triangle list.
///
/// Triangle `k` uses invocations `3k`, `3k + 1`, `3k + 2`. Trailing vertices
/// that do not complete a triangle are ignored.
pub fn draw(ctx: &mut GpuContext<'_>, vertex_count: u32) -> DrawStats {
    if vertex_count % 3 != 0 {
        log::debug!("draw: {} trailing vertices ignored", vertex_count % 3);
    }

    let viewport = Viewport::new(ctx.frame.width() as f32, ctx.frame.height() as f32);
    let mut stats = DrawStats::default();
    if !viewport.is_valid() {
        log::debug!("draw: empty {}x{} frame, nothing to do", ctx.frame.width(), ctx.frame.height());
        return stats;
    }

    for last in (2..vertex_count).step_by(3) {
        let mut tri = Triangle::assemble(&ctx.vao, &ctx.prg, last);
        tri.perspective_divide();
        tri.viewport_transform(viewport);

        let raster = raster::rasterize_triangle(&mut ctx.frame, &ctx.prg, &tri, ctx.backface_culling, &ctx.options);
        stats.triangles += 1;
        stats.fragments += raster.fragments;
        stats.written += raster.written;
    }

    log::debug!(
        "draw: {} triangles, {} fragments, {} written",
        stats.triangles,
        stats.fragments,
        stats.written
    );
    stats
}

/// Clears the bound frame. See [`Frame::clear`](crate::frame::Frame::clear).
pub fn clear(ctx: &mut GpuContext<'_>, r: f32, g: f32, b: f32, a: f32) {
    log::debug!("clear: ({r}, {g}, {b}, {a})");
    ctx.frame.clear(r, g, b, a);
}
