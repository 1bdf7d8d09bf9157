//! Triangle rasterization.
//!
//! Coverage is decided per pixel center with barycentric weights built from
//! 2D edge cross products:
//!
//! - edges `e0 = p1 - p0`, `e1 = p2 - p1`, `e2 = p0 - p2`
//! - the weight of vertex `i` is the area spanned by the edge opposite to it
//!   and the pixel, divided by the unsigned triangle area
//!
//! Weights are orientation-normalized so that interior pixels of either winding
//! get non-negative weights summing to one. Depth is interpolated linearly in
//! screen space; varyings are perspective-corrected in [`super::interp`].

use cgmath::{Vector2, Vector3};

use crate::frame::Frame;
use crate::program::{InFragment, Program};

use super::fragment::{self, FragmentResult};
use super::interp;
use super::options::PipelineOptions;
use super::Triangle;

/// Screen-space winding of a triangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// All successive edge cross products are non-negative. Front facing.
    Clockwise,
    CounterClockwise,
}

/// Per-triangle rasterization counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RasterStats {
    /// Pixels that passed the inside test and ran the fragment shader.
    pub fragments: u64,
    /// Fragments that passed the depth test.
    pub written: u64,
}

/// Screen-space edge vectors embedded in z = 0.
pub fn edges(tri: &Triangle) -> [Vector3<f32>; 3] {
    let p = tri.vertices.map(|v| Vector3::new(v.position.x, v.position.y, 0.0));
    [p[1] - p[0], p[2] - p[1], p[0] - p[2]]
}

pub fn winding(edges: &[Vector3<f32>; 3]) -> Winding {
    let front = (0..3).all(|i| edges[i].cross(edges[(i + 1) % 3]).z >= 0.0);
    if front {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Orientation-normalized barycentric weights of `p`.
///
/// For points inside the triangle all three are non-negative and sum to one,
/// whatever the winding. A degenerate triangle yields non-finite weights.
pub fn barycentric(tri: &Triangle, edges: &[Vector3<f32>; 3], winding: Winding, p: Vector2<f32>) -> [f32; 3] {
    let area = edges[0].cross(edges[1]).z.abs();
    let sign = match winding {
        Winding::Clockwise => 1.0,
        Winding::CounterClockwise => -1.0,
    };

    let [a, b, c] = [0, 1, 2].map(|i| {
        let origin = tri.vertices[i].position;
        let to_p = Vector3::new(p.x - origin.x, p.y - origin.y, 0.0);
        sign * edges[i].cross(to_p).z / area
    });

    // Edge i is opposite vertex (i + 2) % 3.
    [b, c, a]
}

/// Rasterizes one screen-space triangle into `frame`.
///
/// Counter-clockwise triangles are skipped when `backface_culling` is set.
pub fn rasterize_triangle(
    frame: &mut Frame,
    prg: &Program<'_>,
    tri: &Triangle,
    backface_culling: bool,
    options: &PipelineOptions,
) -> RasterStats {
    let mut stats = RasterStats::default();

    let edges = edges(tri);
    let winding = winding(&edges);
    if backface_culling && winding == Winding::CounterClockwise {
        log::trace!("triangle culled (counter-clockwise)");
        return stats;
    }

    if edges[0].cross(edges[1]).z == 0.0 {
        log::trace!("triangle skipped (zero area)");
        return stats;
    }

    let Some((x_range, y_range)) = pixel_bounds(tri, frame.width(), frame.height()) else {
        return stats;
    };

    let [p0, p1, p2] = tri.vertices.map(|v| v.position);

    for y in y_range {
        for x in x_range.clone() {
            let center = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
            let weights = barycentric(tri, &edges, winding, center);
            if !options.inside_test.accepts(weights) {
                continue;
            }

            let [wa, wb, wc] = weights;
            let depth = wa * p0.z + wb * p1.z + wc * p2.z;

            let input = InFragment {
                coord: Vector3::new(center.x, center.y, depth),
                attributes: interp::interpolate_varyings(tri, &prg.vs2fs, weights),
            };
            let output = (prg.fragment_shader)(&input, &prg.uniforms);
            let color = fragment::quantize_color(output.color, options.clamp_policy);

            stats.fragments += 1;
            if fragment::depth_test_and_blend(frame, x, y, color, depth) != FragmentResult::Discarded {
                stats.written += 1;
            }
        }
    }

    stats
}

/// Pixel rows and columns whose centers may fall inside the triangle,
/// clamped to the frame. `None` when nothing overlaps.
fn pixel_bounds(
    tri: &Triangle,
    width: u32,
    height: u32,
) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
    if width == 0 || height == 0 {
        return None;
    }

    let xs = tri.vertices.map(|v| v.position.x);
    let ys = tri.vertices.map(|v| v.position.y);
    let span = |vals: [f32; 3], limit: u32| -> Option<std::ops::Range<u32>> {
        let lo = vals.iter().copied().fold(f32::INFINITY, f32::min).floor();
        let hi = vals.iter().copied().fold(f32::NEG_INFINITY, f32::max).ceil();
        if !(lo <= hi) {
            return None;
        }
        // Clamp in float space: vertices near w = 0 land at huge or infinite
        // coordinates.
        let lo = lo.clamp(0.0, limit as f32) as u32;
        let hi = (hi + 1.0).clamp(0.0, limit as f32) as u32;
        (lo < hi).then(|| lo..hi)
    };

    Some((span(xs, width)?, span(ys, height)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{OutFragment, OutVertex, Uniforms};
    use approx::assert_abs_diff_eq;
    use cgmath::Vector4;

    fn screen_tri(pts: [(f32, f32); 3]) -> Triangle {
        Triangle {
            vertices: pts.map(|(x, y)| OutVertex {
                position: Vector4::new(x, y, 0.5, 1.0),
                ..OutVertex::default()
            }),
        }
    }

    fn white(_: &InFragment, _: &Uniforms<'_>) -> OutFragment {
        OutFragment::new(1.0, 1.0, 1.0, 1.0)
    }

    fn white_program() -> Program<'static> {
        let mut prg = Program::default();
        prg.fragment_shader = white;
        prg
    }

    // Edge cross products are non-negative for this vertex order.
    const FRONT: [(f32, f32); 3] = [(1.0, 1.0), (9.0, 1.0), (1.0, 9.0)];
    const BACK: [(f32, f32); 3] = [(1.0, 1.0), (1.0, 9.0), (9.0, 1.0)];

    // ── winding ───────────────────────────────────────────────────────────

    #[test]
    fn winding_follows_vertex_order() {
        assert_eq!(winding(&edges(&screen_tri(FRONT))), Winding::Clockwise);
        assert_eq!(winding(&edges(&screen_tri(BACK))), Winding::CounterClockwise);
    }

    // ── barycentric ───────────────────────────────────────────────────────

    #[test]
    fn weights_recover_vertices() {
        for pts in [FRONT, BACK] {
            let tri = screen_tri(pts);
            let e = edges(&tri);
            let w = winding(&e);
            for (i, &(x, y)) in pts.iter().enumerate() {
                let l = barycentric(&tri, &e, w, Vector2::new(x, y));
                for (j, &lj) in l.iter().enumerate() {
                    assert_abs_diff_eq!(lj, if i == j { 1.0 } else { 0.0 }, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn interior_weights_sum_to_one_for_both_windings() {
        for pts in [FRONT, BACK] {
            let tri = screen_tri(pts);
            let e = edges(&tri);
            let l = barycentric(&tri, &e, winding(&e), Vector2::new(3.0, 3.0));
            assert!(l.iter().all(|&v| v >= 0.0));
            assert_abs_diff_eq!(l[0] + l[1] + l[2], 1.0, epsilon = 1e-6);
        }
    }

    // ── rasterize_triangle ────────────────────────────────────────────────

    #[test]
    fn culling_skips_counter_clockwise_only() {
        let prg = white_program();
        let opts = PipelineOptions::default();

        let mut f = Frame::new(10, 10);
        let back = rasterize_triangle(&mut f, &prg, &screen_tri(BACK), true, &opts);
        assert_eq!(back.fragments, 0);
        assert_eq!(f.count_not([0, 0, 0, 0]), 0);

        let front = rasterize_triangle(&mut f, &prg, &screen_tri(FRONT), true, &opts);
        assert!(front.fragments > 0);
    }

    #[test]
    fn both_windings_cover_same_pixels_without_culling() {
        let prg = white_program();
        let opts = PipelineOptions::default();

        let mut front = Frame::new(10, 10);
        let mut back = Frame::new(10, 10);
        rasterize_triangle(&mut front, &prg, &screen_tri(FRONT), false, &opts);
        rasterize_triangle(&mut back, &prg, &screen_tri(BACK), false, &opts);

        assert_eq!(front.color(), back.color());
        // Pixels outside the triangle stay untouched.
        assert_eq!(back.pixel(8, 8), [0, 0, 0, 0]);
        assert_eq!(back.pixel(2, 2), [255, 255, 255, 0]);
    }

    #[test]
    fn coverage_approximates_area() {
        let prg = white_program();
        let mut f = Frame::new(10, 10);
        let stats = rasterize_triangle(&mut f, &prg, &screen_tri(FRONT), false, &PipelineOptions::default());
        // Legs of 8 pixels: area 32.
        let covered = stats.fragments as i64;
        assert!((covered - 32).abs() <= 8, "covered {covered}");
        assert_eq!(f.count_not([0, 0, 0, 0]) as u64, stats.fragments);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let prg = white_program();
        let mut f = Frame::new(10, 10);
        let tri = screen_tri([(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)]);
        let stats = rasterize_triangle(&mut f, &prg, &tri, false, &PipelineOptions::default());
        assert_eq!(stats, RasterStats::default());
    }

    #[test]
    fn infinite_extent_is_clamped_to_frame() {
        let prg = white_program();
        let mut f = Frame::new(4, 4);
        let tri = screen_tri([(0.0, 0.0), (f32::INFINITY, 0.0), (0.0, f32::MAX)]);
        let stats = rasterize_triangle(&mut f, &prg, &tri, false, &PipelineOptions::default());
        assert!(stats.fragments <= 16);

        assert_eq!(pixel_bounds(&tri, 4, 4), Some((0..4, 0..4)));
        let left = screen_tri([(f32::NEG_INFINITY, 0.0), (-1e30, 1.0), (-5.0, 2.0)]);
        assert_eq!(pixel_bounds(&left, 4, 4), None);
    }

    #[test]
    fn offscreen_parts_are_dropped() {
        let prg = white_program();
        let mut f = Frame::new(4, 4);
        let tri = screen_tri([(-20.0, -20.0), (40.0, -20.0), (-20.0, 40.0)]);
        let stats = rasterize_triangle(&mut f, &prg, &tri, false, &PipelineOptions::default());
        assert_eq!(stats.fragments, 16);

        let away = screen_tri([(50.0, 50.0), (60.0, 50.0), (50.0, 60.0)]);
        assert_eq!(rasterize_triangle(&mut f, &prg, &away, false, &PipelineOptions::default()).fragments, 0);
    }

    #[test]
    fn strict_edge_rule_matches_loose_inside() {
        let prg = white_program();
        let mut loose = Frame::new(10, 10);
        let mut strict = Frame::new(10, 10);
        rasterize_triangle(&mut loose, &prg, &screen_tri(FRONT), false, &PipelineOptions::default());
        rasterize_triangle(&mut strict, &prg, &screen_tri(FRONT), false, &PipelineOptions::strict());
        assert_eq!(loose.color(), strict.color());
    }
}
