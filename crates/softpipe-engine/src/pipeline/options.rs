/// Absolute tolerance on the barycentric sum used by
/// [`InsideTest::LooseBarycentric`] and on the near-white check of
/// [`ClampPolicy::SkipNearWhite`].
pub const LOOSE_TOLERANCE: f32 = 0.1;

/// Point-in-triangle rule used by the rasterizer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InsideTest {
    /// All weights non-negative and their sum within [`LOOSE_TOLERANCE`] of 1.
    #[default]
    LooseBarycentric,
    /// Sign test on the edge functions. Pixels exactly on an edge are covered
    /// only when `inclusive` is set.
    EdgeFunction { inclusive: bool },
}

impl InsideTest {
    /// Applies the rule to orientation-normalized weights.
    #[inline]
    pub fn accepts(self, [a, b, c]: [f32; 3]) -> bool {
        match self {
            InsideTest::LooseBarycentric => {
                a >= 0.0 && b >= 0.0 && c >= 0.0 && (a + b + c - 1.0).abs() < LOOSE_TOLERANCE
            }
            InsideTest::EdgeFunction { inclusive: true } => a >= 0.0 && b >= 0.0 && c >= 0.0,
            InsideTest::EdgeFunction { inclusive: false } => a > 0.0 && b > 0.0 && c > 0.0,
        }
    }
}

/// How fragment RGB is brought into `[0, 1]` before quantization.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ClampPolicy {
    /// When any of R, G, B is within [`LOOSE_TOLERANCE`] of 1.0, red is
    /// quantized without clamping. Green and blue are always clamped.
    #[default]
    SkipNearWhite,
    /// Clamp every channel.
    Always,
}

/// Rasterizer behavior switches.
///
/// Defaults: loose barycentric coverage and the near-white clamp.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PipelineOptions {
    /// Coverage rule for pixel centers.
    pub inside_test: InsideTest,

    /// Color clamp applied to fragment-shader output.
    pub clamp_policy: ClampPolicy,
}

impl PipelineOptions {
    /// Strict edge-function coverage with unconditional clamping.
    pub const fn strict() -> Self {
        Self {
            inside_test: InsideTest::EdgeFunction { inclusive: true },
            clamp_policy: ClampPolicy::Always,
        }
    }
}
