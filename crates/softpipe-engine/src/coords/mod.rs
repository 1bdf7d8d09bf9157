//! Screen-space coordinate helpers.
//!
//! Pixel space:
//! - origin at pixel `(0, 0)`, the first byte of the frame
//! - +X right, +Y towards higher rows
//! - pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`

mod viewport;

pub use viewport::Viewport;
