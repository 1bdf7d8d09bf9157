//! Softpipe engine crate.
//!
//! A CPU rendering pipeline: vertex pulling, primitive assembly, perspective
//! divide, viewport mapping, rasterization with perspective-correct varyings,
//! depth test and alpha blend into an RGBA8 + f32 depth frame.
//!
//! The usual entry points are [`pipeline::GpuContext`], [`pipeline::draw`]
//! and [`scene::draw_model`].

pub mod coords;
pub mod error;
pub mod frame;
pub mod logging;
pub mod pipeline;
pub mod program;
pub mod scene;
pub mod shaders;
pub mod texture;
pub mod value;
pub mod vertex;

pub use error::BindError;
pub use frame::Frame;
pub use pipeline::{clear, draw, DrawStats, GpuContext, PipelineOptions};
