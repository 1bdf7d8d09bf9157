//! Typed values flowing through the pipeline.
//!
//! Vertex attributes, varyings and uniform slots all carry one of a small set
//! of shapes. The shape tag ([`AttribType`]) is declared up front by the vertex
//! array and the program; the payload ([`Value`], [`Uniform`]) is produced per
//! vertex or per draw.
//!
//! Producers and consumers of a slot must agree on its shape. A mismatch is a
//! caller bug: debug builds assert, release builds yield `Empty`.

mod typed;
mod uniform;

pub use typed::{AttribType, Value};
pub use uniform::Uniform;
