//! Model hierarchy and its traversal into draw calls.
//!
//! Nodes live in an arena ([`Model::nodes`]) and refer to each other by
//! [`NodeId`]. Traversal uses an explicit stack, so hierarchy depth is only
//! bounded by memory.

mod draw;
mod model;

pub use draw::draw_model;
pub use model::{Mesh, Model, Node, NodeId, Walk};
