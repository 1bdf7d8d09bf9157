use cgmath::{Matrix4, SquareMatrix, Vector4};

use crate::error::BindError;
use crate::texture::Texture;
use crate::vertex::{AttribDesc, IndexBuffer};

/// Index of a node in [`Model::nodes`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One node of the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Local transform, applied after the parent's.
    pub transform: Matrix4<f32>,
    /// Index into [`Model::meshes`].
    pub mesh: Option<usize>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(transform: Matrix4<f32>) -> Self {
        Self {
            transform,
            mesh: None,
            children: Vec::new(),
        }
    }

    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.mesh = Some(mesh);
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(Matrix4::identity())
    }
}

/// Geometry plus material of one drawable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mesh<'a> {
    pub position: AttribDesc<'a>,
    pub normal: AttribDesc<'a>,
    pub tex_coord: AttribDesc<'a>,
    pub indices: Option<IndexBuffer<'a>>,
    /// Number of vertices (or indices) to draw.
    pub index_count: u32,
    /// Index into [`Model::textures`]; `None` uses `diffuse_color`.
    pub diffuse_texture: Option<usize>,
    pub diffuse_color: Vector4<f32>,
}

impl Default for Mesh<'_> {
    fn default() -> Self {
        Self {
            position: AttribDesc::empty(),
            normal: AttribDesc::empty(),
            tex_coord: AttribDesc::empty(),
            indices: None,
            index_count: 0,
            diffuse_texture: None,
            diffuse_color: Vector4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// Arena of nodes, meshes and textures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model<'a> {
    pub nodes: Vec<Node>,
    pub roots: Vec<NodeId>,
    pub meshes: Vec<Mesh<'a>>,
    pub textures: Vec<Texture<'a>>,
}

impl<'a> Model<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node without attaching it anywhere.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_root(&mut self, node: Node) -> NodeId {
        let id = self.add_node(node);
        self.roots.push(id);
        id
    }

    /// Adds `node` as the last child of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this model.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.add_node(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_mesh(&mut self, mesh: Mesh<'a>) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_texture(&mut self, texture: Texture<'a>) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }

    /// Checks every cross-reference and that each node is reached at most once
    /// from the roots (which also rules out cycles).
    pub fn validate(&self) -> Result<(), BindError> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = Vec::with_capacity(self.roots.len());

        for &root in &self.roots {
            if root.0 >= self.nodes.len() {
                return Err(BindError::MissingRoot(root.0));
            }
            stack.push(root);
        }

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                return Err(BindError::SharedNode(id.0));
            }
            let node = &self.nodes[id.0];

            if let Some(mesh) = node.mesh {
                let Some(m) = self.meshes.get(mesh) else {
                    return Err(BindError::DanglingReference { node: id.0, what: "mesh", index: mesh });
                };
                if let Some(tex) = m.diffuse_texture.filter(|&t| t >= self.textures.len()) {
                    return Err(BindError::DanglingReference { node: id.0, what: "texture", index: tex });
                }
            }

            for &child in &node.children {
                if child.0 >= self.nodes.len() {
                    return Err(BindError::DanglingReference { node: id.0, what: "node", index: child.0 });
                }
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Pre-order traversal yielding each node with its world transform.
    ///
    /// Roots and children are visited in declaration order. Dangling child ids
    /// are skipped; run [`validate`](Self::validate) to reject them instead.
    pub fn walk(&self) -> Walk<'_, 'a> {
        let identity = Matrix4::identity();
        Walk {
            model: self,
            stack: self.roots.iter().rev().map(|&id| (id, identity)).collect(),
        }
    }
}

/// Iterator returned by [`Model::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'m, 'a> {
    model: &'m Model<'a>,
    /// Pending nodes with their parent's world transform.
    stack: Vec<(NodeId, Matrix4<f32>)>,
}

impl Iterator for Walk<'_, '_> {
    type Item = (NodeId, Matrix4<f32>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, parent) = self.stack.pop()?;
            let Some(node) = self.model.nodes.get(id.0) else {
                log::warn!("skipping dangling node {}", id.0);
                continue;
            };

            let world = parent * node.transform;
            self.stack.extend(node.children.iter().rev().map(|&child| (child, world)));
            return Some((id, world));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Vector3, Vector4};

    fn translate(x: f32) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(x, 0.0, 0.0))
    }

    /// root(+1) ─┬─ a(+10) ── c(+100)
    ///           └─ b(+1000)
    /// second(+5)
    fn sample() -> (Model<'static>, [NodeId; 5]) {
        let mut m = Model::new();
        let root = m.add_root(Node::new(translate(1.0)));
        let a = m.add_child(root, Node::new(translate(10.0)));
        let c = m.add_child(a, Node::new(translate(100.0)));
        let b = m.add_child(root, Node::new(translate(1000.0)));
        let second = m.add_root(Node::new(translate(5.0)));
        (m, [root, a, c, b, second])
    }

    fn x_of(m: Matrix4<f32>) -> f32 {
        (m * Vector4::new(0.0, 0.0, 0.0, 1.0)).x
    }

    // ── walk ──────────────────────────────────────────────────────────────

    #[test]
    fn walk_is_preorder() {
        let (m, [root, a, c, b, second]) = sample();
        let order: Vec<NodeId> = m.walk().map(|(id, _)| id).collect();
        assert_eq!(order, vec![root, a, c, b, second]);
    }

    #[test]
    fn walk_accumulates_parent_transforms() {
        let (m, [_, _, c, b, second]) = sample();
        let worlds: std::collections::HashMap<NodeId, f32> = m.walk().map(|(id, w)| (id, x_of(w))).collect();
        assert_eq!(worlds[&c], 111.0);
        assert_eq!(worlds[&b], 1001.0);
        assert_eq!(worlds[&second], 5.0);
    }

    #[test]
    fn walk_can_stop_early() {
        let (m, [root, a, ..]) = sample();
        let first_two: Vec<NodeId> = m.walk().take(2).map(|(id, _)| id).collect();
        assert_eq!(first_two, vec![root, a]);
    }

    #[test]
    fn walk_handles_deep_chains() {
        let mut m = Model::new();
        let mut parent = m.add_root(Node::default());
        for _ in 0..100_000 {
            parent = m.add_child(parent, Node::default());
        }
        assert_eq!(m.walk().count(), 100_001);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn walk_skips_dangling_children() {
        let mut m = Model::new();
        let root = m.add_root(Node::default());
        m.nodes[root.0].children.push(NodeId(42));
        assert_eq!(m.walk().count(), 1);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_reports_missing_mesh() {
        let mut m = Model::new();
        m.add_root(Node::default().with_mesh(3));
        assert_eq!(
            m.validate(),
            Err(BindError::DanglingReference { node: 0, what: "mesh", index: 3 })
        );
    }

    #[test]
    fn validate_reports_missing_texture() {
        let mut m = Model::new();
        let mesh = m.add_mesh(Mesh { diffuse_texture: Some(0), ..Mesh::default() });
        m.add_root(Node::default().with_mesh(mesh));
        assert_eq!(
            m.validate(),
            Err(BindError::DanglingReference { node: 0, what: "texture", index: 0 })
        );
    }

    #[test]
    fn validate_rejects_cycles_and_bad_roots() {
        let mut m = Model::new();
        let root = m.add_root(Node::default());
        let child = m.add_child(root, Node::default());
        m.nodes[child.0].children.push(root);
        assert_eq!(m.validate(), Err(BindError::SharedNode(root.0)));

        let mut m = Model::new();
        m.roots.push(NodeId(7));
        assert_eq!(m.validate(), Err(BindError::MissingRoot(7)));
    }
}
