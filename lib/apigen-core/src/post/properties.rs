use std::collections::HashSet;

use tracing::warn;

use crate::error::PostProcessError;
use crate::ir::Model;
use crate::naming::{NamingMode, normalize_model_name};

/// Index of a node inside a [`PropertyArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct PropertyNode {
    /// The model without its properties: those live in `children`.
    model: Model,
    children: Vec<NodeId>,
}

/// Property trees stored as nodes addressed by [`NodeId`].
///
/// Walks over the arena are iterative and guarded by a visited set, so a node
/// reachable through several parents (or through a cycle introduced with
/// [`link`](Self::link)) is rewritten exactly once and the walk terminates.
///
/// # Example
///
/// ```rust
/// use apigen_core::{Model, NamingMode, PropertyArena};
///
/// let mut arena = PropertyArena::default();
/// let root = arena.insert(Model::reference("owner", "User"));
/// arena.rewrite_bases(root, "models", NamingMode::Flat);
///
/// let owner = arena.to_model(root)?;
/// assert_eq!(owner.base, "models.User.User");
/// # Ok::<(), apigen_core::PostProcessError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyArena {
    nodes: Vec<PropertyNode>,
}

impl PropertyArena {
    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena has no node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the model stored at `id`, without its properties.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Model> {
        self.nodes.get(id.0).map(|node| &node.model)
    }

    /// Returns the children of `id`, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Inserts a whole property tree and returns the id of its root.
    pub fn insert(&mut self, model: Model) -> NodeId {
        let (root, properties) = self.push(model);
        let mut pending = properties
            .into_iter()
            .rev()
            .map(|property| (root, property))
            .collect::<Vec<_>>();

        while let Some((parent, property)) = pending.pop() {
            let (id, properties) = self.push(property);
            if let Some(parent) = self.nodes.get_mut(parent.0) {
                parent.children.push(id);
            }
            pending.extend(properties.into_iter().rev().map(|property| (id, property)));
        }

        root
    }

    fn push(&mut self, mut model: Model) -> (NodeId, Vec<Model>) {
        let properties = std::mem::take(&mut model.properties);
        let id = NodeId(self.nodes.len());
        self.nodes.push(PropertyNode {
            model,
            children: Vec::new(),
        });
        (id, properties)
    }

    /// Adds `child` as the last property of `parent`.
    ///
    /// The child is shared, not copied, so this can build DAGs and cycles.
    /// Returns `false` if either node does not belong to the arena.
    pub fn link(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child.0 >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(parent.0) {
            Some(node) => {
                node.children.push(child);
                true
            }
            None => false,
        }
    }

    /// Normalizes the `base` of every node reachable from `root`.
    ///
    /// Each node is rewritten once, whatever the number of paths leading to
    /// it. Returns the number of rewritten nodes.
    pub fn rewrite_bases(&mut self, root: NodeId, package: &str, mode: NamingMode) -> usize {
        let mut visited = HashSet::new();
        let mut stack = vec![root];
        let mut rewritten = 0;

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.nodes.get_mut(id.0) else {
                warn!(%id, "skipping unknown property node");
                continue;
            };
            node.model.base = normalize_model_name(&node.model.base, package, mode);
            rewritten += 1;
            stack.extend(node.children.iter().rev().copied());
        }

        rewritten
    }

    /// Rebuilds the property tree rooted at `root`.
    ///
    /// Shared nodes are copied under every parent. A node found twice on the
    /// same path makes the tree infinite and is reported as
    /// [`PostProcessError::CyclicProperty`].
    pub fn to_model(&self, root: NodeId) -> Result<Model, PostProcessError> {
        enum Visit {
            Enter(NodeId),
            Exit(NodeId),
        }

        let mut stack = vec![Visit::Enter(root)];
        let mut on_path = HashSet::new();
        let mut built = Vec::<Model>::new();

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    let node = self.node(id)?;
                    if !on_path.insert(id) {
                        return Err(PostProcessError::CyclicProperty { node: id });
                    }
                    stack.push(Visit::Exit(id));
                    stack.extend(node.children.iter().rev().map(|child| Visit::Enter(*child)));
                }
                Visit::Exit(id) => {
                    on_path.remove(&id);
                    let node = self.node(id)?;
                    let first_child = built.len().saturating_sub(node.children.len());
                    let mut model = node.model.clone();
                    model.properties = built.split_off(first_child);
                    built.push(model);
                }
            }
        }

        built
            .pop()
            .ok_or(PostProcessError::UnknownPropertyNode { node: root })
    }

    fn node(&self, id: NodeId) -> Result<&PropertyNode, PostProcessError> {
        self.nodes
            .get(id.0)
            .ok_or(PostProcessError::UnknownPropertyNode { node: id })
    }
}

/// Returns a copy of `property` where its `base` and the `base` of every
/// nested property went through the model naming rule.
///
/// `imports`, `enums` and the property names are left as they are; the
/// input is not modified.
pub fn rewrite_property(
    property: &Model,
    package: &str,
    mode: NamingMode,
) -> Result<Model, PostProcessError> {
    let mut arena = PropertyArena::default();
    let root = arena.insert(property.clone());
    arena.rewrite_bases(root, package, mode);
    arena.to_model(root)
}
