// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure and its builder.

use crate::node::{Node, NodeRef};
use crate::value::Value;
use indexmap::IndexMap;

/// A finished, read-only graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Graph name
    name: String,
    /// Nodes by name, in insertion order
    nodes: IndexMap<String, Node>,
}

impl Graph {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
        }
    }

    /// Graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a node by name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Check if a node with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node names in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Get variable nodes in insertion order
    pub fn variables(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.is_variable())
    }

    /// Get operation nodes in insertion order
    pub fn operations(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.is_operation())
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// IndexMap equality ignores order; graphs compare in insertion order.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.nodes.values().eq(other.nodes.values())
    }
}

/// Incrementally builds a [`Graph`]
///
/// Every `add_*` call checks the graph invariants, so [`GraphBuilder::build`]
/// cannot fail. A rejected call leaves the builder unchanged.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a builder for an empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            graph: Graph::new(name),
        }
    }

    /// Add a variable with its initial value
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        initial_value: impl Into<Value>,
    ) -> Result<NodeRef, BuildError> {
        self.insert(Node::variable(name, initial_value))
    }

    /// Add an operation over previously added nodes
    pub fn add_operation(
        &mut self,
        name: impl Into<String>,
        op_kind: impl Into<String>,
        inputs: &[NodeRef],
    ) -> Result<NodeRef, BuildError> {
        self.insert(Node::operation(name, op_kind, inputs))
    }

    /// Check if a node with this name was already added
    pub fn contains(&self, name: &str) -> bool {
        self.graph.contains(name)
    }

    /// Get the number of nodes added so far
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Check if no nodes were added yet
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Finish building
    pub fn build(self) -> Graph {
        tracing::debug!(
            "Built graph '{}' with {} nodes",
            self.graph.name,
            self.graph.len()
        );
        self.graph
    }

    /// Validate and append a node
    pub(crate) fn insert(&mut self, node: Node) -> Result<NodeRef, BuildError> {
        if node.name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.graph.contains(&node.name) {
            return Err(BuildError::DuplicateName(node.name));
        }
        if node.is_variable() && !node.inputs.is_empty() {
            return Err(BuildError::VariableWithInputs(node.name));
        }
        if let Some(missing) = node.inputs.iter().find(|i| !self.graph.contains(i)) {
            return Err(BuildError::UnknownNode(missing.clone()));
        }

        tracing::debug!("Adding node '{}' ({:?})", node.name, node.kind);
        let node_ref = node.to_ref();
        self.graph.nodes.insert(node.name.clone(), node);
        Ok(node_ref)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new("graph")
    }
}

/// Error when adding a node to a graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A node with this name already exists
    #[error("Duplicate node name: {0}")]
    DuplicateName(String),

    /// An input references a node that is not in the graph
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Node names must not be empty
    #[error("Node name is empty")]
    EmptyName,

    /// Variables take no inputs
    #[error("Variable has inputs: {0}")]
    VariableWithInputs(String),
}
