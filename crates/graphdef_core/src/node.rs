// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph.

use crate::value::{DataType, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a node, used to wire operation inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef(String);

impl NodeRef {
    /// Name of the referenced node
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeRef {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for NodeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Node> for NodeRef {
    fn from(node: &Node) -> Self {
        Self(node.name.clone())
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a node is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A variable holding its initial value
    Variable {
        /// Initial value
        initial: Value,
    },
    /// An operation over its inputs, tagged with an opaque op kind such as `"mul"`
    Operation {
        /// Op kind tag
        op: String,
    },
}

/// A node instance in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique name within the graph
    pub name: String,
    /// Node kind
    pub kind: NodeKind,
    /// Names of input nodes, in argument order
    pub inputs: Vec<String>,
}

impl Node {
    /// Create a variable node
    pub fn variable(name: impl Into<String>, initial: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Variable { initial: initial.into() },
            inputs: Vec::new(),
        }
    }

    /// Create an operation node
    pub fn operation(name: impl Into<String>, op: impl Into<String>, inputs: &[NodeRef]) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Operation { op: op.into() },
            inputs: inputs.iter().map(|input| input.name().to_owned()).collect(),
        }
    }

    /// Check if this is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, NodeKind::Variable { .. })
    }

    /// Check if this is an operation
    pub fn is_operation(&self) -> bool {
        matches!(self.kind, NodeKind::Operation { .. })
    }

    /// Initial value, for variables
    pub fn value(&self) -> Option<&Value> {
        match &self.kind {
            NodeKind::Variable { initial } => Some(initial),
            NodeKind::Operation { .. } => None,
        }
    }

    /// Data type of the initial value, for variables
    pub fn data_type(&self) -> Option<DataType> {
        self.value().map(Value::data_type)
    }

    /// Op kind tag, for operations
    pub fn op(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Operation { op } => Some(op),
            NodeKind::Variable { .. } => None,
        }
    }

    /// Reference to this node
    pub fn to_ref(&self) -> NodeRef {
        NodeRef::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_node() {
        let node = Node::variable("a", 42.0f32);
        assert!(node.is_variable());
        assert_eq!(node.value(), Some(&Value::Float(42.0)));
        assert_eq!(node.data_type(), Some(DataType::Float));
        assert_eq!(node.op(), None);
        assert!(node.inputs.is_empty());
    }

    #[test]
    fn test_operation_keeps_input_order() {
        let node = Node::operation("c", "mul", &[NodeRef::from("b"), NodeRef::from("a")]);
        assert!(node.is_operation());
        assert_eq!(node.op(), Some("mul"));
        assert_eq!(node.inputs, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(node.value(), None);
    }
}
