// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixture definitions.
//!
//! A fixture is a small graph described as data, plus the file name it is
//! written under. The built-in set reproduces the multiplication graphs
//! (`c = a * b`) used as test input by graph consumers.

use graphdef_core::{BuildError, Graph, GraphBuilder, NodeRef, Value};
use serde::{Deserialize, Serialize};

/// Op kind tag for the built-in multiplication fixtures
pub const MUL_OP: &str = "mul";

/// A variable in a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Node name
    pub name: String,
    /// Initial value
    pub initial: Value,
}

/// An operation in a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Node name
    pub name: String,
    /// Op kind tag
    pub op: String,
    /// Input node names, in argument order
    pub inputs: Vec<String>,
}

/// A fixture graph and the file it is written to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// Output file name, e.g. `graph.pb`
    pub file_name: String,
    /// Graph name
    pub graph_name: String,
    /// Variables, added first
    pub variables: Vec<VariableSpec>,
    /// Operations, added after all variables
    pub operations: Vec<OperationSpec>,
}

impl FixtureSpec {
    /// `c = mul(a, b)` with the given initial values
    pub fn multiplication(file_name: impl Into<String>, a: f32, b: f32) -> Self {
        Self {
            file_name: file_name.into(),
            graph_name: "multiplication".to_string(),
            variables: vec![
                VariableSpec {
                    name: "a".to_string(),
                    initial: Value::Float(a),
                },
                VariableSpec {
                    name: "b".to_string(),
                    initial: Value::Float(b),
                },
            ],
            operations: vec![OperationSpec {
                name: "c".to_string(),
                op: MUL_OP.to_string(),
                inputs: vec!["a".to_string(), "b".to_string()],
            }],
        }
    }

    /// Build the graph
    pub fn build(&self) -> Result<Graph, BuildError> {
        let mut builder = GraphBuilder::new(self.graph_name.clone());
        for variable in &self.variables {
            builder.add_variable(variable.name.clone(), variable.initial.clone())?;
        }
        for operation in &self.operations {
            let inputs: Vec<NodeRef> = operation
                .inputs
                .iter()
                .map(|name| NodeRef::from(name.as_str()))
                .collect();
            builder.add_operation(operation.name.clone(), operation.op.clone(), &inputs)?;
        }
        Ok(builder.build())
    }
}

/// The built-in fixture set
pub fn builtin_fixtures() -> Vec<FixtureSpec> {
    vec![
        FixtureSpec::multiplication("graph.pb", 42.0, 69.0),
        FixtureSpec::multiplication("multiplication.pb", 0.0, 0.0),
    ]
}
