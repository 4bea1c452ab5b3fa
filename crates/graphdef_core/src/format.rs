// SPDX-License-Identifier: MIT OR Apache-2.0
//! On-disk envelope for graph definition files.

use crate::graph::Graph;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// How a graph file is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Compact binary (bincode)
    #[default]
    Binary,
    /// Pretty-printed RON text
    Text,
}

/// Versioned file contents: the graph name and its nodes in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// File tag, always [`GraphFile::MAGIC`] when written by this crate
    pub magic: [u8; 4],
    /// Format version
    pub version: u32,
    /// Graph name
    pub name: String,
    /// Nodes in insertion order
    pub nodes: Vec<Node>,
}

impl GraphFile {
    /// File tag
    pub const MAGIC: [u8; 4] = *b"GDEF";

    /// Current file format version
    pub const FORMAT_VERSION: u32 = 1;

    /// Snapshot a graph for writing
    pub fn new(graph: &Graph) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::FORMAT_VERSION,
            name: graph.name().to_string(),
            nodes: graph.nodes().cloned().collect(),
        }
    }
}

impl From<&Graph> for GraphFile {
    fn from(graph: &Graph) -> Self {
        Self::new(graph)
    }
}
