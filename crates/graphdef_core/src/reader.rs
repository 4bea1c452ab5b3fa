// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading graph definition files back into memory.

use crate::format::{Encoding, GraphFile};
use crate::graph::{BuildError, Graph, GraphBuilder};
use std::path::Path;

/// Reads graph definition files
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphReader {
    encoding: Encoding,
}

impl GraphReader {
    /// Create a reader expecting the binary encoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader expecting the given encoding
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// Load a graph from a file
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Graph, ReadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let graph = self.decode(&bytes)?;
        tracing::debug!("Read graph '{}' ({} nodes) from {:?}", graph.name(), graph.len(), path);
        Ok(graph)
    }

    /// Decode a graph from an in-memory buffer
    ///
    /// Nodes are replayed through a [`GraphBuilder`], so a file that breaks
    /// the graph invariants is rejected.
    pub fn decode(&self, bytes: &[u8]) -> Result<Graph, ReadError> {
        let file: GraphFile = match self.encoding {
            Encoding::Binary => bincode::deserialize(bytes)?,
            Encoding::Text => ron::de::from_bytes(bytes)?,
        };

        if file.magic != GraphFile::MAGIC {
            return Err(ReadError::BadMagic(file.magic));
        }
        if !(1..=GraphFile::FORMAT_VERSION).contains(&file.version) {
            return Err(ReadError::UnsupportedVersion {
                found: file.version,
                supported: GraphFile::FORMAT_VERSION,
            });
        }

        let mut builder = GraphBuilder::new(file.name);
        for node in file.nodes {
            builder.insert(node)?;
        }
        Ok(builder.build())
    }
}

/// Error when reading a graph
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary decoding error
    #[error("Binary decoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Text decoding error
    #[error("Text decoding error: {0}")]
    Text(#[from] ron::error::SpannedError),

    /// Not a graph definition file
    #[error("Not a graph file (magic {0:?})")]
    BadMagic([u8; 4]),

    /// Format version this crate never wrote
    #[error("Unsupported graph file version {found} (supported: 1 to {supported})")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this crate reads
        supported: u32,
    },

    /// Nodes violate the graph invariants
    #[error("Invalid graph: {0}")]
    Invalid(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::writer::GraphWriter;

    fn sample() -> Graph {
        let mut builder = GraphBuilder::new("sample");
        let a = builder.add_variable("a", 42.0f32).unwrap();
        let b = builder.add_variable("b", 69.0f32).unwrap();
        let c = builder.add_operation("c", "mul", &[a, b.clone()]).unwrap();
        builder.add_operation("d", "add", &[c, b]).unwrap();
        builder.add_variable("label", "fixture").unwrap();
        builder.build()
    }

    #[test]
    fn test_read_back_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let graph = sample();
        let path = GraphWriter::new().write(&graph, dir.path(), "sample.pb").unwrap();

        let loaded = GraphReader::new().read(&path).unwrap();
        assert_eq!(loaded, graph);
    }

    #[test]
    fn test_read_back_text() {
        let graph = sample();
        let bytes = GraphWriter::with_encoding(Encoding::Text).encode(&graph).unwrap();
        let loaded = GraphReader::with_encoding(Encoding::Text).decode(&bytes).unwrap();
        assert_eq!(loaded, graph);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = GraphWriter::new().encode(&sample()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            GraphReader::new().decode(&bytes),
            Err(ReadError::BadMagic(_))
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut file = GraphFile::new(&sample());
        file.version = GraphFile::FORMAT_VERSION + 1;
        let bytes = bincode::serialize(&file).unwrap();

        match GraphReader::new().decode(&bytes) {
            Err(ReadError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, GraphFile::FORMAT_VERSION + 1);
                assert_eq!(supported, GraphFile::FORMAT_VERSION);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut file = GraphFile::new(&sample());
        file.nodes.insert(0, Node::operation("early", "mul", &["c".into()]));
        let bytes = bincode::serialize(&file).unwrap();

        assert!(matches!(
            GraphReader::new().decode(&bytes),
            Err(ReadError::Invalid(BuildError::UnknownNode(name))) if name == "c"
        ));
    }

    #[test]
    fn test_zero_version_rejected() {
        let mut file = GraphFile::new(&sample());
        file.version = 0;
        let bytes = bincode::serialize(&file).unwrap();

        assert!(matches!(
            GraphReader::new().decode(&bytes),
            Err(ReadError::UnsupportedVersion { found: 0, .. })
        ));
    }

    #[test]
    fn test_variable_with_inputs_in_file_rejected() {
        let mut file = GraphFile::new(&sample());
        let mut variable = Node::variable("v", 1.0f32);
        variable.inputs.push("a".to_string());
        file.nodes.push(variable);
        let bytes = bincode::serialize(&file).unwrap();

        assert!(matches!(
            GraphReader::new().decode(&bytes),
            Err(ReadError::Invalid(BuildError::VariableWithInputs(name))) if name == "v"
        ));
    }

    #[test]
    fn test_duplicate_in_file_rejected() {
        let mut file = GraphFile::new(&sample());
        file.nodes.push(Node::variable("a", 0.0f32));
        let bytes = bincode::serialize(&file).unwrap();

        assert!(matches!(
            GraphReader::new().decode(&bytes),
            Err(ReadError::Invalid(BuildError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_truncated_file() {
        let bytes = GraphWriter::new().encode(&sample()).unwrap();
        assert!(matches!(
            GraphReader::new().decode(&bytes[..bytes.len() / 2]),
            Err(ReadError::Binary(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GraphReader::new().read(dir.path().join("absent.pb")),
            Err(ReadError::Io(_))
        ));
    }
}
