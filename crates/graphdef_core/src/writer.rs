// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deterministic graph serialization to disk.
//!
//! Output is a function of the graph alone: nodes are written in insertion
//! order and the envelope carries no ids, timestamps or hash-ordered data.
//! Writing the same graph twice yields byte-identical files.
//!
//! Concurrent writers to the same path are not coordinated; the last one wins.

use crate::format::{Encoding, GraphFile};
use crate::graph::Graph;
use std::path::{Component, Path, PathBuf};

/// Writes graphs to definition files
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    encoding: Encoding,
}

impl GraphWriter {
    /// Create a writer using the binary encoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer using the given encoding
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// Encoding used by this writer
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode a graph without touching the filesystem
    pub fn encode(&self, graph: &Graph) -> Result<Vec<u8>, WriteError> {
        let file = GraphFile::new(graph);
        match self.encoding {
            Encoding::Binary => Ok(bincode::serialize(&file)?),
            Encoding::Text => {
                let text = ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::default())?;
                Ok(text.into_bytes())
            }
        }
    }

    /// Write a graph to `directory/filename`, creating the directory if needed
    ///
    /// `filename` must be a single plain file name, so the output always lands
    /// directly inside `directory`. Returns the path that was written.
    pub fn write(
        &self,
        graph: &Graph,
        directory: impl AsRef<Path>,
        filename: impl AsRef<Path>,
    ) -> Result<PathBuf, WriteError> {
        let filename = filename.as_ref();
        let mut components = filename.components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(WriteError::InvalidFileName(filename.to_path_buf()));
        }

        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        let path = directory.join(filename);
        self.write_to(graph, &path)?;
        Ok(path)
    }

    /// Write a graph to an exact path; the parent directory must exist
    pub fn write_to(&self, graph: &Graph, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        let bytes = self.encode(graph)?;
        std::fs::write(path, &bytes)?;

        tracing::debug!(
            "Wrote graph '{}' ({} nodes, {} bytes, {:?}) to {:?}",
            graph.name(),
            graph.len(),
            bytes.len(),
            self.encoding,
            path
        );
        Ok(())
    }
}

/// Error when writing a graph
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary encoding error
    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Text encoding error
    #[error("Text encoding error: {0}")]
    Text(#[from] ron::Error),

    /// File name is not a single plain path component
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(PathBuf),
}
