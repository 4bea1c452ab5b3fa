// SPDX-License-Identifier: MIT OR Apache-2.0
//! Named computation graphs and their on-disk definition files.
//!
//! This crate provides the pieces needed to produce graph fixtures:
//! - [`GraphBuilder`] appends variables and operations by name
//! - [`Graph`] is the immutable, insertion-ordered result
//! - [`GraphWriter`] encodes a graph deterministically and writes it to disk
//! - [`GraphReader`] loads a written file back and re-checks it
//!
//! ## Architecture
//!
//! Graph invariants are enforced while building:
//! - node names are unique
//! - operation inputs only reference nodes that already exist
//!
//! Insertion order is therefore always a valid topological order, and it is
//! the order nodes are encoded in.

pub mod value;
pub mod node;
pub mod graph;
pub mod format;
pub mod writer;
pub mod reader;

pub use value::{DataType, Value};
pub use node::{Node, NodeKind, NodeRef};
pub use graph::{BuildError, Graph, GraphBuilder};
pub use format::{Encoding, GraphFile};
pub use writer::{GraphWriter, WriteError};
pub use reader::{GraphReader, ReadError};
