//! kwgraph core - keyword table to node/link graph transformation.
//!
//! Reads a categorized keyword table (one row per primary category entry),
//! normalizes every text field to lowercase ASCII, and builds a graph where
//! each distinct name is exactly one node:
//!
//! - **Parent nodes** are primary categories and accumulate topic history.
//! - **Child nodes** are keywords and related categories that never appear
//!   as a primary category.
//! - **Links** run from a category to each of the row's keywords.
//!
//! # Pipeline
//!
//! ```text
//! workbook (calamine) -> Row records -> GraphBuilder -> Graph -> JSON file
//! ```
//!
//! # Example
//!
//! ```
//! use kwgraph_core::{builder, types::Row};
//!
//! let rows = vec![Row::new("Música", "Arte", "Jazz, Blues", "T1", "X1")];
//! let graph = builder::build(&rows);
//! assert_eq!(graph.nodes.len(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod exporter;
pub mod normalize;
pub mod reader;
pub mod registry;
pub mod types;

pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use registry::NodeRegistry;
pub use types::{Graph, GraphStats, Link, Node, NodeId, NodeType, Row};
