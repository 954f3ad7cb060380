//! Core error types for symres-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of graph construction. Resolution itself never produces a
//! `CoreError`: a query against a missing node is just an empty result.

use thiserror::Error;

use crate::id::NodeId;

/// Errors produced by the symbol graph construction API.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node ID was not found in the graph.
    #[error("node not found: NodeId({id})", id = .id.0)]
    NodeNotFound { id: NodeId },
}
