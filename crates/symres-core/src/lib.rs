//! symres-core: the symbol graph data model for name and overload resolution.
//!
//! A program's scoping structure is represented as a directed graph of
//! [`SymbolNode`]s connected by named [`Relation`] edges (lexical scope,
//! instance/class ancestry and descent, and optional aliases). Each node owns
//! an ordered overload table of [`Candidate`]s plus at most one observer
//! fallback. The graph is constructed up front by a front end and treated as
//! read-only by the query layer in `symres-resolve`.

pub mod candidate;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod relation;
pub mod tag;

// Re-export commonly used types
pub use candidate::Candidate;
pub use error::CoreError;
pub use graph::SymbolGraph;
pub use id::{ImplId, NodeId};
pub use node::SymbolNode;
pub use relation::Relation;
pub use tag::{Signature, TypeTag};
