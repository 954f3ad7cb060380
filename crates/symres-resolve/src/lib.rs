//! Resolution, dispatch, and invocation over a [`symres_core::SymbolGraph`].
//!
//! This crate is the query side of the engine. `symres-core` owns the data
//! model (nodes, relations, candidates); this crate walks it:
//!
//! - [`resolver`] -- the traversal that collects overload candidates and an
//!   observer for one identifier from one start node.
//! - [`dispatch`] -- ranking the collected list against call argument tags.
//! - [`value`] -- runtime values and the classifier that tags them.
//! - [`host`] -- implementation storage and the end-to-end call pipeline.
//!
//! Queries are synchronous and single-threaded: a resolution borrows the
//! graph immutably for its whole duration, and the borrow checker enforces
//! that mutation and queries do not interleave. Callers that share a graph
//! across threads serialize mutation externally.

pub mod dispatch;
pub mod error;
pub mod host;
pub mod resolver;
pub mod value;

pub use dispatch::{dispatch, resolve_query};
pub use error::ResolveError;
pub use host::Host;
pub use resolver::{resolve, Resolution};
pub use value::Value;

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------
