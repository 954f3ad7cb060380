//! Error types for the query layer.
//!
//! Resolution semantics has a single failure kind: [`ResolveError::UnresolvedCall`].
//! "Identifier not found" and "no signature matched" are deliberately not
//! distinguished -- an empty candidate list is just the degenerate case of no
//! match. The remaining variant covers API misuse at the host boundary, not
//! resolution outcomes.

use thiserror::Error;

use symres_core::id::ImplId;
use symres_core::tag::TypeTag;

/// Errors surfaced by dispatch and invocation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// After full traversal, no candidate's signature matched the argument
    /// tags and no observer was captured along the path.
    #[error(
        "unresolved call: no overload of `{identifier}` accepts ({tags}) and no observer was captured",
        tags = format_tags(.arg_tags)
    )]
    UnresolvedCall {
        identifier: String,
        arg_tags: Vec<TypeTag>,
    },

    /// A candidate referenced an implementation handle the host never
    /// registered.
    #[error("implementation not found: ImplId({id})", id = .id.0)]
    ImplNotFound { id: ImplId },
}

fn format_tags(tags: &[TypeTag]) -> String {
    tags.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
