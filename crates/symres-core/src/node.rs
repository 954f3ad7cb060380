//! Symbol nodes: the per-scope candidate registry.
//!
//! A [`SymbolNode`] owns the data local to one graph vertex: its overload
//! table (identifier -> ordered candidates) and its optional observer. The
//! relation edges connecting nodes live on the graph itself, not here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// A vertex in the symbol graph representing a scope, object, or class-like
/// entity.
///
/// The overload table preserves registration order per identifier and is
/// never reordered or deduplicated -- that ordering is the dispatcher's
/// tie-break. A node carries 0 or 1 observer, a fallback handler that is not
/// subject to signature matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolNode {
    /// Human-readable name, for diagnostics only.
    pub name: String,
    overloads: IndexMap<String, Vec<Candidate>>,
    observer: Option<Candidate>,
}

impl SymbolNode {
    /// Creates a node with an empty overload table and no observer.
    pub fn new(name: impl Into<String>) -> Self {
        SymbolNode {
            name: name.into(),
            overloads: IndexMap::new(),
            observer: None,
        }
    }

    /// Appends a candidate to the identifier's overload set, preserving
    /// registration order.
    pub fn push_candidate(&mut self, identifier: impl Into<String>, candidate: Candidate) {
        self.overloads
            .entry(identifier.into())
            .or_default()
            .push(candidate);
    }

    /// Returns the identifier's overload set in registration order, or an
    /// empty slice if the identifier is unknown here.
    pub fn overloads(&self, identifier: &str) -> &[Candidate] {
        self.overloads
            .get(identifier)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if any registered candidate for the identifier is
    /// flagged virtual. This flag, not the relation structure, decides
    /// whether descendant traversal is attempted.
    pub fn has_virtual(&self, identifier: &str) -> bool {
        self.overloads(identifier).iter().any(|c| c.is_virtual)
    }

    /// The node's observer, if one is set.
    pub fn observer(&self) -> Option<&Candidate> {
        self.observer.as_ref()
    }

    /// Sets the observer, replacing any prior one.
    pub fn set_observer(&mut self, candidate: Candidate) {
        self.observer = Some(candidate);
    }

    /// Clears the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }
}
