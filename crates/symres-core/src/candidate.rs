//! Overload candidates: one registered implementation of an identifier.

use serde::{Deserialize, Serialize};

use crate::id::ImplId;
use crate::tag::{Signature, TypeTag};

/// One registered overload: an ordered parameter signature, a virtual flag,
/// and a handle to the implementation.
///
/// Candidates are immutable once registered. Several candidates may share an
/// identifier (the overload set); their registration order is preserved by
/// the owning node and is the dispatcher's tie-break -- the first exact
/// signature match in traversal order wins, silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Ordered parameter-type signature. Order-sensitive.
    pub signature: Signature,
    /// Whether descendant-relation traversal may seek a more-derived
    /// override of this candidate.
    pub is_virtual: bool,
    /// Handle to the implementation in the invocation host's table.
    pub imp: ImplId,
}

impl Candidate {
    /// Creates a candidate from a signature slice.
    pub fn new(signature: &[TypeTag], is_virtual: bool, imp: ImplId) -> Self {
        Candidate {
            signature: signature.iter().cloned().collect(),
            is_virtual,
            imp,
        }
    }

    /// Returns `true` if the argument tags are sequence-equal to this
    /// candidate's signature. No coercion, no arity defaults, no partial
    /// matches.
    pub fn matches(&self, arg_tags: &[TypeTag]) -> bool {
        self.signature.as_slice() == arg_tags
    }
}
