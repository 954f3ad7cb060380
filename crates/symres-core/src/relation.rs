//! Relation kinds: the named directed edges between symbol nodes.
//!
//! Every edge in the symbol graph carries one [`Relation`] tag, and a node
//! holds at most one outgoing edge per kind. Absence of an edge is a normal,
//! first-class state -- the alias kinds in particular are extension points a
//! graph builder may or may not attach.
//!
//! The `Display` forms use the surface-syntax names of the source language
//! (`scope`, `super`, `Super`, `sub`, `Sub`, `self`, `Self`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed edge kind in the symbol graph.
///
/// Relations are not required to form a tree: cycles, shared targets, and
/// reflexive self-edges are all legal graph shapes. The resolver's visited
/// set keys on `(NodeId, Relation)` pairs, which bounds any traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// Lexical parent ("scope"). Also the entry relation of a top-level query.
    Scope,
    /// Instance ancestor ("super"): the object chain upward.
    InstanceAncestor,
    /// Class ancestor ("Super"): the inheritance chain upward.
    ClassAncestor,
    /// Instance descendant ("sub"): the object chain downward, walked for
    /// virtual dispatch.
    InstanceDescendant,
    /// Class descendant ("Sub"): the inheritance chain downward, walked for
    /// virtual dispatch.
    ClassDescendant,
    /// Optional alias ("self"). Not populated by default; may point anywhere,
    /// including back at the owning node.
    AliasSelf,
    /// Optional alias ("Self"). Same rules as [`Relation::AliasSelf`].
    AliasSelfType,
}

impl Relation {
    /// All relation kinds, in declaration order.
    pub const ALL: [Relation; 7] = [
        Relation::Scope,
        Relation::InstanceAncestor,
        Relation::ClassAncestor,
        Relation::InstanceDescendant,
        Relation::ClassDescendant,
        Relation::AliasSelf,
        Relation::AliasSelfType,
    ];

    /// The outward hops a scope-entry query attempts after the local check,
    /// in precedence order. Each is climbed repeatedly once entered.
    pub const ANCESTOR_HOPS: [Relation; 4] = [
        Relation::AliasSelf,
        Relation::InstanceAncestor,
        Relation::AliasSelfType,
        Relation::ClassAncestor,
    ];

    /// Returns `true` for the downward-dispatch kinds (`sub` / `Sub`).
    pub fn is_descendant(self) -> bool {
        matches!(
            self,
            Relation::InstanceDescendant | Relation::ClassDescendant
        )
    }

    /// Returns `true` for the outward/ancestor hop kinds
    /// (`self` / `super` / `Self` / `Super`).
    pub fn is_ancestor_hop(self) -> bool {
        Relation::ANCESTOR_HOPS.contains(&self)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::Scope => "scope",
            Relation::InstanceAncestor => "super",
            Relation::ClassAncestor => "Super",
            Relation::InstanceDescendant => "sub",
            Relation::ClassDescendant => "Sub",
            Relation::AliasSelf => "self",
            Relation::AliasSelfType => "Self",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_surface_names() {
        assert_eq!(Relation::Scope.to_string(), "scope");
        assert_eq!(Relation::InstanceAncestor.to_string(), "super");
        assert_eq!(Relation::ClassAncestor.to_string(), "Super");
        assert_eq!(Relation::InstanceDescendant.to_string(), "sub");
        assert_eq!(Relation::ClassDescendant.to_string(), "Sub");
        assert_eq!(Relation::AliasSelf.to_string(), "self");
        assert_eq!(Relation::AliasSelfType.to_string(), "Self");
    }

    #[test]
    fn kind_predicates() {
        assert!(Relation::InstanceDescendant.is_descendant());
        assert!(Relation::ClassDescendant.is_descendant());
        assert!(!Relation::Scope.is_descendant());

        assert!(Relation::AliasSelf.is_ancestor_hop());
        assert!(Relation::ClassAncestor.is_ancestor_hop());
        assert!(!Relation::Scope.is_ancestor_hop());
        assert!(!Relation::InstanceDescendant.is_ancestor_hop());
    }

    #[test]
    fn ancestor_hops_precedence_order() {
        // The order here is the resolver's contract: self, super, Self, Super.
        assert_eq!(
            Relation::ANCESTOR_HOPS,
            [
                Relation::AliasSelf,
                Relation::InstanceAncestor,
                Relation::AliasSelfType,
                Relation::ClassAncestor,
            ]
        );
    }

    #[test]
    fn serde_roundtrip() {
        for relation in Relation::ALL {
            let json = serde_json::to_string(&relation).unwrap();
            let back: Relation = serde_json::from_str(&json).unwrap();
            assert_eq!(relation, back);
        }
    }
}
