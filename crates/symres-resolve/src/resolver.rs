//! The resolution traversal: collecting overload candidates and an observer
//! for one identifier, starting from one node.
//!
//! The traversal walks the symbol graph under per-relation precedence rules.
//! Which steps run at a node depends on the relation the node was entered
//! through:
//!
//! - `scope` entry (the initial query and outward scope hops): when the node
//!   has virtual candidates for the identifier, descend `sub` then `Sub`
//!   first; then the local check; then `self`, `super`, `Self`, `Super`,
//!   `scope`, in that order.
//! - ancestor entry (`self` / `super` / `Self` / `Super`): local check, then
//!   re-attempt the same relation, climbing as many hops as the chain has.
//! - descendant entry (`sub` / `Sub`): with virtual candidates, keep
//!   descending the same relation before the local check; without them, only
//!   the local check runs -- a non-virtual override seals further descent.
//!
//! The local check appends the node's overloads in registration order. If
//! the node carries an observer, it is captured and the whole traversal
//! stops there; overloads already collected stay eligible for ranking, so an
//! observer never pre-empts a real match found before it.
//!
//! Cycle safety comes from the `visited` set of `(NodeId, Relation)` pairs,
//! which is private to one top-level query. Reflexive self-edges are marked
//! visited and skipped without recursing. Termination is bounded by the
//! finite number of such pairs; the traversal performs no graph mutation.

use std::collections::HashSet;

use tracing::trace;

use symres_core::candidate::Candidate;
use symres_core::graph::SymbolGraph;
use symres_core::id::NodeId;
use symres_core::relation::Relation;

/// The outcome of one resolution traversal: the ordered candidate list plus
/// the observer captured along the path, if any.
///
/// Candidates are borrowed from the graph -- resolution is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'g> {
    /// Collected overloads in traversal order. Deeper descendant
    /// contributions appear before the virtual candidates that triggered the
    /// descent; ancestor contributions follow local ones.
    pub overloads: Vec<&'g Candidate>,
    /// The observer whose node short-circuited the traversal, if one did.
    pub observer: Option<&'g Candidate>,
}

impl<'g> Resolution<'g> {
    fn empty() -> Self {
        Resolution {
            overloads: Vec::new(),
            observer: None,
        }
    }

    /// Returns `true` if the traversal found neither overloads nor an
    /// observer.
    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty() && self.observer.is_none()
    }
}

/// One action in a node's step sequence.
enum Step {
    /// Append local overloads; capture the observer and stop if one is set.
    Local,
    /// Recurse through the node's edge of this kind, if attached.
    Hop(Relation),
}

/// Resolves `identifier` from `node`, entered through `entry`.
///
/// Top-level queries enter through [`Relation::Scope`] with a fresh
/// `visited` set; recursive hops share the set for the whole query.
pub fn resolve<'g>(
    graph: &'g SymbolGraph,
    node: NodeId,
    identifier: &str,
    entry: Relation,
    visited: &mut HashSet<(NodeId, Relation)>,
) -> Resolution<'g> {
    if !visited.insert((node, entry)) {
        return Resolution::empty();
    }
    let Some(sym) = graph.node(node) else {
        return Resolution::empty();
    };
    trace!(node = %node, name = %sym.name, relation = %entry, identifier, "resolving");

    let has_virtual = sym.has_virtual(identifier);
    let mut steps: Vec<Step> = Vec::with_capacity(8);
    match entry {
        Relation::Scope => {
            if has_virtual {
                steps.push(Step::Hop(Relation::InstanceDescendant));
                steps.push(Step::Hop(Relation::ClassDescendant));
            }
            steps.push(Step::Local);
            steps.extend(Relation::ANCESTOR_HOPS.into_iter().map(Step::Hop));
            steps.push(Step::Hop(Relation::Scope));
        }
        r if r.is_descendant() => {
            if has_virtual {
                steps.push(Step::Hop(r));
            }
            steps.push(Step::Local);
        }
        r => {
            steps.push(Step::Local);
            steps.push(Step::Hop(r));
        }
    }

    let mut result = Resolution::empty();
    for step in steps {
        match step {
            Step::Local => {
                result.overloads.extend(sym.overloads(identifier));
                if let Some(observer) = sym.observer() {
                    result.observer = Some(observer);
                    return result;
                }
            }
            Step::Hop(kind) => {
                let Some(target) = graph.relation_target(node, kind) else {
                    continue;
                };
                if target == node {
                    // Reflexive self-edges never recurse.
                    visited.insert((node, kind));
                    continue;
                }
                let sub = resolve(graph, target, identifier, kind, visited);
                result.overloads.extend(sub.overloads);
                if sub.observer.is_some() {
                    result.observer = sub.observer;
                    return result;
                }
            }
        }
    }
    result
}
