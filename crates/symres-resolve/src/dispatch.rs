//! The dispatcher: ranking collected candidates against call argument tags.
//!
//! Ranking is a linear scan of the candidate list in the order the resolver
//! produced it, returning the first signature-exact match. First-registered
//! (and first-reached) wins silently -- that scan order is the documented
//! policy, not an accident; there is no ambiguity detection and no
//! similarity-based ranking. The observer is strictly last-resort: it is
//! consulted only when no exact match exists anywhere in the list.

use std::collections::HashSet;

use tracing::debug;

use symres_core::candidate::Candidate;
use symres_core::graph::SymbolGraph;
use symres_core::id::NodeId;
use symres_core::relation::Relation;
use symres_core::tag::TypeTag;

use crate::error::ResolveError;
use crate::resolver::{resolve, Resolution};

/// Runs a full top-level resolution query and returns the raw [`Resolution`].
///
/// This is the diagnostics hook: callers may inspect the collected candidate
/// list before ranking. It never affects the dispatch result.
pub fn resolve_query<'g>(
    graph: &'g SymbolGraph,
    node: NodeId,
    identifier: &str,
) -> Resolution<'g> {
    let mut visited = HashSet::new();
    let resolution = resolve(graph, node, identifier, Relation::Scope, &mut visited);
    debug!(
        node = %node,
        identifier,
        overloads = resolution.overloads.len(),
        observer = resolution.observer.is_some(),
        "resolution complete"
    );
    resolution
}

/// Resolves and ranks: returns the candidate that should run for a call of
/// `identifier` with arguments tagged `arg_tags`, or the captured observer
/// when nothing matches exactly, or [`ResolveError::UnresolvedCall`].
pub fn dispatch<'g>(
    graph: &'g SymbolGraph,
    node: NodeId,
    identifier: &str,
    arg_tags: &[TypeTag],
) -> Result<&'g Candidate, ResolveError> {
    let resolution = resolve_query(graph, node, identifier);

    if let Some(candidate) = resolution
        .overloads
        .iter()
        .copied()
        .find(|c| c.matches(arg_tags))
    {
        return Ok(candidate);
    }
    if let Some(observer) = resolution.observer {
        return Ok(observer);
    }
    Err(ResolveError::UnresolvedCall {
        identifier: identifier.to_string(),
        arg_tags: arg_tags.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symres_core::id::ImplId;

    #[test]
    fn exact_match_beats_observer() {
        let mut graph = SymbolGraph::new();
        let a = graph.add_node("a");
        graph
            .register_candidate(a, "test", &[TypeTag::Array], false, ImplId(0))
            .unwrap();
        graph.set_observer(a, ImplId(1)).unwrap();

        let candidate = dispatch(&graph, a, "test", &[TypeTag::Array]).unwrap();
        assert_eq!(candidate.imp, ImplId(0));
    }

    #[test]
    fn observer_fires_when_nothing_matches() {
        let mut graph = SymbolGraph::new();
        let a = graph.add_node("a");
        graph
            .register_candidate(a, "test", &[TypeTag::Array], false, ImplId(0))
            .unwrap();
        graph.set_observer(a, ImplId(1)).unwrap();

        let candidate = dispatch(&graph, a, "test", &[TypeTag::Int]).unwrap();
        assert_eq!(candidate.imp, ImplId(1));

        // Unknown identifier degenerates to the same observer path.
        let candidate = dispatch(&graph, a, "missing", &[]).unwrap();
        assert_eq!(candidate.imp, ImplId(1));
    }

    #[test]
    fn first_registered_wins_on_equal_signatures() {
        let mut graph = SymbolGraph::new();
        let a = graph.add_node("a");
        graph
            .register_candidate(a, "test", &[TypeTag::Int], false, ImplId(0))
            .unwrap();
        graph
            .register_candidate(a, "test", &[TypeTag::Int], false, ImplId(1))
            .unwrap();

        let candidate = dispatch(&graph, a, "test", &[TypeTag::Int]).unwrap();
        assert_eq!(candidate.imp, ImplId(0));
    }

    #[test]
    fn unresolved_call_carries_identifier_and_tags() {
        let mut graph = SymbolGraph::new();
        let a = graph.add_node("a");

        let err = dispatch(&graph, a, "test", &[TypeTag::Int]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnresolvedCall {
                identifier: "test".into(),
                arg_tags: vec![TypeTag::Int],
            }
        );
    }

    #[test]
    fn resolve_query_exposes_candidates_without_ranking() {
        let mut graph = SymbolGraph::new();
        let a = graph.add_node("a");
        graph
            .register_candidate(a, "test", &[TypeTag::Int], false, ImplId(0))
            .unwrap();
        graph
            .register_candidate(a, "test", &[TypeTag::Str], false, ImplId(1))
            .unwrap();

        let resolution = resolve_query(&graph, a, "test");
        assert_eq!(resolution.overloads.len(), 2);
        assert!(resolution.observer.is_none());
    }
}
