//! SymbolGraph: the container for symbol nodes and their relation edges.
//!
//! [`SymbolGraph`] is the single entry point for constructing the resolution
//! graph. Nodes live in a `StableGraph` and are addressed by [`NodeId`]
//! handles, so cyclic and self-referential relation shapes need no shared
//! ownership. Each node holds at most one outgoing edge per [`Relation`]
//! kind; setting a relation overwrites any prior edge of that kind.
//!
//! The graph is read-only for the duration of any resolution query. Hosts
//! that interleave late registration with queries must serialize mutation
//! against query execution themselves -- the graph carries no internal
//! synchronization.

use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::CoreError;
use crate::id::{ImplId, NodeId};
use crate::node::SymbolNode;
use crate::relation::Relation;
use crate::tag::TypeTag;

/// The symbol graph: nodes connected by named directed relations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolGraph {
    graph: StableGraph<SymbolNode, Relation, Directed, u32>,
}

impl SymbolGraph {
    /// Creates an empty symbol graph.
    pub fn new() -> Self {
        SymbolGraph {
            graph: StableGraph::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction API
    // -----------------------------------------------------------------------

    /// Adds a node and returns its handle.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        NodeId::from(self.graph.add_node(SymbolNode::new(name)))
    }

    /// Sets `from`'s relation edge of the given kind to point at `to`,
    /// overwriting any prior edge of that kind. Reflexive edges are legal.
    pub fn set_relation(
        &mut self,
        from: NodeId,
        kind: Relation,
        to: NodeId,
    ) -> Result<(), CoreError> {
        if self.graph.node_weight(to.into()).is_none() {
            return Err(CoreError::NodeNotFound { id: to });
        }
        self.clear_relation(from, kind)?;
        self.graph.add_edge(from.into(), to.into(), kind);
        Ok(())
    }

    /// Removes `from`'s relation edge of the given kind, if present.
    pub fn clear_relation(&mut self, from: NodeId, kind: Relation) -> Result<(), CoreError> {
        if self.graph.node_weight(from.into()).is_none() {
            return Err(CoreError::NodeNotFound { id: from });
        }
        let existing = self
            .graph
            .edges_directed(from.into(), Direction::Outgoing)
            .find(|e| *e.weight() == kind)
            .map(|e| e.id());
        if let Some(edge) = existing {
            self.graph.remove_edge(edge);
        }
        Ok(())
    }

    /// Registers an overload candidate on a node. Candidates accumulate in
    /// registration order; nothing is deduplicated.
    pub fn register_candidate(
        &mut self,
        node: NodeId,
        identifier: impl Into<String>,
        signature: &[TypeTag],
        is_virtual: bool,
        imp: ImplId,
    ) -> Result<(), CoreError> {
        let sym = self.node_mut(node)?;
        sym.push_candidate(identifier, Candidate::new(signature, is_virtual, imp));
        Ok(())
    }

    /// Sets a node's observer, replacing any prior one.
    pub fn set_observer(&mut self, node: NodeId, imp: ImplId) -> Result<(), CoreError> {
        let sym = self.node_mut(node)?;
        sym.set_observer(Candidate::new(&[], false, imp));
        Ok(())
    }

    /// Clears a node's observer.
    pub fn clear_observer(&mut self, node: NodeId) -> Result<(), CoreError> {
        let sym = self.node_mut(node)?;
        sym.clear_observer();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read API
    // -----------------------------------------------------------------------

    /// Looks up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&SymbolNode> {
        self.graph.node_weight(id.into())
    }

    /// Returns the target of `from`'s relation edge of the given kind, if
    /// one is attached.
    pub fn relation_target(&self, from: NodeId, kind: Relation) -> Option<NodeId> {
        self.graph
            .edges_directed(from.into(), Direction::Outgoing)
            .find(|e| *e.weight() == kind)
            .map(|e| NodeId::from(e.target()))
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of relation edges.
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all node handles.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices().map(NodeId::from)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SymbolNode, CoreError> {
        self.graph
            .node_weight_mut(id.into())
            .ok_or(CoreError::NodeNotFound { id })
    }
}
