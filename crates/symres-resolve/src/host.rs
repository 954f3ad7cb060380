//! The invocation host: implementation storage and end-to-end calls.
//!
//! Candidates in the symbol graph carry opaque [`ImplId`] handles so the
//! graph itself stays serializable. The host owns the closures those handles
//! point at and drives the full call pipeline: classify arguments, resolve
//! and rank, then execute the winner with the original values.

use std::fmt;

use tracing::warn;

use symres_core::graph::SymbolGraph;
use symres_core::id::{ImplId, NodeId};

use crate::dispatch::dispatch;
use crate::error::ResolveError;
use crate::value::Value;

type ImplFn = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Owns registered implementations and executes dispatched calls.
#[derive(Default)]
pub struct Host {
    impls: Vec<ImplFn>,
}

impl Host {
    pub fn new() -> Host {
        Host::default()
    }

    /// Registers an implementation and returns the handle to store in
    /// candidates or observers.
    pub fn register<F>(&mut self, f: F) -> ImplId
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        let id = ImplId(self.impls.len() as u32);
        self.impls.push(Box::new(f));
        id
    }

    /// Looks up an implementation by handle.
    pub fn get(&self, id: ImplId) -> Option<&ImplFn> {
        self.impls.get(id.0 as usize)
    }

    /// Classifies `args`, dispatches `identifier` from `node`, and runs the
    /// winning implementation. A failed call leaves the host and graph
    /// untouched; subsequent calls are unaffected.
    pub fn invoke(
        &self,
        graph: &SymbolGraph,
        node: NodeId,
        identifier: &str,
        args: &[Value],
    ) -> Result<Value, ResolveError> {
        let arg_tags: Vec<_> = args.iter().map(Value::tag).collect();
        let candidate = match dispatch(graph, node, identifier, &arg_tags) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(node = %node, identifier, %err, "call did not resolve");
                return Err(err);
            }
        };
        let imp = self
            .get(candidate.imp)
            .ok_or(ResolveError::ImplNotFound { id: candidate.imp })?;
        Ok(imp(args))
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("impls", &self.impls.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symres_core::tag::TypeTag;

    #[test]
    fn invoke_runs_matching_implementation_with_original_values() {
        let mut graph = SymbolGraph::new();
        let mut host = Host::new();
        let a = graph.add_node("a");
        let double = host.register(|args| match args {
            [Value::Int(n)] => Value::Int(n * 2),
            _ => Value::Unit,
        });
        graph
            .register_candidate(a, "double", &[TypeTag::Int], false, double)
            .unwrap();

        let out = host.invoke(&graph, a, "double", &[Value::Int(21)]).unwrap();
        assert_eq!(out, Value::Int(42));
    }

    #[test]
    fn failed_call_does_not_poison_later_calls() {
        let mut graph = SymbolGraph::new();
        let mut host = Host::new();
        let a = graph.add_node("a");
        let hello = host.register(|_| Value::str("hello"));
        graph
            .register_candidate(a, "test", &[TypeTag::Str], false, hello)
            .unwrap();

        let err = host.invoke(&graph, a, "test", &[Value::Int(1)]).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedCall { .. }));

        let out = host.invoke(&graph, a, "test", &[Value::str("x")]).unwrap();
        assert_eq!(out, Value::str("hello"));
    }

    #[test]
    fn unknown_impl_handle_is_reported() {
        let mut graph = SymbolGraph::new();
        let host = Host::new();
        let a = graph.add_node("a");
        graph
            .register_candidate(a, "test", &[], false, ImplId(7))
            .unwrap();

        let err = host.invoke(&graph, a, "test", &[]).unwrap_err();
        assert_eq!(err, ResolveError::ImplNotFound { id: ImplId(7) });
    }

    #[test]
    fn observer_receives_the_unmatched_arguments() {
        let mut graph = SymbolGraph::new();
        let mut host = Host::new();
        let a = graph.add_node("a");
        let echo_len = host.register(|args| Value::Int(args.len() as i64));
        graph.set_observer(a, echo_len).unwrap();

        let out = host
            .invoke(&graph, a, "anything", &[Value::Unit, Value::Unit, Value::Unit])
            .unwrap();
        assert_eq!(out, Value::Int(3));
    }
}
