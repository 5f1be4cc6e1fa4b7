use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a node: the address of its shared interior data.
/// `Value` handles are cheap clones, so the pointer is the only identity
/// that survives cloning.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a depth-first post-order of the subgraph reachable from `node`.
///
/// In the returned list every node appears after all of its operands, so the
/// *reversed* list is a topological order in which every node appears before
/// its operands — and therefore after every node that consumes it. That is
/// the order `backward()` needs: a node's gradient is fully accumulated
/// before it is pushed further down.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if !visited.insert(node.node_id()) {
        return;
    }
    // Clone the operand list so no borrow is held across the recursion.
    let operands = node.borrow_data().operands.clone();
    for operand in &operands {
        build_topo(operand, visited, sorted);
    }
    log::trace!("build_topo: emitting node {:?}", node.node_id());
    sorted.push(node.clone());
}
