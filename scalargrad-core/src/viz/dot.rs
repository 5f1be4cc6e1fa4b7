use crate::autograd::graph::NodeId;
use crate::value::Value;
use std::collections::HashSet;

/// Renders the subgraph reachable from `root` as a Graphviz DOT document.
///
/// The walk is strictly read-only: it follows `operands` edges, renders
/// each node once (pointer identity decides "already rendered"), and never
/// touches `data` or `grad`. Each value becomes a record node showing its
/// label (falling back to the node id), data and grad; each operation
/// becomes a small intermediate node with edges operand -> op -> result.
pub fn to_dot(root: &Value) -> String {
    let mut out = String::from("digraph {\n    rankdir=LR;\n");
    let mut visited: HashSet<NodeId> = HashSet::new();
    emit_node(root, &mut visited, &mut out);
    out.push_str("}\n");
    out
}

fn emit_node(node: &Value, visited: &mut HashSet<NodeId>, out: &mut String) -> String {
    let name = format!("n{}", node.node_id() as usize);
    if !visited.insert(node.node_id()) {
        return name;
    }

    let display = node.label().unwrap_or_else(|| name.clone());
    out.push_str(&format!(
        "    {} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];\n",
        name,
        display,
        node.data(),
        node.grad()
    ));

    if let Some(op) = node.op() {
        let op_name = format!("{}_op", name);
        out.push_str(&format!("    {} [label=\"{}\"];\n", op_name, op));
        for operand in node.operands() {
            let child = emit_node(&operand, visited, out);
            out.push_str(&format!("    {} -> {};\n", child, op_name));
        }
        out.push_str(&format!("    {} -> {};\n", op_name, name));
    }

    name
}
