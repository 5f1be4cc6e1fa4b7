use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes, for every node reachable from this one along operand
    /// edges, the partial derivative of this node's `data` with respect to
    /// that node's `data`, accumulating it in the node's `grad`.
    ///
    /// The pass has three phases:
    /// 1. zero `grad` on every reachable node (so repeated calls are
    ///    idempotent and stale values from earlier passes never leak in),
    /// 2. seed `self.grad = 1.0`,
    /// 3. walk the reachable nodes in reverse depth-first post-order, so a
    ///    node's backward op runs only after every consumer of that node has
    ///    already pushed its contribution. Each backward op runs exactly
    ///    once; the traversal terminates because the graph is finite and
    ///    acyclic by construction.
    ///
    /// Calling this on a leaf is legal and just sets its own `grad` to 1.0.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::BackwardError`] if a backward op reports a
    /// contribution count that does not match its input count.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let order = topological_sort(self);
        log::trace!("backward: {} reachable nodes", order.len());

        for node in &order {
            node.borrow_data_mut().grad = 0.0;
        }
        self.borrow_data_mut().grad = 1.0;

        for node in order.iter().rev() {
            // Snapshot grad and grad_fn so no borrow is held while the
            // backward op reads its inputs.
            let (upstream, grad_fn) = {
                let node_data = node.borrow_data();
                (node_data.grad, node_data.grad_fn.clone())
            };

            if let Some(op) = grad_fn {
                let contributions = op.backward(upstream)?;
                let inputs = op.inputs();
                if contributions.len() != inputs.len() {
                    return Err(ScalarGradError::BackwardError(format!(
                        "backward op returned {} contributions for {} inputs (op: {:?})",
                        contributions.len(),
                        inputs.len(),
                        op
                    )));
                }
                for (input, contribution) in inputs.iter().zip(contributions) {
                    // Accumulate, never assign: a node reached along more
                    // than one path sums the contributions.
                    input.borrow_data_mut().grad += contribution;
                }
            }
        }

        Ok(())
    }

    /// Resets `grad` to zero on every node reachable from this one.
    ///
    /// `backward()` performs this reset itself; the method exists for
    /// harnesses that want to clear gradients without running a pass.
    pub fn zero_grad(&self) {
        for node in topological_sort(self) {
            node.borrow_data_mut().grad = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
