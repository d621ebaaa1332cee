use bitvec::prelude::*;

use crate::{
    Graph,
    edge::NodeId,
    tracing_support::{debug, info_span},
};

impl Graph {
    /// Checks whether the graph contains a directed cycle, including
    /// self-loops.
    ///
    /// Runs a depth-first search from every node not yet visited, tracking
    /// which nodes are on the current search path; an edge back to such a
    /// node closes a cycle.  The search uses an explicit stack, so deep
    /// graphs cannot overflow the call stack.
    pub fn is_cyclic(&self) -> bool {
        let _span = info_span!("is_cyclic", nodes = self.size()).entered();

        let mut visited = bitvec![0; self.size()];
        let mut on_stack = bitvec![0; self.size()];
        // Each entry is a node on the search path and the index of the next
        // edge of that node to follow.
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for root in self.node_ids() {
            if visited[root.index()] {
                continue;
            }
            visited.set(root.index(), true);
            on_stack.set(root.index(), true);
            stack.push((root, 0));

            while let Some((id, next_edge)) = stack.last_mut() {
                let id = *id;
                match self[id].edges().get(*next_edge) {
                    Some(edge) => {
                        *next_edge += 1;
                        let to = edge.to();
                        if on_stack[to.index()] {
                            debug!(from = %id, %to, "found back edge");
                            return true;
                        }
                        if !visited[to.index()] {
                            visited.set(to.index(), true);
                            on_stack.set(to.index(), true);
                            stack.push((to, 0));
                        }
                    }
                    None => {
                        on_stack.set(id.index(), false);
                        stack.pop();
                    }
                }
            }
        }
        false
    }
}
