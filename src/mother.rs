use bitvec::prelude::*;

use crate::{
    Graph,
    node::Node,
    tracing_support::{debug, info_span},
};

impl Graph {
    /// Finds a mother node, i.e. a node from which every node is reachable.
    ///
    /// Searches from each node not reached by an earlier search and keeps the
    /// start of the last search as the candidate: any mother node reaches
    /// everything, so if one exists the last search started from a node that
    /// reaches it.  A final search from the candidate confirms it.  Returns
    /// `None` if there is no mother node, including for an empty graph.
    pub fn mother_node(&self) -> Option<&Node> {
        let _span = info_span!("mother_node", nodes = self.size()).entered();

        let mut visited = bitvec![0; self.size()];
        let mut candidate = None;
        for id in self.node_ids() {
            if !visited[id.index()] {
                for node in self.dfs(id) {
                    visited.set(node.id().index(), true);
                }
                candidate = Some(id);
            }
        }

        let candidate = candidate?;
        let reached = self.dfs(candidate).count();
        debug!(%candidate, reached, "checked mother node candidate");
        (reached == self.size()).then(|| &self[candidate])
    }

    /// Finds every mother node by searching from each node in turn.  This
    /// is quadratic; prefer [`Self::mother_node`] unless all of them are
    /// needed.
    #[cfg(feature = "pathfinding")]
    pub fn mother_nodes_exhaustive(&self) -> Vec<&Node> {
        self.iter()
            .filter(|node| {
                pathfinding::prelude::bfs_reach(node.id(), |&id| self[id].neighbors()).count()
                    == self.size()
            })
            .collect()
    }
}
