//! # Edge Classification
//!
//! Classifies a directed edge relative to a DFS forest rooted at the source
//! of the most recent BFS run. This is deliberately a hybrid scheme: the
//! tree-edge test uses predecessor identity from the fresh DFS, while the
//! back/forward/cross tests use discovery/finish interval containment. The
//! classification is only meaningful relative to that forest, so without a
//! current BFS source every edge classifies as [`EdgeClass::NoEdge`].

use std::fmt::{Display, Formatter, Result};

use crate::graph::Graph;

/// Result of classifying a directed edge `(u, v)` against the DFS forest
/// rooted at the current BFS source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// `v` is a direct child of `u` in the DFS forest
    Tree,
    /// `v` is a DFS ancestor of `u` (cycle indicator)
    Back,
    /// `v` is a DFS descendant of `u` but not a direct child
    Forward,
    /// `u` and `v` lie in unrelated parts of the forest
    Cross,
    /// `(u, v)` is not an edge of the graph, or no BFS source is current
    NoEdge,
}

impl Display for EdgeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            EdgeClass::Tree => "tree edge",
            EdgeClass::Back => "back edge",
            EdgeClass::Forward => "forward edge",
            EdgeClass::Cross => "cross edge",
            EdgeClass::NoEdge => "no edge",
        };
        write!(f, "{name}")
    }
}

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Classifies the edge `(u, v)`.
    ///
    /// Returns [`EdgeClass::NoEdge`] if `u` is not a vertex, `v` is not in
    /// `u`'s adjacency list, or no BFS source is current (no
    /// [`bfs`](Graph::bfs) has run, or the last one started from an absent
    /// key). Otherwise runs a fresh [`dfs`](Graph::dfs) from the current
    /// BFS source — overwriting all DFS labels but no BFS labels — and
    /// classifies in order: tree, back, forward, cross.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec!["x", "y", "z"],
    ///     vec![1, 2, 3],
    ///     vec![vec!["y", "z"], vec!["z"], vec!["x"]],
    /// );
    /// g.bfs(&"x");
    /// assert_eq!(g.edge_class(&"x", &"y"), EdgeClass::Tree);
    /// assert_eq!(g.edge_class(&"x", &"z"), EdgeClass::Forward);
    /// assert_eq!(g.edge_class(&"z", &"x"), EdgeClass::Back);
    /// ```
    pub fn edge_class(&mut self, u: &K, v: &K) -> EdgeClass {
        if !self.has_edge(u, v) {
            return EdgeClass::NoEdge;
        }

        let Some(source) = self.bfs_source.clone() else {
            return EdgeClass::NoEdge;
        };
        self.dfs(&source);

        let Some(target) = self.get(v) else {
            return EdgeClass::NoEdge;
        };
        if target.dfs_predecessor() == Some(u) {
            return EdgeClass::Tree;
        }
        let (Some(v_disc), Some(v_fin)) = (target.discovery_time(), target.finish_time()) else {
            return EdgeClass::Cross;
        };

        let Some(origin) = self.get(u) else {
            return EdgeClass::NoEdge;
        };
        let (Some(u_disc), Some(u_fin)) = (origin.discovery_time(), origin.finish_time()) else {
            return EdgeClass::Cross;
        };

        if v_disc < u_disc && u_fin < v_fin {
            // v's interval strictly contains u's: v is an ancestor of u
            EdgeClass::Back
        } else if u_disc < v_disc && v_fin < u_fin {
            // u's interval strictly contains v's: v is a descendant of u
            EdgeClass::Forward
        } else {
            EdgeClass::Cross
        }
    }
}
