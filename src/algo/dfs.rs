//! # Depth-First Search
//!
//! The DFS engine stamps every vertex of the store with discovery/finish
//! timestamps and records the resulting DFS forest. It owns the DFS label
//! block of every vertex and rewrites it on every run; BFS labels are never
//! touched.
//!
//! The implementation is iterative: an explicit stack of
//! `(key, adjacency, position)` frames replaces the textbook recursion, so
//! arbitrarily deep graphs cannot overflow the call stack. The timestamps are
//! identical to those of the recursive formulation.

use crate::{graph::Graph, vertex::VisitState};

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Runs a depth-first search over the **entire** vertex store.
    ///
    /// All DFS labels are reset first. The search starts at `start` (if it
    /// is a vertex of the graph), then restarts at every still-unvisited
    /// vertex in store order until the whole store is covered, producing a
    /// DFS forest. Upon return every vertex carries
    /// [`discovery_time`](crate::vertex::Vertex::discovery_time),
    /// [`finish_time`](crate::vertex::Vertex::finish_time), and its parent
    /// in the forest via
    /// [`dfs_predecessor`](crate::vertex::Vertex::dfs_predecessor).
    ///
    /// Adjacency lists are expanded in stored order; dangling neighbor keys
    /// are skipped.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec!["x", "y"],
    ///     vec![(), ()],
    ///     vec![vec!["y"], vec![]],
    /// );
    /// g.dfs(&"x");
    /// assert_eq!(g.get(&"x").unwrap().discovery_time(), Some(1));
    /// assert_eq!(g.get(&"y").unwrap().finish_time(), Some(3));
    /// assert_eq!(g.get(&"x").unwrap().finish_time(), Some(4));
    /// ```
    pub fn dfs(&mut self, start: &K) {
        for vertex in self.vertices.values_mut() {
            vertex.reset_dfs();
        }

        let mut time = 0u32;

        if self.vertices.contains_key(start) {
            self.dfs_visit(start.clone(), &mut time);
        }

        let keys: Vec<K> = self.vertices.keys().cloned().collect();
        for key in keys {
            let unvisited = self
                .vertices
                .get(&key)
                .is_some_and(|v| v.dfs.state == VisitState::Unvisited);
            if unvisited {
                self.dfs_visit(key, &mut time);
            }
        }
    }

    /// Explores the tree rooted at `root`, which must be unvisited.
    ///
    /// Each stack frame holds the vertex key, a copy of its adjacency list,
    /// and the position of the next neighbor to inspect; pushing a frame
    /// stands in for the recursive call.
    fn dfs_visit(&mut self, root: K, time: &mut u32) {
        let root_adj = match self.vertices.get_mut(&root) {
            Some(r) => {
                *time += 1;
                r.dfs.state = VisitState::InProgress;
                r.dfs.discovered = Some(*time);
                r.neighbors().to_vec()
            }
            None => return,
        };

        let mut stack: Vec<(K, Vec<K>, usize)> = vec![(root, root_adj, 0)];

        while let Some((u_key, adj, mut pos)) = stack.pop() {
            let mut descended = false;

            while pos < adj.len() {
                let v_key = adj[pos].clone();
                pos += 1;

                if let Some(v) = self.vertices.get_mut(&v_key) {
                    if v.dfs.state == VisitState::Unvisited {
                        *time += 1;
                        v.dfs.state = VisitState::InProgress;
                        v.dfs.discovered = Some(*time);
                        v.dfs.predecessor = Some(u_key.clone());
                        let v_adj = v.neighbors().to_vec();

                        stack.push((u_key.clone(), adj, pos));
                        stack.push((v_key, v_adj, 0));
                        descended = true;
                        break;
                    }
                }
            }

            if !descended {
                *time += 1;
                if let Some(u) = self.vertices.get_mut(&u_key) {
                    u.dfs.state = VisitState::Done;
                    u.dfs.finished = Some(*time);
                }
            }
        }
    }
}
