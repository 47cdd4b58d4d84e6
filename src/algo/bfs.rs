//! # Breadth-First Search
//!
//! The BFS engine computes minimum hop counts and a shortest-path tree from a
//! source vertex. It owns the BFS label block of every vertex plus the graph's
//! `bfs_source`/`bfs_order` bookkeeping and rewrites all of it on every run.

use std::collections::VecDeque;

use crate::{graph::Graph, vertex::VisitState};

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Runs a breadth-first search from `source`.
    ///
    /// All BFS labels are reset first; if `source` is not a vertex of the
    /// graph the call stops there and every vertex remains unreached.
    /// Otherwise, upon return:
    ///
    /// - [`distance`](crate::vertex::Vertex::distance) holds the minimum
    ///   edge count from `source` for every vertex reachable through
    ///   existing vertices, and `None` for all others,
    /// - [`predecessor`](crate::vertex::Vertex::predecessor) links form a
    ///   shortest-path tree rooted at `source`.
    ///
    /// Adjacency lists are expanded in stored order, so vertices of equal
    /// distance are discovered in adjacency-list order. Neighbor keys
    /// without a corresponding vertex are skipped. Cycles terminate because
    /// discovered vertices are never re-enqueued.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec![0, 1, 2],
    ///     vec![(), (), ()],
    ///     vec![vec![1], vec![2], vec![]],
    /// );
    /// g.bfs(&0);
    /// assert_eq!(g.get(&2).unwrap().distance(), Some(2));
    /// assert_eq!(g.get(&2).unwrap().predecessor(), Some(&1));
    /// ```
    pub fn bfs(&mut self, source: &K) {
        self.reset_bfs_state();

        if !self.vertices.contains_key(source) {
            return;
        }
        let source = source.clone();

        if let Some(s) = self.vertices.get_mut(&source) {
            s.bfs.state = VisitState::InProgress;
            s.bfs.distance = Some(0);
        }
        self.bfs_source = Some(source.clone());
        self.bfs_order.push(source.clone());

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(u_key) = queue.pop_front() {
            let Some(u) = self.vertices.get(&u_key) else {
                continue;
            };
            let Some(u_dist) = u.bfs.distance else {
                continue;
            };
            let u_adj = u.neighbors().to_vec();

            for v_key in u_adj {
                if let Some(v) = self.vertices.get_mut(&v_key) {
                    if v.bfs.state == VisitState::Unvisited {
                        v.bfs.state = VisitState::InProgress;
                        v.bfs.distance = Some(u_dist + 1);
                        v.bfs.predecessor = Some(u_key.clone());
                        self.bfs_order.push(v_key.clone());
                        queue.push_back(v_key);
                    }
                }
            }

            if let Some(u) = self.vertices.get_mut(&u_key) {
                u.bfs.state = VisitState::Done;
            }
        }
    }

    /// Clears the BFS labels of every vertex and the BFS bookkeeping.
    fn reset_bfs_state(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset_bfs();
        }
        self.bfs_source = None;
        self.bfs_order.clear();
    }
}
