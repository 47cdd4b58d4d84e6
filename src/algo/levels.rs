//! # Level-Order Reporter
//!
//! Groups the vertices reached by a BFS by their hop distance. Within a
//! level, vertices appear in **BFS discovery order** (the order they were
//! enqueued), not key order; the engine records that order in `bfs_order`.

use std::fmt::Display;

use itertools::Itertools;

use crate::graph::Graph;

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Runs a fresh [`bfs`](Graph::bfs) from `source` and returns the
    /// reached vertices grouped by distance: `levels[d]` holds the keys at
    /// hop count `d` in BFS discovery order. Unreached vertices do not
    /// appear; if `source` is absent the result is empty.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec![0, 1, 2],
    ///     vec![(), (), ()],
    ///     vec![vec![2, 1], vec![], vec![]],
    /// );
    /// assert_eq!(g.bfs_levels(&0), vec![vec![0], vec![2, 1]]);
    /// ```
    pub fn bfs_levels(&mut self, source: &K) -> Vec<Vec<K>> {
        self.bfs(source);

        let mut levels: Vec<Vec<K>> = Vec::new();
        for key in &self.bfs_order {
            let Some(d) = self.vertices.get(key).and_then(|v| v.distance()) else {
                continue;
            };
            let d = d as usize;
            if levels.len() <= d {
                levels.resize_with(d + 1, Vec::new);
            }
            levels[d].push(key.clone());
        }

        levels
    }

    /// Renders the BFS tree from `source` as one line per level: keys
    /// separated by single spaces, levels joined by newlines, no line for
    /// empty levels and nothing at all for an absent source.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec!["a", "b", "c"],
    ///     vec![(), (), ()],
    ///     vec![vec!["b", "c"], vec![], vec![]],
    /// );
    /// assert_eq!(g.bfs_tree(&"a"), "a\nb c");
    /// ```
    pub fn bfs_tree(&mut self, source: &K) -> String
    where
        K: Display,
    {
        self.bfs_levels(source)
            .iter()
            .map(|level| level.iter().join(" "))
            .join("\n")
    }
}
