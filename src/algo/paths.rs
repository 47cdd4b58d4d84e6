//! # Reachability & Path Reconstruction
//!
//! Both operations are derived from BFS and always re-run it; nothing is
//! cached between calls. Unknown keys yield absence-of-result (`false` or an
//! empty path) rather than errors.

use std::fmt::Display;

use itertools::Itertools;

use crate::graph::Graph;

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Returns *true* iff `v` is reachable from `u`.
    ///
    /// Runs a fresh [`bfs`](Graph::bfs) from `u`, overwriting all BFS labels
    /// as a side effect. Absent `u` or `v` yields *false*.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec![0, 1, 2],
    ///     vec![(), (), ()],
    ///     vec![vec![1], vec![], vec![]],
    /// );
    /// assert!(g.reachable(&0, &1));
    /// assert!(!g.reachable(&0, &2));
    /// ```
    pub fn reachable(&mut self, u: &K, v: &K) -> bool {
        self.bfs(u);
        self.get(v).is_some_and(|target| target.distance().is_some())
    }

    /// Returns the vertices of a shortest path from `u` to `v` (both
    /// inclusive), or an empty vector if `v` is absent or unreachable.
    ///
    /// Runs a fresh [`bfs`](Graph::bfs) from `u` and walks the predecessor
    /// links back from `v`. A broken predecessor chain (a predecessor key
    /// without a vertex) ends the walk early; this cannot happen for graphs
    /// built through [`Graph::new`] but is handled defensively.
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
    /// assert_eq!(g.path(&0, &2), vec![0, 1, 2]);
    /// assert_eq!(g.path(&2, &0), vec![]);
    /// ```
    pub fn path(&mut self, u: &K, v: &K) -> Vec<K> {
        self.bfs(u);

        let reached = self.get(v).is_some_and(|target| target.distance().is_some());
        if !reached {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = v.clone();
        loop {
            path.push(current.clone());
            if current == *u {
                break;
            }
            match self.get(&current).and_then(|w| w.predecessor().cloned()) {
                Some(parent) => current = parent,
                None => break,
            }
        }

        path.reverse();
        path
    }

    /// Renders the shortest path from `u` to `v` as
    /// `key1 -> key2 -> ... -> keyn` (no trailing separator), or an empty
    /// string if there is no path.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new(
    ///     vec!["a", "b"],
    ///     vec![(), ()],
    ///     vec![vec!["b"], vec![]],
    /// );
    /// assert_eq!(g.path_string(&"a", &"b"), "a -> b");
    /// ```
    pub fn path_string(&mut self, u: &K, v: &K) -> String
    where
        K: Display,
    {
        self.path(u, v).iter().join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use crate::testing::*;

    #[test]
    fn reachability() {
        let mut g = cyclic_graph();

        assert!(g.reachable(&"A", &"B"));
        assert!(g.reachable(&"A", &"D"));
        // around the cycle B -> D -> C -> A
        assert!(g.reachable(&"B", &"A"));

        assert!(!g.reachable(&"A", &"E"));
        assert!(!g.reachable(&"A", &"Z"));
        assert!(!g.reachable(&"Z", &"A"));
    }

    #[test]
    fn shortest_path_reconstruction() {
        let mut g = cyclic_graph();

        assert_eq!(g.path(&"A", &"D"), vec!["A", "B", "D"]);
        assert_eq!(g.path(&"B", &"A"), vec!["B", "D", "C", "A"]);
        assert_eq!(g.path(&"A", &"A"), vec!["A"]);
    }

    #[test]
    fn missing_paths_are_empty() {
        let mut g = cyclic_graph();

        assert_eq!(g.path(&"A", &"E"), Vec::<&str>::new());
        assert_eq!(g.path(&"A", &"Z"), Vec::<&str>::new());
        assert_eq!(g.path(&"Z", &"A"), Vec::<&str>::new());
    }

    #[test]
    fn path_rendering() {
        let mut g = cyclic_graph();

        assert_eq!(g.path_string(&"A", &"D"), "A -> B -> D");
        assert_eq!(g.path_string(&"A", &"A"), "A");
        assert_eq!(g.path_string(&"A", &"E"), "");
    }

    #[test]
    fn random_paths_are_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..10 {
            let n = 40;
            let mut g = random_graph(rng, n, 120);

            for _ in 0..20 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);

                let path = g.path(&u, &v);
                // path() just ran bfs(u), so v's distance is current
                let dist = g.get(&v).unwrap().distance();

                assert_eq!(path.is_empty(), dist.is_none());
                assert_eq!(g.reachable(&u, &v), dist.is_some());

                if let Some(d) = dist {
                    assert_eq!(path.len() as u32, d + 1);
                    assert_eq!(path[0], u);
                    assert_eq!(*path.last().unwrap(), v);
                    for pair in path.windows(2) {
                        assert!(g.has_edge(&pair[0], &pair[1]));
                    }
                }
            }
        }
    }
}
