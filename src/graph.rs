/*!
# Graph Container

[`Graph`] owns every [`Vertex`] of the graph in a `BTreeMap` keyed by `K`.

The vertex set and all adjacency lists are fixed at construction from three
parallel collections; afterwards only the transient traversal labels change.
Iteration over the store always happens in ascending key order, which makes
every traversal of this crate deterministic.
*/

use std::collections::BTreeMap;

use crate::vertex::Vertex;

/// A directed graph keyed by `K` with per-vertex payloads of type `D`.
///
/// Structurally immutable after construction: there is no API to insert or
/// remove vertices or edges. The traversal engines
/// ([`bfs`](Graph::bfs) / [`dfs`](Graph::dfs) and everything derived from
/// them) mutate only the per-vertex label blocks, which is why they take
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Graph<K, D> {
    pub(crate) vertices: BTreeMap<K, Vertex<K, D>>,
    /// Source of the most recent BFS run, `None` until a BFS from an
    /// existing key has been performed. The edge classifier reads this
    /// instead of rediscovering the source by scanning for distance 0.
    pub(crate) bfs_source: Option<K>,
    /// Keys in discovery order of the most recent BFS run.
    pub(crate) bfs_order: Vec<K>,
}

impl<K, D> Default for Graph<K, D> {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
            bfs_source: None,
            bfs_order: Vec::new(),
        }
    }
}

impl<K, D> Graph<K, D>
where
    K: Ord + Clone,
{
    /// Creates a graph from three parallel collections: one key, one payload,
    /// and one ordered neighbor-key list per vertex.
    ///
    /// Adjacency entries referencing keys outside `keys` are allowed and are
    /// skipped by every traversal.
    ///
    /// ** Panics if the collections differ in length or a key occurs twice **
    pub fn new(keys: Vec<K>, payloads: Vec<D>, adjacency: Vec<Vec<K>>) -> Self {
        assert_eq!(
            keys.len(),
            payloads.len(),
            "every key needs exactly one payload"
        );
        assert_eq!(
            keys.len(),
            adjacency.len(),
            "every key needs exactly one adjacency list"
        );

        let mut vertices = BTreeMap::new();
        for ((key, payload), adj) in keys.into_iter().zip(payloads).zip(adjacency) {
            let previous = vertices.insert(key.clone(), Vertex::new(key, payload, adj));
            assert!(previous.is_none(), "keys must be unique");
        }

        Self {
            vertices,
            bfs_source: None,
            bfs_order: Vec::new(),
        }
    }

    /// Returns a reference to the vertex with the given key, or `None` if
    /// no such vertex exists. `O(log n)`, never allocates.
    pub fn get(&self, key: &K) -> Option<&Vertex<K, D>> {
        self.vertices.get(key)
    }

    /// Returns *true* if a vertex with the given key exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Returns the number of vertices of the graph.
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of vertices of the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns *true* if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all keys in store order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// Returns an iterator over all vertices in store order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, D>> + '_ {
        self.vertices.values()
    }

    /// Returns *true* if the edge `(u, v)` exists, i.e. `u` is a vertex of
    /// the graph and `v` occurs in its adjacency list. Note that `v` itself
    /// does not have to be a vertex of the graph.
    pub fn has_edge(&self, u: &K, v: &K) -> bool {
        self.get(u).is_some_and(|vertex| vertex.neighbors().contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::cyclic_graph;

    #[test]
    fn construct_and_get() {
        let g = cyclic_graph();

        assert_eq!(g.len(), 5);
        assert!(!g.is_empty());

        assert_eq!(*g.get(&"A").unwrap().payload(), 10);
        assert_eq!(*g.get(&"E").unwrap().payload(), 50);
        assert!(g.get(&"Z").is_none());

        assert_eq!(g.get(&"A").unwrap().neighbors(), ["B", "C"]);
        assert_eq!(g.get(&"A").unwrap().degree(), 2);
        assert_eq!(g.get(&"E").unwrap().degree(), 0);
    }

    #[test]
    fn store_order_is_key_order() {
        let g = Graph::new(
            vec!["c", "a", "b"],
            vec![3, 1, 2],
            vec![vec![], vec![], vec![]],
        );
        assert_eq!(g.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(
            g.vertices().map(|v| *v.payload()).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn edge_queries() {
        let g = cyclic_graph();

        assert!(g.has_edge(&"A", &"B"));
        assert!(g.has_edge(&"D", &"C"));
        assert!(!g.has_edge(&"A", &"D"));
        assert!(!g.has_edge(&"Z", &"A"));
        // dangling targets still count as adjacency entries
        let g2 = Graph::new(vec!["a"], vec![0], vec![vec!["ghost"]]);
        assert!(g2.has_edge(&"a", &"ghost"));
    }

    #[test]
    fn empty_graph() {
        let g: Graph<u32, ()> = Graph::default();
        assert!(g.is_empty());
        assert!(g.get(&0).is_none());
    }

    #[test]
    #[should_panic(expected = "payload")]
    fn mismatched_payloads_panic() {
        let _ = Graph::<&str, u32>::new(vec!["a"], vec![], vec![vec![]]);
    }

    #[test]
    #[should_panic(expected = "adjacency")]
    fn mismatched_adjacency_panics() {
        let _ = Graph::new(vec!["a", "b"], vec![1, 2], vec![vec![]]);
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn duplicate_keys_panic() {
        let _ = Graph::new(vec!["a", "a"], vec![1, 2], vec![vec![], vec![]]);
    }
}
