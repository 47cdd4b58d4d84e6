//! Shared fixtures and random-graph helpers for the test modules.

use rand::Rng;

use crate::graph::Graph;

/// A(10) -> {B, C}, B(20) -> {D}, C(30) -> {A}, D(40) -> {C}, E(50) isolated.
/// Contains a cycle B -> D -> C -> A and an unreachable vertex.
pub(crate) fn cyclic_graph() -> Graph<&'static str, u32> {
    Graph::new(
        vec!["A", "B", "C", "D", "E"],
        vec![10, 20, 30, 40, 50],
        vec![vec!["B", "C"], vec!["D"], vec!["A"], vec!["C"], vec![]],
    )
}

/// X -> {Y, Z}, Y -> {Z}, Z -> {X}: one tree, one forward, and one back edge
/// relative to a DFS rooted at X.
pub(crate) fn triangle_graph() -> Graph<&'static str, u32> {
    Graph::new(
        vec!["X", "Y", "Z"],
        vec![1, 2, 3],
        vec![vec!["Y", "Z"], vec!["Z"], vec!["X"]],
    )
}

/// Creates a random directed graph on keys `0..n` with at most `m_ub` edges.
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Graph<u32, u32> {
    let keys: Vec<u32> = (0..n).collect();
    let payloads = keys.clone();
    let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); n as usize];

    for _ in 0..m_ub {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if !adjacency[u as usize].contains(&v) {
            adjacency[u as usize].push(v);
        }
    }

    Graph::new(keys, payloads, adjacency)
}

/// Creates a random DAG on keys `0..n` with at most `m_ub` edges, all of them
/// pointing from a smaller key to a larger one.
pub(crate) fn random_dag<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Graph<u32, u32> {
    let keys: Vec<u32> = (0..n).collect();
    let payloads = keys.clone();
    let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); n as usize];

    for _ in 0..m_ub {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let (a, b) = (u.min(v), u.max(v));
        if a != b && !adjacency[a as usize].contains(&b) {
            adjacency[a as usize].push(b);
        }
    }

    Graph::new(keys, payloads, adjacency)
}
