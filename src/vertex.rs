/*!
# Vertex Representation

A [`Vertex`] bundles the immutable part of a graph node (key, payload, ordered
adjacency list) with the transient labels written by the traversal engines.

BFS and DFS each own a private label block ([`BfsLabels`] / [`DfsLabels`]).
Sharing a single visited-flag between the two algorithms is a classic source of
corruption (one run invalidating the invariants the other relies on), so neither
block is ever read or written by the other algorithm.
*/

/// Visit state of a vertex during a traversal, in the classic
/// white/gray/black coloring scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not yet discovered (white)
    #[default]
    Unvisited,
    /// Discovered but not fully processed (gray)
    InProgress,
    /// Fully processed (black)
    Done,
}

/// Labels written by the BFS engine. Overwritten in full on every BFS run.
#[derive(Debug, Clone)]
pub(crate) struct BfsLabels<K> {
    pub(crate) state: VisitState,
    /// Hop count from the last BFS source; `None` means unreached
    pub(crate) distance: Option<u32>,
    /// Parent in the shortest-path tree of the last BFS run
    pub(crate) predecessor: Option<K>,
}

impl<K> Default for BfsLabels<K> {
    fn default() -> Self {
        Self {
            state: VisitState::Unvisited,
            distance: None,
            predecessor: None,
        }
    }
}

/// Labels written by the DFS engine. Overwritten in full on every DFS run.
#[derive(Debug, Clone)]
pub(crate) struct DfsLabels<K> {
    pub(crate) state: VisitState,
    /// Parent in the DFS forest of the last DFS run
    pub(crate) predecessor: Option<K>,
    /// Pre-visit timestamp
    pub(crate) discovered: Option<u32>,
    /// Post-visit timestamp
    pub(crate) finished: Option<u32>,
}

impl<K> Default for DfsLabels<K> {
    fn default() -> Self {
        Self {
            state: VisitState::Unvisited,
            predecessor: None,
            discovered: None,
            finished: None,
        }
    }
}

/// A single vertex of a [`Graph`](crate::graph::Graph).
///
/// Key, payload, and adjacency list are fixed at construction. The traversal
/// labels are transient: each is owned by one engine and rewritten on every
/// run of that engine.
#[derive(Debug, Clone)]
pub struct Vertex<K, D> {
    key: K,
    payload: D,
    /// Neighbor keys in input order. Order is semantically significant:
    /// it drives traversal tie-breaks.
    adj: Vec<K>,
    pub(crate) bfs: BfsLabels<K>,
    pub(crate) dfs: DfsLabels<K>,
}

impl<K, D> Vertex<K, D> {
    pub(crate) fn new(key: K, payload: D, adj: Vec<K>) -> Self {
        Self {
            key,
            payload,
            adj,
            bfs: BfsLabels::default(),
            dfs: DfsLabels::default(),
        }
    }

    /// Returns the key identifying this vertex.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the payload attached to this vertex.
    pub fn payload(&self) -> &D {
        &self.payload
    }

    /// Returns the adjacency list in stored order.
    ///
    /// Entries may reference keys absent from the graph; traversals skip those.
    pub fn neighbors(&self) -> &[K] {
        &self.adj
    }

    /// Returns the number of outgoing adjacency entries (dangling ones included).
    pub fn degree(&self) -> usize {
        self.adj.len()
    }

    /// Returns the hop count from the source of the most recent
    /// [`bfs`](crate::graph::Graph::bfs) run, or `None` if this vertex
    /// was not reached by it.
    pub fn distance(&self) -> Option<u32> {
        self.bfs.distance
    }

    /// Returns the parent of this vertex in the shortest-path tree of the
    /// most recent [`bfs`](crate::graph::Graph::bfs) run.
    pub fn predecessor(&self) -> Option<&K> {
        self.bfs.predecessor.as_ref()
    }

    /// Returns the pre-visit timestamp of the most recent
    /// [`dfs`](crate::graph::Graph::dfs) run.
    pub fn discovery_time(&self) -> Option<u32> {
        self.dfs.discovered
    }

    /// Returns the post-visit timestamp of the most recent
    /// [`dfs`](crate::graph::Graph::dfs) run.
    pub fn finish_time(&self) -> Option<u32> {
        self.dfs.finished
    }

    /// Returns the parent of this vertex in the forest of the most recent
    /// [`dfs`](crate::graph::Graph::dfs) run.
    pub fn dfs_predecessor(&self) -> Option<&K> {
        self.dfs.predecessor.as_ref()
    }

    pub(crate) fn reset_bfs(&mut self) {
        self.bfs = BfsLabels::default();
    }

    pub(crate) fn reset_dfs(&mut self) {
        self.dfs = DfsLabels::default();
    }
}
