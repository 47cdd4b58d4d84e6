/*!
# Graph Traversal & Derived Analyses

This module provides the traversal engines and everything built on top of them:

- [`bfs`](crate::graph::Graph::bfs) — shortest hop counts and the
  shortest-path tree from a source,
- [`dfs`](crate::graph::Graph::dfs) — a timestamped DFS forest over the
  whole vertex store,
- [`reachable`](crate::graph::Graph::reachable) /
  [`path`](crate::graph::Graph::path) — reachability tests and path
  reconstruction derived from BFS,
- [`bfs_levels`](crate::graph::Graph::bfs_levels) /
  [`bfs_tree`](crate::graph::Graph::bfs_tree) — level-ordered rendering of a
  BFS,
- [`edge_class`](crate::graph::Graph::edge_class) — four-way edge
  classification combining the last BFS source with a fresh DFS forest.

All of them are methods on [`Graph`](crate::graph::Graph). None of these calls
caches anything: each derived operation re-runs the traversal it depends on,
so results never go stale, at the cost of an `O(V + E)` pass per call.
*/

mod bfs;
mod classify;
mod dfs;
mod levels;
mod paths;

pub use classify::*;
