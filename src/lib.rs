/*!
`kgraphs` is a graph data structure & traversal library designed for graphs that are
- **k**eyed : Vertices are identified by an arbitrary ordered key type `K` instead of dense integer ids
- **k**ept immutable : The vertex set and all adjacency lists are fixed at construction
- directed and unweighted

# Representation

A [`Graph<K, D>`](graph::Graph) owns one [`Vertex<K, D>`](vertex::Vertex) per key.
Each vertex carries a payload of type `D` and an **ordered** adjacency list of keys.
Adjacency entries may reference keys that are absent from the graph; such dangling
references are tolerated and simply skipped by every traversal.

Lookup goes through a `BTreeMap`, so `get` is `O(log n)` and iterating the store
always yields vertices in ascending key order ("store order").

# Traversal state

Every vertex carries two private label blocks, one per algorithm:

- **BFS labels**: visit state, hop distance from the last BFS source, and the
  predecessor in the shortest-path tree.
- **DFS labels**: visit state, discovery/finish timestamps, and the predecessor
  in the DFS forest.

Each run of [`bfs`](graph::Graph::bfs) or [`dfs`](graph::Graph::dfs) resets its own
block for **all** vertices before doing any work, so calls are side-effect-isolated
except for overwriting that block. BFS never touches the DFS labels and vice versa.

# Usage

The two core submodules you probably want to interact with:
- [`prelude`] includes the graph, its vertices, and all traversal result types,
- [`io`] includes a reader/writer pair for the line-oriented
  `key:comma,separated,neighbors` adjacency-description format.

```
use kgraphs::prelude::*;

let mut g = Graph::new(
    vec!["a", "b", "c"],
    vec![1, 2, 3],
    vec![vec!["b"], vec!["c"], vec![]],
);

g.bfs(&"a");
assert_eq!(g.get(&"c").unwrap().distance(), Some(2));
assert!(g.reachable(&"a", &"c"));
assert_eq!(g.path(&"a", &"c"), vec!["a", "b", "c"]);
```

# When to use

You should only use this library if your graphs are small enough that per-vertex
state in a keyed map is acceptable and you need keyed lookup plus the classical
BFS/DFS derived analyses (reachability, hop-count shortest paths, level-order
rendering, edge classification). If your vertices are dense integers and
performance matters, a contiguous representation will serve you better.
*/

pub mod algo;
pub mod graph;
pub mod io;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

/// `kgraphs::prelude` includes the graph container, vertices, and traversal result types.
pub mod prelude {
    pub use super::{algo::*, graph::*, vertex::*};
}
