/*!
`lgraphs` is a library of **l**ist-backed containers and algorithms for
**l**abel-free directed graphs:
- Nodes are numbered `0` to `n - 1` and represented as `u32`.
- Neither nodes nor edges carry weights; shortest paths count edges.
- The node count of a graph is fixed at creation; edges change freely.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph. For **edges**, we use a simple tuple-struct
`Edge(Node, Node)` whose orientation matters: `Edge(u, v)` and `Edge(v, u)`
are distinct.

A graph is an array of per-node neighbor sequences behind the
[`Neighborhood`](crate::repr::Neighborhood) trait. See the [`repr`] module
for the available storage backends:

- [`AdjList`](crate::repr::AdjList) — neighbor lists in the crate's own
  [`SinglyLinkedList`](crate::collections::SinglyLinkedList) (the default),
- [`AdjArray`](crate::repr::AdjArray) — neighbor lists in a `Vec`,
- [`SparseAdjList`](crate::repr::SparseAdjList) — neighbor lists inline in
  small vectors while they stay short.

All backends keep neighbors in insertion order and permit duplicate edges
and self-loops, so traversal orders are deterministic.

# Design

Graph functionality is split into small operation traits (see [`ops`]) that
the representations implement; algorithms (see [`algo`]) are provided as
lazy iterators and as methods on the graphs themselves via blanket traits —
`graph.bfs(start)`, `graph.topo_sort()`,
`graph.strongly_connected_components()`, and so on.

The containers every algorithm runs on are ordinary values in
[`collections`]: a fixed-capacity [`BoundedQueue`](collections::BoundedQueue)
drives breadth-first searches, a [`Stack`](collections::Stack) over a
[`SinglyLinkedList`](collections::SinglyLinkedList) drives depth-first
searches. A small level-filled binary tree lives in [`tree`].

Errors are sentinel-shaped: out-of-range node ids make edge edits return
`false` and traversals come up empty; exhausted containers report `false` /
`None`. Nothing on the public surface panics for invalid input.

# Usage

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices:
```rust
use lgraphs::{prelude::*, algo::*};

let g = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);

assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
assert_eq!(g.shortest_path_len(0, 3), Some(3));

let sccs = g.strongly_connected_components();
assert_eq!(sccs.number_of_components(), 2);
```

# When to use

You should only use this library if your graphs are unlabelled, unweighted
and directed, and you want basic traversal and connectivity analysis over a
deterministic adjacency-list model. For anything beyond that, check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod collections;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod tree;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits, the container primitives, and all implemented
/// representations.
pub mod prelude {
    pub use super::{collections::*, edge::*, node::*, ops::*, repr::*};
}
