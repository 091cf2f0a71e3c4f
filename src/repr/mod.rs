/*!
# Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a
[`Neighborhood`] type which controls how the out-neighbors of each node are
stored.

## Provided Representations

- [`AdjList`] — neighbor lists stored in a [`SinglyLinkedList`]; the
  canonical representation of this crate.
- [`AdjArray`] — neighbor lists stored in a `Vec<Node>`.
- [`SparseAdjList`] — neighbor lists stored inline in a `SmallVec` while
  small. Prefer this if the graph is known to be sparse.

All representations share the same contract: neighbors are kept in insertion
order, duplicate edges and self-loops are permitted, and removal drops the
first matching occurrence without disturbing the order of the rest.
*/

use std::iter::Copied;

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use crate::{
    collections::{list, SinglyLinkedList},
    Node, NumNodes,
};

mod directed;

pub use directed::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph of `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in insertion order
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Appends `v` at the end of the Neighborhood.
    /// Duplicates are not checked for; adding twice yields a multi-edge.
    fn push_neighbor(&mut self, v: Node);

    /// Removes the first occurrence of `v`, keeping the order of the
    /// remaining neighbors. Returns *true* if `v` was present.
    fn remove_first(&mut self, v: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood backed by the crate's own [`SinglyLinkedList`]
#[derive(Clone, Default)]
pub struct ListNeighborhood(pub SinglyLinkedList<Node>);

impl Neighborhood for ListNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<list::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn push_neighbor(&mut self, v: Node) {
        self.0.push_back(v);
    }

    fn remove_first(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == v) {
            self.0.remove_at(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<std::slice::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn push_neighbor(&mut self, v: Node) {
        self.0.push(v);
    }

    fn remove_first(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == v) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<std::slice::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn push_neighbor(&mut self, v: Node) {
        self.0.push(v);
    }

    fn remove_first(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == v) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
