use itertools::Itertools;

use crate::{Edge, Node, NumEdges, NumNodes};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a valid node id of this graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the out-neighbors of `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges of the graph in sorted order.
    /// Duplicate edges appear with their multiplicity.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable();
        edges.into_iter()
    }
}

/// Trait to test existence of certain edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Out-of-range ids yield *false*.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge *(u,v)* to the graph by appending `v` at the end of
    /// `u`'s neighbor list. Duplicate edges and self-loops are permitted.
    /// Returns *false* without mutating state if `u` or `v` is out of range.
    fn add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection. Out-of-range edges are skipped.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            let Edge(u, v) = edge.into();
            self.add_edge(u, v);
        }
    }

    /// Removes the first occurrence of *(u,v)* from the graph, keeping the
    /// relative order of `u`'s remaining neighbors.
    /// Returns *false* if the edge is absent or either id is out of range.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and a collection of edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Trait for reversing all edges of a graph into a fresh instance
pub trait GraphTranspose: AdjacencyList + GraphNew + GraphEdgeEditing {
    /// Returns a new graph of the same node count in which every edge
    /// *(u,v)* of `self` becomes *(v,u)*. Edge multiplicity is preserved;
    /// `self` is left untouched.
    fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.number_of_nodes());
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                transposed.add_edge(v, u);
            }
        }
        transposed
    }
}

impl<G: AdjacencyList + GraphNew + GraphEdgeEditing> GraphTranspose for G {}
