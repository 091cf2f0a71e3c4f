use crate::{ops::*, testing::test_graph_ops, Node, NumEdges, NumNodes};

use super::Neighborhood;

/// A directed graph with a fixed number of nodes, storing one independently
/// owned out-neighborhood per node.
///
/// The node count is chosen at creation and never changes; edges may be
/// added and removed at any time. Every stored neighbor lies in `[0, n)` —
/// out-of-range ids are rejected at the edge-editing surface, so the
/// invariant holds by construction.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for the adjacency storage.
#[derive(Clone)]
pub struct DirectedGraph<Nbs>
where
    Nbs: Neighborhood,
{
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Directed graph whose neighbor lists are [`SinglyLinkedList`]s.
///
/// [`SinglyLinkedList`]: crate::collections::SinglyLinkedList
pub type AdjList = DirectedGraph<super::ListNeighborhood>;

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<super::ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; 8]>`).
pub type SparseAdjList = DirectedGraph<super::SparseNeighborhood>;

impl<Nbs: Neighborhood> DirectedGraph<Nbs> {
    /// Returns the neighborhood of `u`, or `None` if `u` is out of range.
    pub fn neighbors(&self, u: Node) -> Option<&Nbs> {
        self.nbs.get(u as usize)
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for DirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for DirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for DirectedGraph<Nbs> {
    type NeighborIter<'a>
        = Nbs::NeighborhoodIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for DirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.contains_node(u) && self.contains_node(v) && self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for DirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for DirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.contains_node(u) || !self.contains_node(v) {
            return false;
        }

        self.nbs[u as usize].push_neighbor(v);
        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.contains_node(u) || !self.contains_node(v) {
            return false;
        }

        if self.nbs[u as usize].remove_first(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_list, AdjList);
test_graph_ops!(test_adj_array, AdjArray);
test_graph_ops!(test_sparse_adj_list, SparseAdjList);
