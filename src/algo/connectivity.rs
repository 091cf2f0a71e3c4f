/*!
Component discovery, topological ordering, and strongly connected
components.

Topological sorting and the first Kosaraju pass both consume the DFS
**finish order** of the whole graph, provided by the [`PostOrder`] iterator.
`PostOrder` simulates the recursive DFS with an explicit stack of frames —
each frame holds the node and its partially consumed neighbor iterator — so
deeply nested graphs cannot overflow the call stack.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Identifier of a component within one labeling
pub type ComponentId = u32;

/// Component-Value assigned to no component
pub const UNASSIGNED: ComponentId = ComponentId::MAX;

/// Iterates the reachability components of a graph: each item is the set of
/// nodes discovered by one DFS flood fill, seeded at the smallest node not
/// reached by any earlier fill. Every node appears in exactly one item.
pub struct Components<'a, G, V = NodeBitSet>
where
    G: AdjacencyList,
    V: VisitSet,
{
    dfs: Dfs<'a, G, V>,
}

impl<'a, G, V> Components<'a, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: Dfs::new(graph, 0),
        }
    }
}

impl<G, V> Iterator for Components<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let component = self.dfs.by_ref().collect_vec();
            if !component.is_empty() {
                return Some(component);
            }

            if !self.dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G, V> FusedIterator for Components<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
}

/// Iterator over the DFS **finish order** of the whole graph: a node is
/// yielded only after all of its descendants have been yielded. Roots are
/// taken in increasing index order, so the sequence covers every node
/// exactly once.
///
/// The recursion is simulated with an explicit frame stack.
pub struct PostOrder<'a, G, V = NodeBitSet>
where
    G: AdjacencyList,
    V: VisitSet,
{
    graph: &'a G,
    visited: V,
    next_root: Node,
    call_stack: Vec<Frame<'a, G>>,
}

struct Frame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

impl<'a, G, V> PostOrder<'a, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: V::from_capacity(graph.number_of_nodes()),
            next_root: 0,
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this
    /// is the first step of a recursive call.
    fn push_node(&mut self, u: Node) {
        self.visited.visit(u);
        self.call_stack.push(Frame {
            node: u,
            neighbors: self.graph.neighbors_of(u),
        });
    }

    /// Starts the search over at the smallest untouched node, as a classic
    /// DFS spanning-forest computation would.
    fn descend_at_unvisited_root(&mut self) -> bool {
        while self.next_root < self.graph.number_of_nodes() {
            let u = self.next_root;
            self.next_root += 1;

            if !self.visited.did_visit(u) {
                self.push_node(u);
                return true;
            }
        }

        false
    }
}

impl<G, V> Iterator for PostOrder<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        'descend: loop {
            let Some(frame) = self.call_stack.last_mut() else {
                if self.descend_at_unvisited_root() {
                    continue;
                }
                return None;
            };

            for v in frame.neighbors.by_ref() {
                if !self.visited.did_visit(v) {
                    self.push_node(v);
                    continue 'descend;
                }
            }

            // all descendants are finished, so the node is too
            let frame = self.call_stack.pop()?;
            return Some(frame.node);
        }
    }
}

impl<G, V> FusedIterator for PostOrder<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
}

/// Maps every node to the strongly connected component it belongs to.
/// Component ids are dense in `0..num_components` and enumerate the SCCs in
/// reverse finish order of the underlying search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccLabeling {
    components: Vec<ComponentId>,
    num_components: NumNodes,
}

impl SccLabeling {
    /// Returns the number of strongly connected components
    pub fn number_of_components(&self) -> NumNodes {
        self.num_components
    }

    /// Returns the component id of `u`, or `None` for an out-of-range id
    pub fn component_of(&self, u: Node) -> Option<ComponentId> {
        self.components.get(u as usize).copied()
    }

    /// Returns *true* if `u` and `v` are mutually reachable
    pub fn same_component(&self, u: Node, v: Node) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false,
        }
    }

    /// Returns a view of the per-node component ids
    pub fn as_slice(&self) -> &[ComponentId] {
        &self.components
    }

    /// Groups the nodes by component id; group `i` holds the nodes of
    /// component `i` in increasing order.
    pub fn groups(&self) -> Vec<Vec<Node>> {
        let mut groups = vec![Vec::new(); self.num_components as usize];
        for (u, &c) in self.components.iter().enumerate() {
            groups[c as usize].push(u as Node);
        }
        groups
    }
}

/// Provides component discovery, topological ordering, and strongly
/// connected components on every adjacency-list graph.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the reachability components of the graph
    /// (see [`Components`]).
    fn components(&self) -> Components<'_, Self> {
        Components::new(self)
    }

    /// Writes a shared component id into `labels` for every node of each
    /// reachability component and returns the number of components. Ids are
    /// dense in `0..count`, assigned in order of the components' smallest
    /// nodes.
    ///
    /// `labels` is caller-allocated scratch of at least `n` slots.
    fn label_components_into(&self, labels: &mut [ComponentId]) -> NumNodes {
        debug_assert!(labels.len() >= self.len());

        let mut next_id: ComponentId = 0;
        for component in self.components() {
            for u in component {
                labels[u as usize] = next_id;
            }
            next_id += 1;
        }

        next_id
    }

    /// Allocating convenience wrapper around
    /// [`Connectivity::label_components_into`].
    fn label_components(&self) -> (Vec<ComponentId>, NumNodes) {
        let mut labels = vec![UNASSIGNED; self.len()];
        let num_components = self.label_components_into(&mut labels);
        (labels, num_components)
    }

    /// Returns an iterator over the DFS finish order of the whole graph
    /// (see [`PostOrder`]).
    fn post_order(&self) -> PostOrder<'_, Self> {
        PostOrder::new(self)
    }

    /// Returns the nodes in reverse DFS finish order: on an acyclic graph
    /// every node appears before all nodes it has edges into.
    ///
    /// No cycle detection is performed — on cyclic input this is still a
    /// permutation of the nodes, but not a valid topological order. Use
    /// [`Connectivity::topo_sort_checked`] when the input may have cycles.
    fn topo_sort(&self) -> Vec<Node> {
        let mut order = self.post_order().collect_vec();
        order.reverse();
        order
    }

    /// Like [`Connectivity::topo_sort`], but verifies the result: returns
    /// `None` iff the graph contains a cycle.
    fn topo_sort_checked(&self) -> Option<Vec<Node>> {
        let order = self.topo_sort();

        let mut rank: Vec<NumNodes> = vec![0; self.len()];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i as NumNodes;
        }

        let all_edges_forward = self
            .vertices()
            .all(|u| self.neighbors_of(u).all(|v| rank[u as usize] < rank[v as usize]));

        all_edges_forward.then_some(order)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool {
        self.topo_sort_checked().is_some()
    }

    /// Computes the strongly connected components with **Kosaraju's
    /// algorithm**:
    /// 1. collect the DFS finish order of the graph,
    /// 2. build the transposed graph,
    /// 3. flood-fill the transposed graph seeded in reverse finish order,
    ///    assigning a fresh component id per fill.
    ///
    /// Ids therefore enumerate the SCCs in reverse finish order.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
    /// let sccs = g.strongly_connected_components();
    ///
    /// assert_eq!(sccs.number_of_components(), 2);
    /// assert!(sccs.same_component(0, 2));
    /// assert!(!sccs.same_component(0, 3));
    /// ```
    fn strongly_connected_components(&self) -> SccLabeling
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let finish_order = self.post_order().collect_vec();
        let transposed = self.transpose();

        let mut components = vec![UNASSIGNED; self.len()];
        let mut num_components: NumNodes = 0;
        let mut visited = NodeBitSet::from_capacity(self.number_of_nodes());
        let mut stack = Stack::new();

        for &root in finish_order.iter().rev() {
            if visited.did_visit(root) {
                continue;
            }

            visited.visit(root);
            stack.push(root);

            while let Some(&u) = stack.peek() {
                stack.pop();
                components[u as usize] = num_components;

                for v in transposed.neighbors_of(u) {
                    if !visited.visit(v) {
                        stack.push(v);
                    }
                }
            }

            num_components += 1;
        }

        SccLabeling {
            components,
            num_components,
        }
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn components_cover_every_node() {
        let graph = AdjList::from_edges(7, [(1, 2), (2, 3), (4, 5)]);

        let components = graph.components().collect_vec();
        assert_eq!(
            components,
            vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]
        );
    }

    #[test]
    fn label_components() {
        let graph = AdjList::from_edges(7, [(1, 2), (2, 3), (4, 5)]);

        let (labels, num_components) = graph.label_components();
        assert_eq!(num_components, 4);
        assert_eq!(labels, vec![0, 1, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn label_components_into_caller_buffer() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 0)]);

        let mut labels = vec![UNASSIGNED; 3];
        let num_components = graph.label_components_into(&mut labels);
        assert_eq!(num_components, 2);
        assert_eq!(labels, vec![0, 0, 1]);
    }

    #[test]
    fn post_order_is_a_finish_order() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);

        let order = graph.post_order().collect_vec();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn topo_sort_respects_edges() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);

        let order = graph.topo_sort();
        let mut rank = vec![0; 4];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i;
        }

        for Edge(u, v) in graph.edges() {
            assert!(rank[u as usize] < rank[v as usize]);
        }
    }

    #[test]
    fn topo_sort_checked_detects_cycles() {
        let mut graph = AdjList::from_edges(7, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);
        assert!(graph.is_acyclic());
        assert!(graph.topo_sort_checked().is_some());

        graph.add_edge(6, 2); // introduce cycle
        assert!(!graph.is_acyclic());
        assert!(graph.topo_sort_checked().is_none());
        // the unchecked sort still covers every node exactly once
        assert_eq!(graph.topo_sort().iter().unique().count(), 7);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjList::from_edges(2, [(0, 1), (1, 1)]);
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn scc_two_components() {
        let graph = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 2);
        assert_eq!(sccs.groups(), vec![vec![0, 1, 2], vec![3]]);

        assert!(sccs.same_component(0, 1));
        assert!(sccs.same_component(1, 2));
        assert!(!sccs.same_component(2, 3));
        assert_eq!(sccs.component_of(4), None);
        assert_eq!(sccs.component_of(INVALID_NODE), None);
    }

    #[test]
    fn scc_three_components() {
        let graph = AdjList::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);

        let mut groups = sccs.groups();
        groups.sort_by_key(|group| group[0]);
        assert_eq!(groups, vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]);
    }

    #[test]
    fn scc_directed_tree_is_all_singletons() {
        let graph = AdjList::from_edges(7, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 7);
        assert!(sccs.groups().iter().all(|group| group.len() == 1));
    }

    #[test]
    fn scc_long_cycle_uses_no_recursion() {
        let n: NumNodes = 100_000;
        let mut graph = AdjArray::new(n);
        for u in 0..n {
            graph.add_edge(u, (u + 1) % n);
        }

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
    }

    #[test]
    fn scc_ids_follow_reverse_finish_order() {
        // 0 -> 1 -> 2: the condensation is a chain, so ids are topological
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn scc_ignores_duplicate_edges() {
        let graph = AdjList::from_edges(2, [(0, 1), (0, 1), (1, 0)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
    }
}
