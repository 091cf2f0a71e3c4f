/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- [`Bfs`] and [`Dfs`], lazy iterators over the visit order from a start node.
- [`BfsLevels`], a lazy iterator yielding one breadth-first level at a time.
- The high-level [`Traversal`] trait that exposes these, plus reachability
  and unweighted shortest-path queries, directly as methods on graph types.

The work queue of a breadth-first search is a [`BoundedQueue`] of capacity
`n` and the work stack of a depth-first search is a [`Stack`]; both searches
consume their frontier strictly front-then-dequeue / peek-then-pop.

The two searches mark visited state at different moments, on purpose:
- BFS marks a node when it is **enqueued**. A node therefore enters the
  queue at most once, which keeps the queue within its capacity and makes
  recorded BFS distances minimal.
- DFS marks a node when it is **popped**. A node may sit on the stack
  several times before its first pop; the check on pop ensures it is still
  processed exactly once.
*/

use fxhash::FxHashMap;

use super::*;

/// A breadth-first traversal iterator over the nodes reachable from a start
/// node, in level order. Neighbors are expanded in neighbor-list
/// (insertion) order, giving a deterministic sequence.
///
/// An out-of-range start node yields an empty iterator.
pub struct Bfs<'a, G, V = NodeBitSet>
where
    G: AdjacencyList,
    V: VisitSet,
{
    graph: &'a G,
    visited: V,
    queue: BoundedQueue<Node>,
}

impl<'a, G, V> Bfs<'a, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = V::from_capacity(graph.number_of_nodes());
        let mut queue = BoundedQueue::with_capacity(graph.len());

        if graph.contains_node(start) {
            visited.visit(start);
            queue.enqueue(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Checks if a given node has already been discovered by this search.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.did_visit(u)
    }

    /// Tries to restart the exhausted search at the smallest yet unvisited
    /// node and returns *true* iff successful. Requires that the search came
    /// to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());

        match self.graph.vertices().find(|&u| !self.visited.did_visit(u)) {
            Some(u) => {
                self.visited.visit(u);
                self.queue.enqueue(u);
                true
            }
            None => false,
        }
    }
}

impl<G, V> Iterator for Bfs<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = *self.queue.front()?;
        self.queue.dequeue();

        for v in self.graph.neighbors_of(u) {
            // visit() reports the previous state: fresh nodes enter the queue once
            if !self.visited.visit(v) {
                self.queue.enqueue(v);
            }
        }

        Some(u)
    }
}

/// A depth-first traversal iterator over the nodes reachable from a start
/// node. Neighbors are stacked in neighbor-list order, so the last neighbor
/// of a node is explored first.
///
/// An out-of-range start node yields an empty iterator.
pub struct Dfs<'a, G, V = NodeBitSet>
where
    G: AdjacencyList,
    V: VisitSet,
{
    graph: &'a G,
    visited: V,
    stack: Stack<Node>,
}

impl<'a, G, V> Dfs<'a, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let visited = V::from_capacity(graph.number_of_nodes());
        let mut stack = Stack::new();

        if graph.contains_node(start) {
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }

    /// Checks if a given node has already been processed by this search.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.did_visit(u)
    }

    /// Tries to restart the exhausted search at the smallest yet unvisited
    /// node and returns *true* iff successful. Requires that the search came
    /// to a hold earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty());

        match self.graph.vertices().find(|&u| !self.visited.did_visit(u)) {
            Some(u) => {
                self.stack.push(u);
                true
            }
            None => false,
        }
    }
}

impl<G, V> Iterator for Dfs<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = *self.stack.peek()?;
            self.stack.pop();

            // a node may be stacked multiple times; only its first pop counts
            if self.visited.visit(u) {
                continue;
            }

            for v in self.graph.neighbors_of(u) {
                if !self.visited.did_visit(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }
}

/// A breadth-first traversal iterator yielding one `Vec<Node>` per level.
/// Level 0 is the start node alone; level `k + 1` holds the nodes first
/// discovered while processing level `k`, in discovery order.
///
/// The queue length is snapshotted at the start of each level, so a level's
/// neighbors are only expanded when the *next* level is requested.
pub struct BfsLevels<'a, G, V = NodeBitSet>
where
    G: AdjacencyList,
    V: VisitSet,
{
    graph: &'a G,
    visited: V,
    queue: BoundedQueue<Node>,
}

impl<'a, G, V> BfsLevels<'a, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    /// Creates a new level iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = V::from_capacity(graph.number_of_nodes());
        let mut queue = BoundedQueue::with_capacity(graph.len());

        if graph.contains_node(start) {
            visited.visit(start);
            queue.enqueue(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<G, V> Iterator for BfsLevels<'_, G, V>
where
    G: AdjacencyList,
    V: VisitSet,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        let level_size = self.queue.len();
        let mut level = Vec::with_capacity(level_size);

        for _ in 0..level_size {
            let u = *self.queue.front()?;
            self.queue.dequeue();

            for v in self.graph.neighbors_of(u) {
                if !self.visited.visit(v) {
                    self.queue.enqueue(v);
                }
            }

            level.push(u);
        }

        Some(level)
    }
}

/// Provides convenient traversal methods (BFS, DFS, levels, reachability,
/// shortest paths) on every adjacency-list graph.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns an iterator over the BFS levels of `start`.
    fn bfs_levels(&self, start: Node) -> BfsLevels<'_, Self> {
        BfsLevels::new(self, start)
    }

    /// Returns the nodes exactly `level` edges away from `start` in
    /// discovery order. Level 0 is the start node alone. Nodes beyond the
    /// requested level are never expanded.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3)]);
    /// assert_eq!(g.nodes_at_level(0, 1), vec![1, 2]);
    /// ```
    fn nodes_at_level(&self, start: Node, level: NumNodes) -> Vec<Node> {
        self.bfs_levels(start).nth(level as usize).unwrap_or_default()
    }

    /// Returns *true* if there is a directed path from `src` to `dest`.
    /// Trivially *true* for `src == dest` (both in range); *false* whenever
    /// either id is out of range.
    fn path_exists(&self, src: Node, dest: Node) -> bool {
        if !self.contains_node(src) || !self.contains_node(dest) {
            return false;
        }
        if src == dest {
            return true;
        }

        self.dfs(src).any(|u| u == dest)
    }

    /// Returns the number of edges on a shortest path from `start` to
    /// `target`, or `None` if `target` is unreachable or either id is out
    /// of range. `shortest_path_len(s, s)` is `Some(0)`.
    ///
    /// Distances are recorded when a node is discovered (enqueued); the
    /// result is reported the moment `target` leaves the queue.
    fn shortest_path_len(&self, start: Node, target: Node) -> Option<NumNodes> {
        if !self.contains_node(start) || !self.contains_node(target) {
            return None;
        }

        let mut visited = NodeBitSet::from_capacity(self.number_of_nodes());
        let mut dist: Vec<NumNodes> = vec![0; self.len()];
        let mut queue = BoundedQueue::with_capacity(self.len());

        visited.visit(start);
        queue.enqueue(start);

        while let Some(&u) = queue.front() {
            queue.dequeue();

            if u == target {
                return Some(dist[u as usize]);
            }

            for v in self.neighbors_of(u) {
                if !visited.visit(v) {
                    dist[v as usize] = dist[u as usize] + 1;
                    queue.enqueue(v);
                }
            }
        }

        None
    }

    /// Computes a **shortest path** from `start` to `end` using BFS with
    /// parent tracking.
    ///
    /// - Returns `Some(path)` if a path exists; `path` includes both
    ///   endpoints, so `shortest_path(s, s)` is `Some(vec![s])`.
    /// - Returns `None` if no path exists or either id is out of range.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    /// assert_eq!(g.shortest_path(0, 2), Some(vec![0, 1, 2]));
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut visited = NodeBitSet::from_capacity(self.number_of_nodes());
        let mut parent: FxHashMap<Node, Node> = FxHashMap::default();
        let mut queue = BoundedQueue::with_capacity(self.len());

        visited.visit(start);
        queue.enqueue(start);

        while let Some(&u) = queue.front() {
            queue.dequeue();

            for v in self.neighbors_of(u) {
                if visited.visit(v) {
                    continue;
                }
                parent.insert(v, u);

                if v == end {
                    let mut path = vec![end];
                    let mut node = u;
                    while node != start {
                        path.push(node);
                        node = parent[&node];
                    }
                    path.push(start);
                    path.reverse();
                    return Some(path);
                }

                queue.enqueue(v);
            }
        }

        None
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    //  0 -> 1 -> 3
    //  |         |
    //  v         v
    //  2 ------> 4    5 (isolated)
    fn diamond() -> AdjList {
        AdjList::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)])
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 3, 4]);
        assert_eq!(graph.bfs(5).collect_vec(), vec![5]);
    }

    #[test]
    fn bfs_visits_each_node_once() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 1), (1, 0), (1, 2), (2, 0), (2, 2)]);

        let order = graph.bfs(0).collect_vec();
        assert_eq!(order.len(), order.iter().unique().count());
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn bfs_out_of_range_start_is_empty() {
        let graph = diamond();
        assert_eq!(graph.bfs(6).count(), 0);
        assert_eq!(graph.dfs(6).count(), 0);
    }

    #[test]
    fn dfs_order() {
        //  1 -> 2
        //  1 -> 0 -> 5 -> 4 -> 3
        let graph = AdjList::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order = graph.dfs(1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);

        // the last-stacked neighbor is explored first
        assert_eq!(order, vec![1, 0, 5, 4, 3, 2]);
    }

    #[test]
    fn dfs_visits_each_node_once() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]);

        let order = graph.dfs(0).collect_vec();
        assert_eq!(order.len(), order.iter().unique().count());
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn bfs_levels_batches_by_distance() {
        let graph = diamond();

        let levels = graph.bfs_levels(0).collect_vec();
        assert_eq!(levels, vec![vec![0], vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn nodes_at_level() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3)]);

        assert_eq!(graph.nodes_at_level(0, 0), vec![0]);
        assert_eq!(graph.nodes_at_level(0, 1), vec![1, 2]);
        assert_eq!(graph.nodes_at_level(0, 2), vec![3]);
        assert_eq!(graph.nodes_at_level(0, 3), Vec::<Node>::new());
        assert_eq!(graph.nodes_at_level(9, 0), Vec::<Node>::new());
    }

    #[test]
    fn path_exists() {
        let graph = diamond();

        assert!(graph.path_exists(0, 4));
        assert!(graph.path_exists(3, 3));
        assert!(!graph.path_exists(4, 0));
        assert!(!graph.path_exists(0, 5));
        assert!(!graph.path_exists(0, 6));
    }

    #[test]
    fn shortest_path_len() {
        let chain = AdjList::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(chain.shortest_path_len(0, 0), Some(0));
        assert_eq!(chain.shortest_path_len(0, 2), Some(2));
        assert_eq!(chain.shortest_path_len(2, 0), None);

        let graph = diamond();
        assert_eq!(graph.shortest_path_len(0, 4), Some(2));
        assert_eq!(graph.shortest_path_len(0, 5), None);
        assert_eq!(graph.shortest_path_len(0, 6), None);
    }

    #[test]
    fn shortest_path_reconstruction() {
        let graph = diamond();

        assert_eq!(graph.shortest_path(0, 4), Some(vec![0, 2, 4]));
        assert_eq!(graph.shortest_path(0, 0), Some(vec![0]));
        assert_eq!(graph.shortest_path(0, 5), None);

        let path = graph.shortest_path(0, 3).unwrap();
        assert_eq!(path.len() as NumNodes - 1, graph.shortest_path_len(0, 3).unwrap());
    }

    #[test]
    fn sparse_visit_sets_agree() {
        let graph = diamond();

        let dense = graph.bfs(0).collect_vec();
        let sparse: Vec<Node> = Bfs::<_, fxhash::FxHashSet<Node>>::new(&graph, 0).collect();
        let boolvec: Vec<Node> = Bfs::<_, Vec<bool>>::new(&graph, 0).collect();

        assert_eq!(dense, sparse);
        assert_eq!(dense, boolvec);
    }
}
