/*!
# Visited-State Storage

Traversals need to remember which nodes they have already discovered. The
[`VisitSet`] trait abstracts over that storage so the same algorithm can run
on:
- a dense bitset ([`NodeBitSet`]) -> the default for full-graph sweeps,
- a sparse hash set (`FxHashSet<Node>`) -> for large graphs of which only a
  small part is reachable,
- a plain `Vec<bool>` -> the classic caller-style visited array.
*/

use fxhash::FxHashSet;

use crate::node::*;

/// Minimalist trait for visited-state collections over nodes `0..n`.
pub trait VisitSet {
    /// Creates an empty set able to hold marks for nodes `0..n`.
    fn from_capacity(n: NumNodes) -> Self;

    /// Marks `u` as visited.
    /// Returns *true* if the node was already visited before.
    /// ** Might panic if `u >= n` **
    fn visit(&mut self, u: Node) -> bool;

    /// Returns *true* if `u` has been visited.
    /// ** Might panic if `u >= n` **
    fn did_visit(&self, u: Node) -> bool;

    /// Forgets all visited marks.
    fn clear_visits(&mut self);

    /// Returns the number of visited nodes.
    fn num_visited(&self) -> usize;
}

impl VisitSet for NodeBitSet {
    fn from_capacity(n: NumNodes) -> Self {
        NodeBitSet::with_capacity(n as usize)
    }

    fn visit(&mut self, u: Node) -> bool {
        self.put(u as usize)
    }

    fn did_visit(&self, u: Node) -> bool {
        self.contains(u as usize)
    }

    fn clear_visits(&mut self) {
        self.clear();
    }

    fn num_visited(&self) -> usize {
        self.count_ones(..)
    }
}

impl VisitSet for FxHashSet<Node> {
    fn from_capacity(n: NumNodes) -> Self {
        FxHashSet::with_capacity_and_hasher(n as usize, Default::default())
    }

    fn visit(&mut self, u: Node) -> bool {
        !self.insert(u)
    }

    fn did_visit(&self, u: Node) -> bool {
        self.contains(&u)
    }

    fn clear_visits(&mut self) {
        self.clear();
    }

    fn num_visited(&self) -> usize {
        self.len()
    }
}

impl VisitSet for Vec<bool> {
    fn from_capacity(n: NumNodes) -> Self {
        vec![false; n as usize]
    }

    fn visit(&mut self, u: Node) -> bool {
        std::mem::replace(&mut self[u as usize], true)
    }

    fn did_visit(&self, u: Node) -> bool {
        self[u as usize]
    }

    fn clear_visits(&mut self) {
        self.fill(false);
    }

    fn num_visited(&self) -> usize {
        self.iter().filter(|&&visited| visited).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_impl<V: VisitSet>() {
        let mut set = V::from_capacity(10);
        assert!(!set.did_visit(3));
        assert!(!set.visit(3));
        assert!(set.visit(3));
        assert!(set.did_visit(3));
        assert_eq!(set.num_visited(), 1);

        set.visit(0);
        set.visit(9);
        assert_eq!(set.num_visited(), 3);

        set.clear_visits();
        assert_eq!(set.num_visited(), 0);
        assert!(!set.did_visit(3));
    }

    #[test]
    fn bitset() {
        check_impl::<NodeBitSet>();
    }

    #[test]
    fn hashset() {
        check_impl::<FxHashSet<Node>>();
    }

    #[test]
    fn boolvec() {
        check_impl::<Vec<bool>>();
    }
}
