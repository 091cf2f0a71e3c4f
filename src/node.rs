/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space compared to `usize`/`u64` and (2) manipulate
node values directly without abstracting over them.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Dense BitSet with one slot per node
pub type NodeBitSet = fixedbitset::FixedBitSet;
