/*!
# Container Primitives

The three containers every algorithm in this crate is built on:
- [`BoundedQueue`]: a fixed-capacity FIFO ring buffer -> the BFS work queue,
- [`SinglyLinkedList`]: an owned singly linked sequence -> the backing store
  for [`Stack`] and for each graph node's neighbor list,
- [`Stack`]: a LIFO policy wrapper over the list -> the DFS work stack.

All three own their elements: values are moved in on insertion and either
dropped in place on removal or handed back to the caller, depending on the
operation (see [`SinglyLinkedList::remove_at`] vs [`Stack::pop`]).
*/

pub mod list;
pub mod queue;
pub mod stack;

pub use list::{ListNode, SinglyLinkedList};
pub use queue::BoundedQueue;
pub use stack::Stack;
