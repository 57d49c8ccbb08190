//! Linked containers backing the registry
//!
//! - [`linked_list`]: singly-linked list with prepend and delete-by-name
//! - [`stack`]: LIFO stack with push/pop
//! - [`queue`]: append-only FIFO queue
//! - `node`: the link cell shared by the list and the stack
//!
//! # Snapshots
//!
//! Callers never get references into a chain from the listing methods
//! (`all_names`, `to_list`). Each call returns a freshly allocated `Vec`,
//! so editing the result has no effect on the container.
//!
//! # Absent values
//!
//! None of the containers fail. Popping an empty stack yields `None` and
//! deleting a name that is not present leaves the list as it was.

mod node;

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use node::Iter;
pub use queue::{Queue, QueueIter};
pub use stack::Stack;
