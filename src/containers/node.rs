//! Link cell shared by the chain-backed containers

/// Owning link to the next cell, or `None` at the end of a chain
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell in a singly-linked chain
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a cell that links in front of `next`
    pub fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Node { value, next })
    }
}

/// Borrowing iterator over a chain, head first
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: &'a Link<T>) -> Self {
        Iter {
            next: head.as_deref(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Unlink a chain one cell at a time.
///
/// The default recursive drop of `Box<Node>` uses one stack frame per cell,
/// which overflows on long chains.
pub(crate) fn drop_chain<T>(head: &mut Link<T>) {
    let mut cursor = head.take();
    while let Some(mut node) = cursor {
        cursor = node.next.take();
    }
}
