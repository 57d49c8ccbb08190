//! LIFO stack over a singly-linked chain

use std::fmt;

use super::node::{drop_chain, Iter, Link, Node};

/// Linked stack; `top` is the most recently pushed cell
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    /// Push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        self.top = Some(Node::boxed(value, self.top.take()));
        self.len += 1;
    }

    /// Remove and return the top value, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let node = *node;
            self.top = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Borrow the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Iterate top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.top)
    }
}

impl<T: Clone> Stack<T> {
    /// Snapshot of all values, top to bottom
    pub fn to_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.top);
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_empty_returns_none() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert!(stack.to_list().is_empty());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::new();
        stack.push("A");
        stack.push("B");
        stack.push("C");
        assert_eq!(stack.peek(), Some(&"C"));
        assert_eq!(stack.pop(), Some("C"));
        assert_eq!(stack.to_list(), vec!["B", "A"]);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_drain_to_empty() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut stack = Stack::new();
        stack.push(String::from("A"));
        let mut snapshot = stack.to_list();
        snapshot.clear();
        assert_eq!(stack.to_list(), vec!["A"]);
    }
}
