//! Singly-linked list with front insertion and delete-by-name
//!
//! New values are linked in at the head, so traversal order is
//! most-recently-added first.
//!
//! # Identity
//!
//! [`LinkedList::delete`] matches cells by the `Display` text of their value,
//! not by `PartialEq`. Two values that render the same string are the same
//! entry as far as deletion is concerned, even if they differ structurally.
//! Only the first match is removed.

use std::fmt;

use super::node::{drop_chain, Iter, Link, Node};

/// Owning singly-linked list
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Link `value` in as the new head
    pub fn add(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head)
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Unlink the first cell whose value renders as `identity`.
    ///
    /// Leaves the list untouched when nothing matches.
    pub fn delete(&mut self, identity: &str) {
        let Some(position) = self.iter().position(|value| value.to_string() == identity) else {
            return;
        };

        let mut cursor = &mut self.head;
        for _ in 0..position {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return,
            }
        }

        if let Some(node) = cursor.take() {
            *cursor = node.next;
            self.len -= 1;
        }
    }

    /// Snapshot of every value's text, head to tail
    pub fn all_names(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> LinkedList<String> {
        let mut list = LinkedList::new();
        for value in values {
            list.add(value.to_string());
        }
        list
    }

    #[test]
    fn test_add_prepends() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.all_names(), vec!["c", "b", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_head() {
        let mut list = list_of(&["a", "b", "c"]);
        list.delete("c");
        assert_eq!(list.all_names(), vec!["b", "a"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_middle_and_tail() {
        let mut list = list_of(&["a", "b", "c"]);
        list.delete("b");
        assert_eq!(list.all_names(), vec!["c", "a"]);
        list.delete("a");
        assert_eq!(list.all_names(), vec!["c"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut list = list_of(&["a", "b"]);
        list.delete("zzz");
        assert_eq!(list.all_names(), vec!["b", "a"]);
        assert_eq!(list.len(), 2);

        let mut empty: LinkedList<String> = LinkedList::new();
        empty.delete("a");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_delete_removes_first_duplicate_only() {
        let mut list = list_of(&["x", "dup", "y", "dup", "z"]);
        list.delete("dup");
        assert_eq!(list.all_names(), vec!["z", "y", "dup", "x"]);
    }

    #[test]
    fn test_delete_matches_display_text() {
        let mut list = LinkedList::new();
        list.add(7_u32);
        list.add(42_u32);
        list.delete("7");
        assert_eq!(list.all_names(), vec!["42"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let list = list_of(&["a"]);
        let mut names = list.all_names();
        names.push("b".to_string());
        names[0].push('!');
        assert_eq!(list.all_names(), vec!["a"]);
    }

    #[test]
    fn test_long_chain_drops() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.add(i);
        }
        drop(list);
    }
}
