// Integration tests for the linked containers

use proptest::prelude::*;
use society_desk::containers::{LinkedList, Queue, Stack};

#[test]
fn test_society_list_scenario() {
    let mut list = LinkedList::new();
    list.add("Chess Club".to_string());
    list.add("Robotics".to_string());
    assert_eq!(list.all_names(), vec!["Robotics", "Chess Club"]);

    list.delete("Chess Club");
    assert_eq!(list.all_names(), vec!["Robotics"]);
}

#[test]
fn test_stack_scenario() {
    let mut stack = Stack::new();
    stack.push("A".to_string());
    stack.push("B".to_string());
    assert_eq!(stack.pop().as_deref(), Some("B"));
    assert_eq!(stack.to_list(), vec!["A"]);
}

#[test]
fn test_queue_scenario() {
    let mut queue = Queue::new();
    queue.enqueue("f1".to_string());
    queue.enqueue("f2".to_string());
    assert_eq!(queue.to_list(), vec!["f1", "f2"]);
}

#[test]
fn test_empty_containers() {
    let list: LinkedList<String> = LinkedList::default();
    let mut stack: Stack<String> = Stack::default();
    let queue: Queue<String> = Queue::default();

    assert!(list.all_names().is_empty());
    assert_eq!(stack.pop(), None);
    assert!(stack.to_list().is_empty());
    assert!(queue.to_list().is_empty());
}

#[test]
fn test_debug_lists_chain_order() {
    let mut list = LinkedList::new();
    list.add(1);
    list.add(2);
    assert_eq!(format!("{:?}", list), "[2, 1]");

    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(format!("{:?}", queue), "[1, 2]");
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,2}", 0..24)
}

proptest! {
    #[test]
    fn prop_add_reverses_insertion(values in names()) {
        let mut list = LinkedList::new();
        for value in &values {
            list.add(value.clone());
        }
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(list.all_names(), expected);
        prop_assert_eq!(list.len(), values.len());
    }

    #[test]
    fn prop_snapshots_are_independent(values in names()) {
        let mut list = LinkedList::new();
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        for value in &values {
            list.add(value.clone());
            stack.push(value.clone());
            queue.enqueue(value.clone());
        }

        let before = (list.all_names(), stack.to_list(), queue.to_list());

        let mut names = list.all_names();
        names.push("x".to_string());
        names.reverse();
        let mut stacked = stack.to_list();
        stacked.clear();
        let mut queued = queue.to_list();
        queued.iter_mut().for_each(|v| v.push('!'));

        prop_assert_eq!((list.all_names(), stack.to_list(), queue.to_list()), before);
    }

    #[test]
    fn prop_delete_missing_is_noop(values in names()) {
        let mut list = LinkedList::new();
        for value in &values {
            list.add(value.clone());
        }
        let before = list.all_names();
        // Generated names never contain 'z'
        list.delete("zz");
        prop_assert_eq!(list.all_names(), before);
    }

    #[test]
    fn prop_delete_removes_exactly_first_match(values in names(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let target = values[pick.index(values.len())].clone();

        let mut list = LinkedList::new();
        for value in &values {
            list.add(value.clone());
        }
        let before = list.all_names();
        list.delete(&target);
        let after = list.all_names();

        prop_assert_eq!(after.len(), before.len() - 1);

        let mut expected = before.clone();
        let first = expected.iter().position(|v| *v == target).unwrap();
        expected.remove(first);
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn prop_pop_returns_last_push(values in names()) {
        prop_assume!(!values.is_empty());
        let mut stack = Stack::new();
        for value in &values {
            stack.push(value.clone());
        }
        prop_assert_eq!(stack.pop(), values.last().cloned());

        let mut expected: Vec<String> = values[..values.len() - 1].to_vec();
        expected.reverse();
        prop_assert_eq!(stack.to_list(), expected);
    }

    #[test]
    fn prop_queue_keeps_insertion_order(values in names()) {
        let mut queue = Queue::new();
        for value in &values {
            queue.enqueue(value.clone());
        }
        prop_assert_eq!(queue.to_list(), values.clone());
        prop_assert_eq!(queue.len(), values.len());
    }
}
