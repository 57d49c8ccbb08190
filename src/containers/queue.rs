//! Append-only FIFO queue
//!
//! Cells live in an arena and link to each other by index. `front` is the
//! entry point for traversal and `rear` names the last cell so appends stay
//! O(1). The arena owns every cell; neither end pointer does.
//!
//! There is no dequeue: entries accumulate for the lifetime of
//! the queue, so arena indices never shift.

use std::fmt;

/// Arena slot: a value and the index of the cell behind it
#[derive(Debug)]
struct Cell<T> {
    value: T,
    next: Option<usize>,
}

/// Append-only linked queue
pub struct Queue<T> {
    cells: Vec<Cell<T>>,
    front: Option<usize>,
    rear: Option<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            cells: Vec::new(),
            front: None,
            rear: None,
        }
    }

    /// Append `value` behind the current rear
    pub fn enqueue(&mut self, value: T) {
        let index = self.cells.len();
        self.cells.push(Cell { value, next: None });

        if let Some(rear) = self.rear {
            self.cells[rear].next = Some(index);
        }
        self.rear = Some(index);

        if self.front.is_none() {
            self.front = Some(index);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Iterate front to rear
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            cells: &self.cells,
            next: self.front,
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Snapshot of all values, front to rear
    pub fn to_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Follows `next` links from the front of a [`Queue`]
pub struct QueueIter<'a, T> {
    cells: &'a [Cell<T>],
    next: Option<usize>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cells.get(self.next?)?;
        self.next = cell.next;
        Some(&cell.value)
    }
}
