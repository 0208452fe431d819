//! A max-ordered binary heap backed by a vector.

use std::cmp::Ordering::{Greater, Less};

/// Binary max-heap over any `Ord` element.
///
/// The largest element (per `Ord`) sits at position 0. Children of the node
/// at `pos` live at `2 * pos + 1` and `2 * pos + 2`.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    buffer: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates an empty heap able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the largest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.buffer.first()
    }

    /// Inserts an element and restores the heap invariant.
    pub fn push(&mut self, item: T) {
        self.buffer.push(item);
        self.bubble_up(self.buffer.len() - 1);
    }

    /// Removes and returns the largest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }
        let top = self.buffer.swap_remove(0);
        if !self.buffer.is_empty() {
            self.bubble_down(0, self.buffer.len());
        }
        Some(top)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Consumes the heap and returns its elements in ascending order
    /// (in-place heap sort).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.buffer.len();
        while end > 1 {
            end -= 1;
            self.buffer.swap(0, end);
            self.bubble_down(0, end);
        }
        self.buffer
    }

    fn bubble_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.buffer[parent].cmp(&self.buffer[pos]) != Less {
                break;
            }
            self.buffer.swap(parent, pos);
            pos = parent;
        }
    }

    /// Sinks the element at `pos` within the prefix `buffer[..len]`.
    fn bubble_down(&mut self, mut pos: usize, len: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                return;
            }
            let right = left + 1;
            let kid = if right < len && self.buffer[right].cmp(&self.buffer[left]) == Greater {
                right
            } else {
                left
            };
            if self.buffer[pos].cmp(&self.buffer[kid]) != Less {
                return;
            }
            self.buffer.swap(pos, kid);
            pos = kid;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MaxHeap::new();
        for item in iter {
            heap.push(item);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_descending_order() {
        let mut heap: MaxHeap<i32> = [5, 1, 9, 3, 7, 9, 0].into_iter().collect();
        assert_eq!(heap.len(), 7);
        assert_eq!(heap.peek(), Some(&9));
        let mut out = Vec::new();
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        assert_eq!(out, vec![9, 9, 7, 5, 3, 1, 0]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut heap = MaxHeap::with_capacity(4);
        heap.push(2);
        heap.push(8);
        assert_eq!(heap.pop(), Some(8));
        heap.push(4);
        heap.push(6);
        assert_eq!(heap.pop(), Some(6));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap: MaxHeap<u32> = [3, 8, 1, 8, 4, 2].into_iter().collect();
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 8, 8]);
    }

    #[test]
    fn test_clear() {
        let mut heap: MaxHeap<u8> = [1, 2, 3].into_iter().collect();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }
}
