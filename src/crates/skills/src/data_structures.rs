//! Stack, queue and list containers
//!
//! Thin wrappers over the standard collections. Reading from an empty
//! container returns [`SkillsError::InvalidInput`] instead of panicking.

use crate::error::{Result, SkillsError};
use std::collections::VecDeque;

/// Last-in, first-out stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `item` on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| SkillsError::invalid_input("stack is empty"))
    }

    /// Top item without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| SkillsError::invalid_input("stack is empty"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// First-in, first-out queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add `item` at the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or_else(|| SkillsError::invalid_input("queue is empty"))
    }

    /// Front item without removing it
    pub fn front(&self) -> Result<&T> {
        self.items
            .front()
            .ok_or_else(|| SkillsError::invalid_input("queue is empty"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered list with cheap insertion at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList<T> {
    items: VecDeque<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Add `item` at the end
    pub fn append(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Add `item` at the beginning
    pub fn prepend(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first item equal to `value`
    ///
    /// Returns whether anything was removed; a missing value is not an error.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => self.items.remove(index).is_some(),
            None => false,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    /// Items from head to tail
    pub fn to_list(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(*stack.peek().unwrap(), 2);
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_empty_stack() {
        let mut stack: Stack<i32> = Stack::default();
        assert!(stack.is_empty());
        assert!(matches!(stack.pop(), Err(SkillsError::InvalidInput(_))));
        assert!(matches!(stack.peek(), Err(SkillsError::InvalidInput(_))));
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.size(), 3);
        assert_eq!(queue.dequeue().unwrap(), "a");
        assert_eq!(*queue.front().unwrap(), "b");
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: Queue<u8> = Queue::default();
        assert!(queue.is_empty());
        assert!(matches!(queue.dequeue(), Err(SkillsError::InvalidInput(_))));
        assert!(matches!(queue.front(), Err(SkillsError::InvalidInput(_))));
    }

    #[test]
    fn test_linked_list_append_prepend() {
        let mut list = LinkedList::new();
        list.append(1);
        list.append(2);
        list.append(3);
        list.prepend(0);

        assert_eq!(list.to_list(), vec![0, 1, 2, 3]);
        assert_eq!(list.size(), 4);
    }

    #[test]
    fn test_linked_list_delete_first_occurrence() {
        let mut list = LinkedList::new();
        for n in [1, 2, 3, 2] {
            list.append(n);
        }

        assert!(list.delete(&2));
        assert_eq!(list.to_list(), vec![1, 3, 2]);
        assert!(list.delete(&1));
        assert_eq!(list.to_list(), vec![3, 2]);
        assert!(!list.delete(&9));
        assert_eq!(list.to_list(), vec![3, 2]);
    }

    #[test]
    fn test_linked_list_delete_on_empty() {
        let mut list: LinkedList<i32> = LinkedList::default();
        assert!(!list.delete(&1));
        assert!(list.is_empty());
        assert!(list.to_list().is_empty());
    }

    proptest! {
        #[test]
        fn prop_stack_pops_in_reverse(items in prop::collection::vec(any::<i32>(), 0..32)) {
            let mut stack = Stack::new();
            for item in &items {
                stack.push(*item);
            }
            let mut popped = Vec::new();
            while let Ok(item) = stack.pop() {
                popped.push(item);
            }
            popped.reverse();
            prop_assert_eq!(popped, items);
        }

        #[test]
        fn prop_queue_preserves_order(items in prop::collection::vec(any::<i32>(), 0..32)) {
            let mut queue = Queue::new();
            for item in &items {
                queue.enqueue(*item);
            }
            let mut drained = Vec::new();
            while let Ok(item) = queue.dequeue() {
                drained.push(item);
            }
            prop_assert_eq!(drained, items);
        }
    }
}
