//! Circular singly linked list
//!
//! The last node's `next` points back at the head, so there is no terminating
//! link; traversal stops when it arrives back at the node it started from.
//! Only the tail key is stored, since the head is always `tail.next`. That
//! makes both insertions O(1).
//!
//! Nodes live in a [`SlotMap`] arena, so the cycle never involves owning
//! pointers and dropping the list cannot leak or double-free.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: NodeKey,
}

/// A singly linked ring of nodes
#[derive(Debug, Clone)]
pub struct CircularLinkedList<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    tail: Option<NodeKey>,
}

impl<T> CircularLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            tail: None,
        }
    }

    fn head_key(&self) -> Option<NodeKey> {
        self.tail.and_then(|tail| self.nodes.get(tail)).map(|n| n.next)
    }

    /// Links a new node in between the tail and the current head,
    /// returning its key. The tail key is not moved.
    fn link_after_tail(&mut self, value: T) -> NodeKey {
        match self.tail {
            Some(tail) => {
                let head = self.head_key().unwrap_or(tail);
                let key = self.nodes.insert(Node { value, next: head });
                if let Some(node) = self.nodes.get_mut(tail) {
                    node.next = key;
                }
                key
            }
            None => {
                let key = self.nodes.insert_with_key(|key| Node { value, next: key });
                self.tail = Some(key);
                key
            }
        }
    }

    /// Inserts a new head; the tail now points at it
    pub fn insert_at_head(&mut self, value: T) {
        self.link_after_tail(value);
    }

    /// Inserts a new tail, which points back at the head
    pub fn insert_at_tail(&mut self, value: T) {
        let key = self.link_after_tail(value);
        self.tail = Some(key);
    }

    /// Removes the head, returning its value
    pub fn delete_at_head(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.head_key()?;
        let node = self.nodes.remove(head)?;
        if head == tail {
            self.tail = None;
        } else if let Some(tail_node) = self.nodes.get_mut(tail) {
            tail_node.next = node.next;
        }
        Some(node.value)
    }

    /// Removes the tail, returning its value
    ///
    /// The predecessor of the tail has to be found by walking the ring, so
    /// this is O(n).
    pub fn delete_at_tail(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.head_key()?;
        if head == tail {
            self.tail = None;
            return self.nodes.remove(tail).map(|n| n.value);
        }

        let mut prev = head;
        while let Some(node) = self.nodes.get(prev) {
            if node.next == tail {
                break;
            }
            prev = node.next;
        }
        let node = self.nodes.remove(tail)?;
        if let Some(prev_node) = self.nodes.get_mut(prev) {
            prev_node.next = node.next;
        }
        self.tail = Some(prev);
        Some(node.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head_key().and_then(|k| self.nodes.get(k)).map(|n| &n.value)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.and_then(|k| self.nodes.get(k)).map(|n| &n.value)
    }

    /// Walks the ring once from the head and checks that it closes back on
    /// the head after exactly `len()` steps
    pub fn head_wraps(&self) -> bool {
        let Some(head) = self.head_key() else {
            return self.nodes.is_empty();
        };
        let mut key = head;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(key) {
                Some(node) => key = node.next,
                None => return false,
            }
        }
        key == head
    }

    /// Iterates once around the ring, starting at the head
    pub fn iter(&self) -> Iter<'_, T> {
        let head = self.head_key();
        Iter {
            nodes: &self.nodes,
            start: head,
            next: head,
        }
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    pub fn search(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`CircularLinkedList`]
///
/// Stops on returning to the head rather than on a missing link.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    start: Option<NodeKey>,
    next: Option<NodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = Some(node.next).filter(|&next| Some(next) != self.start);
        Some(&node.value)
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_at_tail(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "List is empty");
        }
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "(HEAD)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &CircularLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_basic_operations() {
        let mut list = CircularLinkedList::new();
        list.insert_at_head(30);
        list.insert_at_head(20);
        list.insert_at_head(10);
        list.insert_at_tail(40);
        list.insert_at_tail(50);

        assert_eq!(list.to_string(), "10 -> 20 -> 30 -> 40 -> 50 -> (HEAD)");
        assert_eq!(list.len(), 5);
        assert!(list.head_wraps());
        assert_eq!(list.head(), Some(&10));
        assert_eq!(list.tail(), Some(&50));
    }

    #[test]
    fn test_single_node_points_to_itself() {
        let mut list = CircularLinkedList::new();
        list.insert_at_head(1);
        assert!(list.head_wraps());
        assert_eq!(values(&list), vec![1]);
        assert_eq!(list.head(), list.tail());
    }

    #[test]
    fn test_deletes_keep_ring_closed() {
        let mut list: CircularLinkedList<i32> = (1..=5).collect();

        assert_eq!(list.delete_at_head(), Some(1));
        assert!(list.head_wraps());
        assert_eq!(values(&list), vec![2, 3, 4, 5]);

        assert_eq!(list.delete_at_tail(), Some(5));
        assert!(list.head_wraps());
        assert_eq!(values(&list), vec![2, 3, 4]);

        list.insert_at_tail(6);
        assert_eq!(values(&list), vec![2, 3, 4, 6]);

        while list.delete_at_tail().is_some() {}
        assert!(list.is_empty());
        assert!(list.head_wraps());
        assert_eq!(list.delete_at_head(), None);
    }

    #[test]
    fn test_search_and_display_empty() {
        let mut list = CircularLinkedList::new();
        assert_eq!(list.to_string(), "List is empty");
        list.insert_at_tail(3);
        list.insert_at_tail(4);
        assert!(list.search(&4));
        assert!(!list.search(&5));
    }
}
