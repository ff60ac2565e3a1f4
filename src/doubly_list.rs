//! Doubly linked list
//!
//! Nodes live in a [`SlotMap`] arena and refer to their neighbours by key,
//! so the `prev` back-links never alias an owning pointer. The list keeps
//! both a head and a tail key, which makes all four end operations O(1).
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `insert_at_head` | O(1)       |
//! | `insert_at_tail` | O(1)       |
//! | `delete_at_head` | O(1)       |
//! | `delete_at_tail` | O(1)       |
//! | `search`         | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::doubly_list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert_at_head(20);
//! list.insert_at_head(10);
//! list.insert_at_tail(30);
//!
//! assert_eq!(list.to_string(), "10 <-> 20 <-> 30 <-> NULL");
//! assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
//! ```

use std::fmt;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct NodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A linked list with forward and backward links
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn insert_at_head(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|old| self.nodes.get_mut(old)) {
            Some(old) => old.prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
    }

    pub fn insert_at_tail(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|old| self.nodes.get_mut(old)) {
            Some(old) => old.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Removes the first node, returning its value
    pub fn delete_at_head(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.head?)?;
        self.head = node.next;
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = None,
            None => self.tail = None,
        }
        Some(node.value)
    }

    /// Removes the last node, returning its value
    pub fn delete_at_tail(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.tail?)?;
        self.tail = node.prev;
        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = None,
            None => self.head = None,
        }
        Some(node.value)
    }

    /// Number of nodes in the list
    pub fn total_elements(&self) -> usize {
        self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|key| self.nodes.get(key)).map(|n| &n.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|key| self.nodes.get(key)).map(|n| &n.value)
    }

    /// Iterates head to tail along the `next` links
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            forward: true,
        }
    }

    /// Iterates tail to head along the `prev` links
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.tail,
            forward: false,
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn search(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`]
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    next: Option<NodeKey>,
    forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = if self.forward { node.next } else { node.prev };
        Some(&node.value)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_at_tail(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} <-> ", value)?;
        }
        write!(f, "NULL")
    }
}
