//! Unbalanced Binary Search Tree
//!
//! Every node's left subtree holds strictly smaller values and its right
//! subtree strictly larger ones; inserting a value that is already present
//! does nothing.
//!
//! Deleting a node with two children replaces its value with the in-order
//! successor (the minimum of its right subtree) and unlinks the successor
//! from the right subtree instead.
//!
//! No rebalancing is done, so inserting sorted input degenerates the tree
//! into a chain of depth O(n). See [`AvlTree`](crate::avl::AvlTree) for the
//! self-balancing variant.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::bst::BinarySearchTree;
//!
//! let mut bst = BinarySearchTree::new();
//! for v in [50, 30, 70, 20, 40, 60, 80] {
//!     bst.insert(v);
//! }
//! assert_eq!(bst.preorder(), vec![&50, &30, &20, &40, &70, &60, &80]);
//!
//! bst.delete(&30).unwrap();
//! assert_eq!(bst.inorder(), vec![&20, &40, &50, &60, &70, &80]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::traits::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree without self-balancing
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value`, returning false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cursor = Some(Box::new(Node::leaf(value)));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes `value` from the tree
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if the value is not present.
    pub fn delete(&mut self, value: &T) -> Result<(), CollectionError> {
        let mut cursor = &mut self.root;
        loop {
            let ordering = match cursor.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return Err(CollectionError::NotFound),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = cursor else {
                return Err(CollectionError::NotFound);
            };
            cursor = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        Self::unlink(cursor);
        self.len -= 1;
        Ok(())
    }

    /// Replaces the node at `link` by whatever should take its place
    fn unlink(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = Self::take_min(&mut right) {
                    node.value = successor;
                }
                node.left = left;
                node.right = right;
                Some(node)
            }
        };
    }

    /// Detaches the minimum node of the subtree, splicing its right child
    /// into its place
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut cursor = link;
        while cursor.as_ref()?.left.is_some() {
            cursor = &mut cursor.as_mut()?.left;
        }
        let node = *cursor.take()?;
        *cursor = node.right;
        Some(node.value)
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T> BinarySearchTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Left subtree, node, right subtree
    pub fn inorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Node, left subtree, right subtree
    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[&Node<T>; 32]> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left subtree, right subtree, node
    pub fn postorder(&self) -> Vec<&T> {
        // node, right, left reversed
        let mut out = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[&Node<T>; 32]> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    /// Lazy in-order iterator
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: SmallVec::new(),
        };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach children before each node drops so a degenerate chain
        // doesn't recurse once per level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// In-order iterator over a [`BinarySearchTree`]
pub struct Iter<'a, T> {
    stack: SmallVec<[&'a Node<T>; 32]>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
