//! AVL Tree
//!
//! A self-balancing binary search tree. Every node caches the height of its
//! subtree (a leaf has height 1) and the balance factor
//! `height(right) - height(left)` is kept within `[-1, 1]` for every node.
//!
//! # Insert
//!
//! A plain BST insert, followed by a pass back up the insertion path that
//! recomputes heights. The first node found out of balance is fixed with
//! one of four rotations, chosen by which way the new value went at the
//! node's heavy child:
//!
//! | Case        | Fix                                              |
//! |-------------|--------------------------------------------------|
//! | left-left   | rotate node right                                |
//! | right-right | rotate node left                                 |
//! | left-right  | rotate left child left, then rotate node right   |
//! | right-left  | rotate right child right, then rotate node left  |
//!
//! # Delete
//!
//! Removal works like [`BinarySearchTree::delete`](crate::bst::BinarySearchTree::delete)
//! (two-child nodes take their in-order successor's value), then every node
//! on the path from the removal point up to the root is rebalanced. Here the
//! case is picked from the heavy child's own balance factor, since there is
//! no inserted value to steer by.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `delete`   | O(log n)   |
//! | `contains` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::avl::AvlTree;
//!
//! let mut avl = AvlTree::new();
//! for v in [10, 20, 30, 40, 50, 25] {
//!     avl.insert(v);
//!     assert!(avl.is_balanced());
//! }
//! assert_eq!(avl.inorder(), vec![&10, &20, &25, &30, &40, &50]);
//! assert_eq!(avl.height(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::traits::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }
}

//   x                y
//  / \              / \
// a   y     =>     x   c
//    / \          / \
//   b   c        a   b
fn rotate_left<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn rotate_right<T>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Restores the AVL property at `node`, assuming both subtrees are valid
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance_factor();
    if balance < -1 {
        if node.left.as_ref().map_or(0, |l| l.balance_factor()) > 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance > 1 {
        if node.right.as_ref().map_or(0, |r| r.balance_factor()) < 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

/// A height-balanced binary search tree
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value`, returning false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        let (root, _) = Self::insert_at(self.root.take(), value, &mut inserted);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Inserts into the subtree at `link`, returning the new subtree root and
    /// how `value` compared with the root it descended from. `Equal` means
    /// the value landed here as a new leaf (or was a duplicate).
    fn insert_at(link: Link<T>, value: T, inserted: &mut bool) -> (Box<Node<T>>, Ordering) {
        let Some(mut node) = link else {
            *inserted = true;
            return (Box::new(Node::leaf(value)), Ordering::Equal);
        };

        let went = value.cmp(&node.value);
        let child_went = match went {
            Ordering::Less => {
                let (child, w) = Self::insert_at(node.left.take(), value, inserted);
                node.left = Some(child);
                w
            }
            Ordering::Greater => {
                let (child, w) = Self::insert_at(node.right.take(), value, inserted);
                node.right = Some(child);
                w
            }
            Ordering::Equal => return (node, Ordering::Equal),
        };

        node.update_height();
        let balance = node.balance_factor();
        let node = if balance < -1 {
            match child_went {
                Ordering::Less => rotate_right(node),
                Ordering::Greater => {
                    node.left = node.left.take().map(rotate_left);
                    rotate_right(node)
                }
                Ordering::Equal => node,
            }
        } else if balance > 1 {
            match child_went {
                Ordering::Greater => rotate_left(node),
                Ordering::Less => {
                    node.right = node.right.take().map(rotate_right);
                    rotate_left(node)
                }
                Ordering::Equal => node,
            }
        } else {
            node
        };
        (node, went)
    }

    /// Removes `value` and rebalances the path back to the root
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if the value is not present.
    pub fn delete(&mut self, value: &T) -> Result<(), CollectionError> {
        let mut removed = false;
        self.root = Self::delete_at(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
            Ok(())
        } else {
            Err(CollectionError::NotFound)
        }
    }

    fn delete_at(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::delete_at(node.left.take(), value, removed),
            Ordering::Greater => node.right = Self::delete_at(node.right.take(), value, removed),
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, right) => return right,
                    (left, None) => return left,
                    (left, Some(right)) => {
                        let (rest, successor) = Self::take_min(right);
                        node.value = successor;
                        node.left = left;
                        node.right = rest;
                    }
                }
            }
        }
        Some(rebalance(node))
    }

    /// Detaches the minimum of the subtree, returning the rebalanced
    /// remainder and the minimum value
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (rest, min) = Self::take_min(left);
                node.left = rest;
                (Some(rebalance(node)), min)
            }
        }
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

    /// Verifies the cached heights, the balance bound and the ordering of
    /// every node
    pub fn is_balanced(&self) -> bool {
        fn check<'a, T: Ord>(
            link: &'a Link<T>,
            lower: Option<&'a T>,
            upper: Option<&'a T>,
        ) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            if lower.is_some_and(|lo| node.value <= *lo) || upper.is_some_and(|hi| node.value >= *hi) {
                return None;
            }
            let left = check(&node.left, lower, Some(&node.value))?;
            let right = check(&node.right, Some(&node.value), upper)?;
            let expected = 1 + left.max(right);
            (node.height == expected && left.abs_diff(right) <= 1).then_some(expected)
        }
        check(&self.root, None, None).is_some()
    }
}

impl<T> AvlTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 when empty, 1 for a single node)
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Balance factor of the root, `height(right) - height(left)`
    pub fn root_balance(&self) -> isize {
        self.root.as_ref().map_or(0, |node| node.balance_factor())
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    pub fn inorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Node, left subtree, right subtree
    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                out.push(&node.value);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
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

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// In-order iterator over an [`AvlTree`]
pub struct Iter<'a, T> {
    // Depth is logarithmic, so this rarely spills to the heap
    stack: SmallVec<[&'a Node<T>; 16]>,
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

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
