//! A BST whose nodes know their parent. Nodes live in a flat arena owned by the [`Tree`] and
//! link to each other by [`NodeId`] so there are no reference cycles between parents and
//! children. The tree never rebalances and equal values always go to the right.
//!
//! # Examples
//!
//! ```
//! use linked_bst::arena::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! let one = tree.insert_value(1);
//! let two = tree.insert_value(2);
//! assert_eq!(tree.search(&1), Some(one));
//!
//! // Nodes can be walked in order without a traversal.
//! assert_eq!(tree.successor(one), Some(two));
//! assert_eq!(tree.successor(two), None);
//!
//! // Deleting hands back the node that was unlinked.
//! assert_eq!(tree.remove(&1), Some(one));
//! assert_eq!(tree.in_order(tree.root()), vec![2]);
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Index;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::util::Side;

/// The identity of a node inside a [`Tree`]. Two nodes holding equal values are still different
/// nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// A single value and its links. A node with no parent and no children is "standalone": either
/// it was never inserted or it has been deleted.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node this one hangs from. `None` for the root and for standalone nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The root of the subtree holding smaller values.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of the subtree holding greater or equal values.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn is_unlinked(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// A Binary Search Tree with parent links. Values smaller than a node go in its left subtree and
/// values greater than *or equal to* it go in its right subtree.
///
/// Every node ever created with [`make_node`][Tree::make_node] stays in the arena, attached or
/// not, so a [`NodeId`] from this tree is always valid for it. Navigation methods panic when given
/// an id from some other tree.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    /// How many nodes are reachable from `root`.
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.node(id)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generates a new, empty `Tree` with room for `capacity` nodes before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Creates a standalone node holding `value`. It isn't part of the tree until it is passed to
    /// [`insert`][Tree::insert].
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let node = tree.make_node(7);
    ///
    /// assert!(!tree.is_attached(node));
    /// assert_eq!(tree.search(&7), None);
    ///
    /// tree.insert(node).unwrap();
    /// assert_eq!(tree.search(&7), Some(node));
    /// ```
    pub fn make_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The number of nodes currently in the tree. Standalone nodes aren't counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks up a node by id. `None` if the id didn't come from this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// The value held by the given node.
    ///
    /// ## Panics
    ///
    /// When `id` didn't come from this tree.
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    /// Whether the node is currently reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.root == Some(id) || self.get(id).map_or(false, |n| n.parent.is_some())
    }

    /// The number of edges between the root and this exact node, found by following parent links.
    /// `None` when the node isn't in the tree.
    ///
    /// Unlike [`depth_of_value`][Tree::depth_of_value], this tells apart nodes holding equal
    /// values.
    ///
    /// ## Panics
    ///
    /// When `id` didn't come from this tree.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        if !self.is_attached(id) {
            return None;
        }

        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            current = parent;
            depth += 1;
        }

        Some(depth)
    }

    /// The height of the subtree rooted at `node`: the number of edges on its longest downward
    /// path. A leaf has height `0` and an absent node has height `-1`, so an empty tree's root has
    /// height `-1`.
    ///
    /// The node doesn't need to be attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(tree.root()), -1);
    ///
    /// tree.insert_value(2);
    /// assert_eq!(tree.height(tree.root()), 0);
    ///
    /// tree.insert_value(1);
    /// tree.insert_value(3);
    /// assert_eq!(tree.height(tree.root()), 1);
    /// ```
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn height(&self, node: Option<NodeId>) -> isize {
        let Some(node) = node else {
            return -1;
        };

        let mut height = 0;
        let mut stack = vec![(node, 0)];
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = self.node(id);
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, level + 1)),
            );
        }

        height
    }

    /// The node holding the smallest value in the subtree rooted at `node`.
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn minimum(&self, node: NodeId) -> NodeId {
        self.extreme(node, Side::Left)
    }

    /// The node holding the largest value in the subtree rooted at `node`.
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn maximum(&self, node: NodeId) -> NodeId {
        self.extreme(node, Side::Right)
    }

    /// The node that comes right after `node` in sorted order, or `None` if `node` holds the
    /// largest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 4].into_iter().collect();
    /// let four = tree.search(&4).unwrap();
    /// let eight = tree.search(&8).unwrap();
    ///
    /// // No right child so we climb until we arrive from a left child.
    /// assert_eq!(tree.successor(four), tree.search(&5));
    /// assert_eq!(tree.successor(eight), None);
    /// ```
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.neighbor(node, Side::Right)
    }

    /// The node that comes right before `node` in sorted order, or `None` if `node` holds the
    /// smallest value.
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.neighbor(node, Side::Left)
    }

    /// Walks the subtree rooted at `node` left, value, right.
    ///
    /// On a valid tree the result is sorted.
    pub fn in_order(&self, node: Option<NodeId>) -> Vec<T>
    where
        T: Clone,
    {
        let mut order = Vec::new();
        let mut stack = Vec::new();
        let mut current = node;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = self.node(id);
            order.push(node.value.clone());
            current = node.right;
        }

        order
    }

    /// Walks the subtree rooted at `node` value, left, right.
    pub fn pre_order(&self, node: Option<NodeId>) -> Vec<T>
    where
        T: Clone,
    {
        let mut order = Vec::new();
        let mut stack: Vec<_> = node.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            order.push(node.value.clone());
            // Right first so left is popped first.
            stack.extend(node.right);
            stack.extend(node.left);
        }

        order
    }

    /// Walks the subtree rooted at `node` left, right, value.
    pub fn post_order(&self, node: Option<NodeId>) -> Vec<T>
    where
        T: Clone,
    {
        // value-right-left, reversed.
        let mut order = Vec::new();
        let mut stack: Vec<_> = node.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            order.push(node.value.clone());
            stack.extend(node.left);
            stack.extend(node.right);
        }
        order.reverse();

        order
    }

    /// Iterates over the values in the tree in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.root.map(|root| self.minimum(root)),
            remaining: self.len,
        }
    }

    /// Finds the node holding a value equal to `value`. When several nodes hold it, this is the
    /// one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let one = tree.insert_value(1);
    ///
    /// assert_eq!(tree.search(&1), Some(one));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Whether any node in the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// The number of edges between the root and the first node found holding `value`, re-walking
    /// the path by comparing values. `None` if no node holds it.
    ///
    /// With duplicate values this reports the depth of whichever equal node is met first, which
    /// isn't necessarily the node a caller has in hand. Use [`depth`][Tree::depth] for that.
    pub fn depth_of_value(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut depth = 0;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right,
            };
            depth += 1;
        }

        None
    }

    /// Attaches a standalone node as a new leaf and returns its id. If the tree is empty the node
    /// becomes the root. Equal values are placed to the right of the existing ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    /// use linked_bst::Error;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.make_node(2);
    /// let leaf = tree.make_node(1);
    ///
    /// assert_eq!(tree.insert(root), Ok(root));
    /// assert_eq!(tree.insert(leaf), Ok(leaf));
    /// assert_eq!(tree[leaf].parent(), Some(root));
    ///
    /// // A node can't be linked in twice.
    /// assert_eq!(tree.insert(leaf), Err(Error::AlreadyLinked(leaf)));
    /// ```
    ///
    /// ## Errors
    ///
    /// [`Error::UnknownNode`] if `node` didn't come from this tree and [`Error::AlreadyLinked`] if
    /// it is already part of it. The tree is left untouched in both cases.
    pub fn insert(&mut self, node: NodeId) -> Result<NodeId>
    where
        T: Ord,
    {
        let standalone = self.get(node).ok_or(Error::UnknownNode(node))?;
        if self.root == Some(node) || !standalone.is_unlinked() {
            return Err(Error::AlreadyLinked(node));
        }

        self.attach(node);
        Ok(node)
    }

    /// Creates a node for `value` and inserts it, returning its id.
    pub fn insert_value(&mut self, value: T) -> NodeId
    where
        T: Ord,
    {
        let node = self.make_node(value);
        self.attach(node);
        node
    }

    /// Deletes the node found by searching for `node`'s *value* and returns it. Nothing happens
    /// and `node` itself is returned when no node holds that value, which means the returned id
    /// only tells you what was deleted if it [is no longer attached][Tree::is_attached].
    ///
    /// Since the lookup is by value, deleting one of several equal nodes removes the one closest
    /// to the root rather than necessarily `node`.
    ///
    /// ## Panics
    ///
    /// When `node` didn't come from this tree.
    pub fn delete(&mut self, node: NodeId) -> NodeId
    where
        T: Ord,
    {
        match self.search(&self.node(node).value) {
            Some(found) => {
                self.detach(found);
                found
            }
            None => {
                debug!("delete of {:?} found no matching node", node);
                node
            }
        }
    }

    /// Deletes the node holding `value` (the one closest to the root if there are several) and
    /// returns its id. The node is left standalone and can be inserted again.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::arena::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// let five = tree.search(&5).unwrap();
    ///
    /// assert_eq!(tree.remove(&5), Some(five));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.in_order(tree.root()), vec![1, 3, 4, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let found = self.search(value)?;
        self.detach(found);
        Some(found)
    }

    /// Verifies the order invariant and that every link is mirrored by a parent link.
    ///
    /// ## Errors
    ///
    /// The first violation found.
    pub fn check_invariants(&self) -> Result<()>
    where
        T: Ord,
    {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                expected => Err(Error::CountMismatch { expected, found: 0 }),
            };
        };
        if self.get(root).ok_or(Error::UnknownNode(root))?.parent.is_some() {
            return Err(Error::RootHasParent(root));
        }

        // Each entry carries the bounds its value must respect: `lower <= value < upper`.
        let mut stack: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        let mut found = 0;
        while let Some((id, lower, upper)) = stack.pop() {
            found += 1;
            if found > self.len {
                return Err(Error::CountMismatch {
                    expected: self.len,
                    found,
                });
            }

            let node = self.get(id).ok_or(Error::UnknownNode(id))?;
            if lower.map_or(false, |lower| node.value < *lower)
                || upper.map_or(false, |upper| node.value >= *upper)
            {
                return Err(Error::OrderViolation(id));
            }

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                if self.get(child).ok_or(Error::UnknownNode(child))?.parent != Some(id) {
                    return Err(Error::BrokenParentLink { child, parent: id });
                }
                match side {
                    Side::Left => stack.push((child, lower, Some(&node.value))),
                    Side::Right => stack.push((child, Some(&node.value), upper)),
                }
            }
        }

        if found == self.len {
            Ok(())
        } else {
            Err(Error::CountMismatch {
                expected: self.len,
                found,
            })
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id)
            .unwrap_or_else(|| panic!("{}", Error::UnknownNode(id)))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("{}", Error::UnknownNode(id)))
    }

    /// Follows `side` children until there are none.
    fn extreme(&self, mut node: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.node(node).child(side) {
            node = child;
        }
        node
    }

    /// The in-order neighbor of `node` on `side`: the successor for `Side::Right` and the
    /// predecessor for `Side::Left`.
    fn neighbor(&self, node: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.node(node).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut current = node;
        let mut ancestor = self.node(node).parent;
        while let Some(parent) = ancestor {
            if self.node(parent).child(side) != Some(current) {
                break;
            }
            current = parent;
            ancestor = self.node(parent).parent;
        }

        ancestor
    }

    /// Which slot of its parent `node` occupies. `None` for the root.
    fn side_in_parent(&self, node: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.node(node).parent?;
        if self.node(parent).left == Some(node) {
            Some((parent, Side::Left))
        } else {
            Some((parent, Side::Right))
        }
    }

    /// Links an unlinked node in as a leaf.
    fn attach(&mut self, node: NodeId)
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            trace!("{:?} becomes the root", node);
            self.root = Some(node);
            self.len += 1;
            return;
        };

        loop {
            let side = if self.node(node).value < self.node(current).value {
                Side::Left
            } else {
                Side::Right
            };
            match self.node(current).child(side) {
                Some(child) => current = child,
                None => {
                    *self.node_mut(current).child_mut(side) = Some(node);
                    self.node_mut(node).parent = Some(current);
                    break;
                }
            }
        }
        trace!("attached {:?} under {:?}", node, current);
        self.len += 1;

        if cfg!(debug_assertions) {
            let parent = self.node(current);
            assert!(parent.left == Some(node) || parent.right == Some(node));
            assert_eq!(self.node(node).parent, Some(current));
        }
    }

    /// Replaces the subtree rooted at `replace` with the one rooted at `replace_with` in
    /// `replace`'s parent (or at the root). `replace`'s own links are left alone.
    fn transplant(&mut self, replace: NodeId, replace_with: Option<NodeId>) {
        trace!("transplanting {:?} with {:?}", replace, replace_with);
        let parent = self.node(replace).parent;
        match self.side_in_parent(replace) {
            None => self.root = replace_with,
            Some((parent, side)) => *self.node_mut(parent).child_mut(side) = replace_with,
        }

        if let Some(replace_with) = replace_with {
            self.node_mut(replace_with).parent = parent;
        }
    }

    /// Unlinks an attached node, splicing its children back into the tree.
    fn detach(&mut self, node: NodeId) {
        let (left, right) = (self.node(node).left, self.node(node).right);
        match (left, right) {
            (None, _) => self.transplant(node, right),
            (Some(_), None) => self.transplant(node, left),
            (Some(left), Some(right)) => {
                // With a right child the successor is the smallest node under it.
                let successor = self.minimum(right);
                if successor != right {
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                }

                self.transplant(node, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
            }
        }

        let detached = self.node_mut(node);
        detached.parent = None;
        detached.left = None;
        detached.right = None;
        self.len -= 1;
        trace!("detached {:?}", node);

        if cfg!(debug_assertions) {
            if let Some(root) = self.root {
                assert!(self.node(root).parent.is_none());
            }
            assert_eq!(self.root.is_none(), self.len == 0);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for value in iter {
            self.insert_value(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A sorted iterator over the values of a [`Tree`], created by [`Tree::iter`]. It steps from node
/// to node with [`Tree::successor`] so it needs no stack.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.successor(current);
        self.remaining -= 1;
        Some(self.tree.value(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a multiset of values, checking the tree's
    /// invariants after every step.
    fn do_ops<V>(ops: &[Op<V>], bst: &mut Tree<V>, counts: &mut BTreeMap<V, usize>)
    where
        V: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    bst.insert_value(v.clone());
                    *counts.entry(v.clone()).or_default() += 1;
                }
                Op::Remove(v) => {
                    let removed = bst.remove(v);
                    match counts.get_mut(v) {
                        Some(count) => {
                            let removed = removed.expect("value was in the tree");
                            assert!(!bst.is_attached(removed));
                            *count -= 1;
                            if *count == 0 {
                                counts.remove(v);
                            }
                        }
                        None => assert_eq!(removed, None),
                    }
                }
                Op::Walk => {
                    let expected: Vec<_> = counts
                        .iter()
                        .flat_map(|(v, count)| std::iter::repeat(v.clone()).take(*count))
                        .collect();
                    assert_eq!(bst.in_order(bst.root()), expected);
                }
            }
            assert_eq!(bst.check_invariants(), Ok(()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut counts = BTreeMap::new();

            do_ops(&ops, &mut tree, &mut counts);
            tree.len() == counts.values().sum::<usize>()
        }
    }

    quickcheck::quickcheck! {
        fn neighbors_follow_sorted_order(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let Some(root) = tree.root() else {
                return true;
            };

            let mut forward = Vec::new();
            let mut current = Some(tree.minimum(root));
            while let Some(id) = current {
                forward.push(id);
                current = tree.successor(id);
            }

            let mut backward = Vec::new();
            let mut current = Some(tree.maximum(root));
            while let Some(id) = current {
                backward.push(id);
                current = tree.predecessor(id);
            }
            backward.reverse();

            forward.len() == tree.len() && forward == backward
        }
    }
}
