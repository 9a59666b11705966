use crate::arena::{Entry, TypedArena};
use crate::red_black_tree::node::{Color, Node, Side};
use crate::red_black_tree::{Error, Result};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FusedIterator;

// Sentinel standing in for every absent child and for the parent of the root. It is always black.
const NIL: Entry = Entry::NULL;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InsertCase {
    UncleRed,
    Inner,
    Outer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EraseCase {
    SiblingRed,
    NephewsBlack,
    NearNephewRed,
    FarNephewRed,
}

pub struct Tree<T> {
    arena: TypedArena<Node<T>>,
    root: Entry,
    // Parent link of the sentinel. Only meaningful between a splice and the end of erase fixup.
    nil_parent: Entry,
    len: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: TypedArena::with_capacity(capacity),
            root: NIL,
            nil_parent: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn color(&self, entry: Entry) -> Color {
        if entry == NIL {
            Color::Black
        } else {
            self.arena[entry].color
        }
    }

    fn set_color(&mut self, entry: Entry, color: Color) {
        if entry != NIL {
            self.arena[entry].color = color;
        }
    }

    fn parent(&self, entry: Entry) -> Entry {
        if entry == NIL {
            self.nil_parent
        } else {
            self.arena[entry].parent
        }
    }

    fn set_parent(&mut self, entry: Entry, parent: Entry) {
        if entry == NIL {
            self.nil_parent = parent;
        } else {
            self.arena[entry].parent = parent;
        }
    }

    fn child(&self, entry: Entry, side: Side) -> Entry {
        self.arena[entry].child(side)
    }

    fn side_of(&self, entry: Entry, parent: Entry) -> Side {
        if self.child(parent, Side::Left) == entry {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Points whatever referenced `old` (the parent's child slot, or the root) at `new`.
    fn replace_child(&mut self, parent: Entry, old: Entry, new: Entry) {
        if parent == NIL {
            self.root = new;
        } else {
            let side = self.side_of(old, parent);
            *self.arena[parent].child_mut(side) = new;
        }
    }

    // Rotates the edge between `entry` and its child opposite `side`, moving `entry` down
    // towards `side`. Returns the root of the rotated subtree.
    fn rotate(&mut self, entry: Entry, side: Side) -> Entry {
        trace!("rotating {:?} {:?}", entry, side);
        let child = self.child(entry, !side);
        let inner = self.child(child, side);

        *self.arena[entry].child_mut(!side) = inner;
        if inner != NIL {
            self.arena[inner].parent = entry;
        }

        let parent = self.arena[entry].parent;
        self.arena[child].parent = parent;
        self.replace_child(parent, entry, child);

        *self.arena[child].child_mut(side) = entry;
        self.arena[entry].parent = child;
        child
    }

    // Replaces the subtree rooted at `old` with the subtree rooted at `new`.
    fn transplant(&mut self, old: Entry, new: Entry) {
        let parent = self.arena[old].parent;
        self.replace_child(parent, old, new);
        self.set_parent(new, parent);
    }

    fn minimum(&self, mut entry: Entry) -> Entry {
        while self.child(entry, Side::Left) != NIL {
            entry = self.child(entry, Side::Left);
        }
        entry
    }

    fn maximum(&self, mut entry: Entry) -> Entry {
        while self.child(entry, Side::Right) != NIL {
            entry = self.child(entry, Side::Right);
        }
        entry
    }

    fn find<V>(&self, key: &V) -> Entry
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != NIL {
            let node = &self.arena[curr];
            curr = match key.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return curr,
            };
        }
        NIL
    }

    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key) != NIL
    }

    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut curr = self.root;
        while curr != NIL {
            let node = &self.arena[curr];
            side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            parent = curr;
            curr = node.child(side);
        }

        let entry = self.arena.allocate(Node::new(value, parent));
        if parent == NIL {
            self.root = entry;
        } else {
            *self.arena[parent].child_mut(side) = entry;
        }

        self.insert_fixup(entry);
        self.len += 1;
        true
    }

    // precondition: the parent of `entry` is red, so its grandparent exists
    fn insert_case(&self, entry: Entry, parent: Entry, side: Side) -> InsertCase {
        let grandparent = self.arena[parent].parent;
        if self.color(self.child(grandparent, !side)) == Color::Red {
            InsertCase::UncleRed
        } else if self.child(parent, !side) == entry {
            InsertCase::Inner
        } else {
            InsertCase::Outer
        }
    }

    fn insert_fixup(&mut self, mut entry: Entry) {
        while self.color(self.parent(entry)) == Color::Red {
            let mut parent = self.arena[entry].parent;
            let grandparent = self.arena[parent].parent;
            let side = self.side_of(parent, grandparent);
            let case = self.insert_case(entry, parent, side);
            trace!("insert fixup at {:?}: {:?}", entry, case);

            match case {
                InsertCase::UncleRed => {
                    let uncle = self.child(grandparent, !side);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    entry = grandparent;
                },
                InsertCase::Inner | InsertCase::Outer => {
                    if case == InsertCase::Inner {
                        entry = parent;
                        parent = self.rotate(parent, side);
                    }
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate(grandparent, !side);
                },
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let entry = self.find(key);
        if entry == NIL {
            return None;
        }

        let (left, right, color) = {
            let node = &self.arena[entry];
            (node.left, node.right, node.color)
        };

        let (replacement, removed_color) = if left == NIL {
            self.transplant(entry, right);
            (right, color)
        } else if right == NIL {
            self.transplant(entry, left);
            (left, color)
        } else {
            let successor = self.minimum(right);
            let successor_color = self.arena[successor].color;
            let replacement = self.arena[successor].right;

            if self.arena[successor].parent == entry {
                self.set_parent(replacement, successor);
            } else {
                self.transplant(successor, replacement);
                self.arena[successor].right = right;
                self.arena[right].parent = successor;
            }

            self.transplant(entry, successor);
            self.arena[successor].left = left;
            self.arena[left].parent = successor;
            self.arena[successor].color = color;
            (replacement, successor_color)
        };

        let node = self.arena.free(&entry);
        if removed_color == Color::Black {
            self.erase_fixup(replacement);
        }
        self.nil_parent = NIL;
        self.len -= 1;
        Some(node.value)
    }

    // precondition: the subtree on `side` of `parent` is one black node short, so the sibling
    // subtree contains at least one black node
    fn erase_case(&self, parent: Entry, side: Side) -> EraseCase {
        let sibling = self.child(parent, !side);
        if self.color(sibling) == Color::Red {
            EraseCase::SiblingRed
        } else if self.color(self.child(sibling, !side)) == Color::Red {
            EraseCase::FarNephewRed
        } else if self.color(self.child(sibling, side)) == Color::Red {
            EraseCase::NearNephewRed
        } else {
            EraseCase::NephewsBlack
        }
    }

    fn erase_fixup(&mut self, mut entry: Entry) {
        while entry != self.root && self.color(entry) == Color::Black {
            let parent = self.parent(entry);
            let side = self.side_of(entry, parent);
            let sibling = self.child(parent, !side);
            let case = self.erase_case(parent, side);
            trace!("erase fixup at {:?}: {:?}", entry, case);

            entry = match case {
                EraseCase::SiblingRed => {
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate(parent, side);
                    entry
                },
                EraseCase::NephewsBlack => {
                    self.set_color(sibling, Color::Red);
                    parent
                },
                EraseCase::NearNephewRed => {
                    let near = self.child(sibling, side);
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, !side);
                    entry
                },
                EraseCase::FarNephewRed => {
                    let far = self.child(sibling, !side);
                    let parent_color = self.color(parent);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(parent, side);
                    self.root
                },
            };
        }
        self.set_color(entry, Color::Black);
    }

    pub fn min(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.arena[self.minimum(self.root)].value)
    }

    pub fn max(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.arena[self.maximum(self.root)].value)
    }

    pub fn clear(&mut self) {
        debug!("clearing red black tree with {} nodes", self.len);
        let mut stack = vec![(self.root, false)];
        while let Some((entry, visited)) = stack.pop() {
            if entry == NIL {
                continue;
            }
            if visited {
                self.arena.free(&entry);
            } else {
                let node = &self.arena[entry];
                let (left, right) = (node.left, node.right);
                stack.push((entry, true));
                stack.push((right, false));
                stack.push((left, false));
            }
        }
        // every block is vacant now, so drop them along with the free list
        self.arena.clear();
        self.root = NIL;
        self.nil_parent = NIL;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.root,
            stack: Vec::new(),
            remaining: self.len,
        }
    }

    /// Walks the whole tree and returns its black-height, or the first violated invariant.
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        if self.color(self.root) == Color::Red {
            return Err(Error::RedRoot);
        }
        if self.root != NIL && self.arena[self.root].parent != NIL {
            return Err(Error::BrokenParentLink);
        }
        let mut count = 0;
        let black_height = self.validate_subtree(self.root, None, None, &mut count)?;
        if count != self.len || count != self.arena.len() {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: count,
            });
        }
        Ok(black_height)
    }

    fn validate_subtree(
        &self,
        entry: Entry,
        lower: Option<&T>,
        upper: Option<&T>,
        count: &mut usize,
    ) -> Result<usize>
    where
        T: Ord,
    {
        if entry == NIL {
            return Ok(1);
        }
        let node = &self.arena[entry];
        *count += 1;

        if lower.map_or(false, |lower| *lower >= node.value)
            || upper.map_or(false, |upper| *upper <= node.value)
        {
            return Err(Error::OutOfOrder);
        }

        for &child in &[node.left, node.right] {
            if child == NIL {
                continue;
            }
            let child_node = &self.arena[child];
            if child_node.parent != entry {
                return Err(Error::BrokenParentLink);
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(Error::RedRedViolation);
            }
        }

        let left = self.validate_subtree(node.left, lower, Some(&node.value), count)?;
        let right = self.validate_subtree(node.right, Some(&node.value), upper, count)?;
        if left != right {
            return Err(Error::BlackHeightMismatch { left, right });
        }

        match node.color {
            Color::Black => Ok(left + 1),
            Color::Red => Ok(left),
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        debug!("copying red black tree with {} nodes", self.len);
        let mut tree = Tree::with_capacity(self.len);
        let mut stack = vec![(self.root, NIL, Side::Left)];
        while let Some((source, parent, side)) = stack.pop() {
            if source == NIL {
                continue;
            }
            let node = &self.arena[source];
            let entry = tree.arena.allocate(Node {
                value: node.value.clone(),
                color: node.color,
                parent,
                left: NIL,
                right: NIL,
            });
            if parent == NIL {
                tree.root = entry;
            } else {
                *tree.arena[parent].child_mut(side) = entry;
            }
            stack.push((node.right, entry, Side::Right));
            stack.push((node.left, entry, Side::Left));
        }
        tree.len = self.len;
        tree
    }
}

impl<T> IntoIterator for Tree<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            arena: self.arena,
            current: self.root,
            stack: Vec::new(),
            remaining: self.len,
        }
    }
}

/// Owning in-order traversal. Each node is released once its value is yielded.
pub struct IntoIter<T> {
    arena: TypedArena<Node<T>>,
    current: Entry,
    stack: Vec<Entry>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current != NIL {
            self.stack.push(self.current);
            self.current = self.arena[self.current].left;
        }
        let entry = self.stack.pop()?;
        let node = self.arena.free(&entry);
        self.current = node.right;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Borrowing in-order traversal.
pub struct Iter<'a, T> {
    arena: &'a TypedArena<Node<T>>,
    current: Entry,
    stack: Vec<Entry>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while self.current != NIL {
            self.stack.push(self.current);
            self.current = arena[self.current].left;
        }
        let node = &arena[self.stack.pop()?];
        self.current = node.right;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
