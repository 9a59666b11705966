use crate::arena::Entry;
use std::ops::Not;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree. Absent links are `Entry::NULL`.
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub parent: Entry,
    pub left: Entry,
    pub right: Entry,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Entry) -> Self {
        Node {
            value,
            color: Color::Red,
            parent,
            left: Entry::NULL,
            right: Entry::NULL,
        }
    }

    pub fn child(&self, side: Side) -> Entry {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Entry {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
