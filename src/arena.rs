//! Slot allocator for objects of a single type, addressed by stable indices.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// `Entry::NULL` is reserved: the arena never returns it from `allocate`, so callers can use it
/// as a null link.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    index: usize,
}

impl Entry {
    /// The reserved entry that never refers to an allocated object.
    pub const NULL: Entry = Entry { index: usize::MAX };

    /// Returns `true` if this is the reserved null entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::{Entry, TypedArena};
    ///
    /// let mut arena = TypedArena::new();
    /// assert!(Entry::NULL.is_null());
    /// assert!(!arena.allocate(0).is_null());
    /// ```
    pub fn is_null(self) -> bool {
        self == Entry::NULL
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A simple allocator that only allocates a single type of object.
///
/// Freed slots are threaded onto a free list and handed out again before the underlying `Vec`
/// grows, so an `Entry` stays valid until it is freed. All objects inside the arena are dropped
/// when the arena is dropped or cleared.
///
/// # Examples
///
/// ```
/// use classic_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// ```
pub struct TypedArena<T> {
    head: Option<usize>,
    blocks: Vec<Block<T>>,
    len: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new();
    /// ```
    pub fn new() -> Self {
        TypedArena {
            head: None,
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::with_capacity(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            head: None,
            blocks: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Allocates an object in the typed arena and returns an `Entry` that can later be used to
    /// retrieve references to the object or to deallocate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                Entry {
                    index: self.blocks.len() - 1,
                }
            },
            Some(index) => {
                let vacant_block = mem::replace(&mut self.blocks[index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next_index) => self.head = next_index,
                    Block::Occupied(_) => panic!("Expected a vacant block on the free list."),
                }
                Entry { index }
            },
        }
    }

    /// Deallocates an object in the typed arena and returns the object.
    ///
    /// # Panics
    ///
    /// Panics if entry corresponds to an invalid or vacant block.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if entry.index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[entry.index], Block::Vacant(self.head));
        match old_block {
            Block::Vacant(next_index) => {
                self.blocks[entry.index] = Block::Vacant(next_index);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(entry.index);
                value
            },
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::{Entry, TypedArena};
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// assert_eq!(arena.get(&Entry::NULL), None);
    /// ```
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        match self.blocks.get(entry.index) {
            Some(Block::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to an allocated object.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(&x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        match self.blocks.get_mut(entry.index) {
            Some(Block::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of allocated objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// arena.allocate(1);
    /// arena.free(&x);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no objects are allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena and invalidates all outstanding entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn clear(&mut self) {
        self.head = None;
        self.blocks.clear();
        self.len = 0;
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, TypedArena};

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: TypedArena<u32> = TypedArena::new();
        arena.free(&Entry { index: 0 });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.free(&entry);
        arena.free(&entry);
    }

    #[test]
    #[should_panic]
    fn test_free_null() {
        let mut arena = TypedArena::new();
        arena.allocate(0);
        arena.free(&Entry::NULL);
    }

    #[test]
    fn test_allocate() {
        let mut arena = TypedArena::new();
        assert_eq!(arena.allocate(0), Entry { index: 0 });
        assert_eq!(arena.allocate(0), Entry { index: 1 });
        assert_eq!(arena.allocate(0), Entry { index: 2 });
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_blocks() {
        let mut arena = TypedArena::new();
        let first = arena.allocate(0);
        let second = arena.allocate(1);
        assert_eq!(arena.free(&first), 0);
        assert_eq!(arena.free(&second), 1);
        assert!(arena.is_empty());

        // most recently freed block is reused first
        assert_eq!(arena.allocate(2), second);
        assert_eq!(arena.allocate(3), first);
        assert_eq!(arena.allocate(4), Entry { index: 2 });
    }

    #[test]
    fn test_get() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        assert_eq!(arena.get(&entry), Some(&0));
    }

    #[test]
    fn test_get_invalid_block() {
        let arena: TypedArena<u32> = TypedArena::new();
        assert_eq!(arena.get(&Entry { index: 0 }), None);
        assert_eq!(arena.get(&Entry::NULL), None);
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.free(&entry);
        assert_eq!(arena.get(&entry), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        *arena.get_mut(&entry).unwrap() = 1;
        assert_eq!(arena.get(&entry), Some(&1));
    }

    #[test]
    fn test_get_mut_vacant_block() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.free(&entry);
        assert_eq!(arena.get_mut(&entry), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = TypedArena::new();
        let entry = arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&entry), None);
        assert_eq!(arena.allocate(2), Entry { index: 0 });
    }
}
