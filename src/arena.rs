//! Chunked slab allocator that addresses objects through stable handles.

use std::mem;
use std::ops::{Index, IndexMut};

/// A stable reference to an object inside a `TypedArena<T>`.
///
/// Handles stay valid until the object is freed and are never invalidated by other allocations,
/// so they can be stored inside the objects themselves to link them together.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk: usize,
    slot: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A slab allocator for a single type of object.
///
/// Objects are placed in fixed-capacity chunks, so growing the arena never moves existing
/// objects. Freed slots are kept on an intrusive free list and handed out again by the next
/// allocation.
///
/// # Examples
///
/// ```
/// use treap_dictionary::arena::TypedArena;
///
/// let mut arena = TypedArena::new(16);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    free_head: Option<Handle>,
    chunks: Vec<Vec<Slot<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn contains_handle(&self, handle: &Handle) -> bool {
        handle.chunk < self.chunks.len() && handle.slot < self.chunks[handle.chunk].len()
    }

    /// Constructs a new, empty `TypedArena<T>` holding `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// assert_eq!(arena.len(), 0);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Expected a positive chunk size.");
        TypedArena {
            free_head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Moves `value` into the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate("a");
    /// assert_eq!(arena.get(&x), Some(&"a"));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(handle) = self.free_head.take() {
            let vacant = mem::replace(
                &mut self.chunks[handle.chunk][handle.slot],
                Slot::Occupied(value),
            );
            match vacant {
                Slot::Vacant(next) => self.free_head = next,
                Slot::Occupied(_) => panic!("Expected the free list to point at a vacant slot."),
            }
            return handle;
        }

        if self.len > self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }

        let chunk = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk];
        last_chunk.push(Slot::Occupied(value));
        Handle {
            chunk,
            slot: last_chunk.len() - 1,
        }
    }

    /// Removes the object behind `handle` from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_dictionary::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        if !self.contains_handle(handle) {
            panic!("Error: attempting to free a handle outside of the arena.");
        }
        let old_slot = mem::replace(
            &mut self.chunks[handle.chunk][handle.slot],
            Slot::Vacant(self.free_head),
        );
        match old_slot {
            Slot::Vacant(next) => {
                self.chunks[handle.chunk][handle.slot] = Slot::Vacant(next);
                panic!("Error: attempting to free a vacant slot.");
            },
            Slot::Occupied(value) => {
                self.len -= 1;
                self.free_head = Some(*handle);
                value
            },
        }
    }

    /// Returns an immutable reference to the object behind `handle`, or `None` if the slot is
    /// vacant or out of bounds.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        if !self.contains_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk][handle.slot] {
            Slot::Occupied(ref value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object behind `handle`, or `None` if the slot is
    /// vacant or out of bounds.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        if !self.contains_handle(handle) {
            return None;
        }
        match self.chunks[handle.chunk][handle.slot] {
            Slot::Occupied(ref mut value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena and releases all chunks.
    pub fn clear(&mut self) {
        self.free_head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle does not refer to a live object.")
    }
}
