use rustc_hash::FxHashMap;
use crate::gl::GLuint;

/// Map from client-visible handle to the object it names.
///
/// Handle `0` is reserved and never stored. Fresh handles are handed out
/// monotonically, skipping any handle a client already created implicitly
/// (GL lets `glBind*` create an object for a never-generated name). Deleted
/// handles are not recycled until the counter wraps around.
///
/// # Example
///
/// ```ignore
/// let mut table: HandleTable<Renderbuffer> = HandleTable::new();
/// let a = table.allocate().unwrap();   // 1
/// table.get_or_insert(2);              // implicit creation by bind
/// let b = table.allocate().unwrap();   // 3 (2 is taken)
/// table.remove(a);
/// assert!(!table.contains(a));
/// ```
pub struct HandleTable<T> {
    objects: FxHashMap<GLuint, T>,
    next_id: GLuint,
}

impl<T: Default> HandleTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            objects: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Create a default object under a fresh handle
    ///
    /// Returns `None` only when every non-zero handle is in use.
    pub fn allocate(&mut self) -> Option<GLuint> {
        if self.objects.len() >= (GLuint::MAX as usize) {
            return None;
        }

        loop {
            let id = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);
            if self.next_id == 0 {
                self.next_id = 1;
            }
            if !self.objects.contains_key(&id) {
                self.objects.insert(id, T::default());
                return Some(id);
            }
        }
    }

    /// Fetch the object for `id`, creating a default one if it does not exist
    ///
    /// `id` must not be 0; callers treat 0 as "no object" before reaching here.
    pub fn get_or_insert(&mut self, id: GLuint) -> &mut T {
        debug_assert!(id != 0, "handle 0 is reserved");
        self.objects.entry(id).or_default()
    }
}

impl<T> HandleTable<T> {
    /// `id` is non-zero and names a live object
    pub fn contains(&self, id: GLuint) -> bool {
        id != 0 && self.objects.contains_key(&id)
    }

    pub fn get(&self, id: GLuint) -> Option<&T> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: GLuint) -> Option<&mut T> {
        self.objects.get_mut(&id)
    }

    /// Remove the object, handing it back so the caller controls when it drops
    pub fn remove(&mut self, id: GLuint) -> Option<T> {
        self.objects.remove(&id)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over `(handle, object)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (GLuint, &T)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    /// Iterate mutably over `(handle, object)` pairs in unspecified order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GLuint, &mut T)> {
        self.objects.iter_mut().map(|(id, obj)| (*id, obj))
    }
}

impl<T: Default> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "handle_table_tests.rs"]
mod tests;
