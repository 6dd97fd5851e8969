use std::rc::Rc;

use derive_where::derive_where;

// === OwnCell === //

/// The single-slot cell backing a [`CowCell`](crate::CowCell).
///
/// An `OwnCell` is immutable once constructed: "replacing" a wrapper's contents means building a
/// fresh cell and dropping the handle to the old one. Cloning duplicates the *handle* to the slot,
/// bumping the reference count without touching the payload.
///
/// The crate never hands out [`Weak`](std::rc::Weak) references to a cell, so a strong count of
/// one is a complete uniqueness test and [`OwnCell::get_mut`] cannot fail on a cell which just
/// reported unique.
#[derive_where(Clone)]
pub(crate) struct OwnCell<T> {
    value: Rc<T>,
}

impl<T> OwnCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(value),
        }
    }

    /// Whether exactly one live handle refers to this cell at the moment of the call.
    ///
    /// This is a point-in-time query, not a lock: the answer is stale as soon as the cell's owner
    /// is cloned.
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.value) == 1
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Borrows the payload mutably, returning `None` if the cell is shared.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.value)
    }

    /// Moves the payload out of the cell, handing the cell back if it is shared.
    pub fn try_unwrap(self) -> Result<T, Self> {
        Rc::try_unwrap(self.value).map_err(|value| Self { value })
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.value, &b.value)
    }
}
