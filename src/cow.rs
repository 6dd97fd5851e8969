use std::{fmt, ops::Deref, rc::Rc};

use derive_where::derive_where;

use crate::cell::OwnCell;

// === CowCell === //

pub(crate) type Copier<T> = Rc<dyn Fn(&T) -> T>;

/// A copy-on-write cell presenting value semantics over a shared, reference-counted payload.
///
/// A `CowCell` owns one slot holding a payload of type `T` plus a *copier* fixed at construction
/// time. Cloning a `CowCell` is O(1): the clone shares the original's slot. The copier only runs
/// when a wrapper is mutated through [`CowCell::make_mut`] while its slot is shared, at which
/// point that wrapper (and only that wrapper) moves onto a freshly copied slot.
///
/// ```
/// use cowcell::CowCell;
///
/// let mut text = CowCell::cloning(String::from("foo"));
/// let snapshot = text.clone();
///
/// assert!(CowCell::ptr_eq(&text, &snapshot));
///
/// CowCell::make_mut(&mut text).push_str("bar");
///
/// assert_eq!(*text, "foobar");
/// assert_eq!(*snapshot, "foo");
/// ```
///
/// Reading goes through [`Deref`], which never inspects ownership and never copies. All other
/// operations are associated functions (`CowCell::make_mut(&mut cell)`) so that they can never
/// shadow a method of `T`.
///
/// The copier must return a newly allocated value semantically equal to its input and must not
/// hand back anything aliasing the input's mutable internals. The cell performs no validation:
/// a copier which breaks this contract makes sibling wrappers observe each other's mutations,
/// which is a caller bug rather than a detectable failure. See [`DeepClone`](crate::DeepClone)
/// for the capability-based way to supply a well-behaved copier.
///
/// `CowCell` is backed by [`Rc`], so it is single-threaded (`!Send + !Sync`). Callers who need
/// cross-thread value semantics must wrap their own synchronization around an owning container.
#[derive_where(Clone)]
pub struct CowCell<T> {
    cell: OwnCell<T>,
    copier: Copier<T>,
}

impl<T> CowCell<T> {
    /// Constructs a cell around `value`, with `copier` stored for the cell's lifetime.
    ///
    /// The copier is invoked at most once per divergence, and only ever from
    /// [`CowCell::make_mut`] or [`CowCell::into_inner`] on a shared cell.
    pub fn new(value: T, copier: impl 'static + Fn(&T) -> T) -> Self {
        Self {
            cell: OwnCell::new(value),
            copier: Rc::new(copier),
        }
    }

    /// Borrows the payload for reading. Same as [`Deref::deref`].
    ///
    /// This never copies and never changes which slot the cell references, regardless of how many
    /// wrappers share the slot. If `T` has interior mutability, writing through this borrow
    /// mutates the shared payload in place, visibly to every sibling, which forfeits value
    /// semantics by the same convention as any other shared-state mutation.
    ///
    /// Note that this is an associated function, not a method.
    pub fn get(me: &Self) -> &T {
        me.cell.get()
    }

    /// Borrows the payload for mutation, first diverging onto a fresh copy if the slot is shared.
    ///
    /// If this wrapper is the slot's only owner, the payload is returned as-is: no copy, no new
    /// slot. Otherwise the copier produces a new payload, this wrapper rebinds to a fresh slot
    /// around it, and the borrow points into that slot; siblings keep the original, unmutated
    /// payload. Either way, the slot is uniquely held by this wrapper when the borrow is handed
    /// out.
    pub fn make_mut(me: &mut Self) -> &mut T {
        if !me.cell.is_unique() {
            me.cell = OwnCell::new((me.copier)(me.cell.get()));
        }

        match me.cell.get_mut() {
            Some(value) => value,
            None => unreachable!("slot is uniquely held after a copy-on-write"),
        }
    }

    /// Whether this wrapper is currently the only owner of its slot.
    ///
    /// `true` means the next [`CowCell::make_mut`] will not copy. The answer is momentary: it is
    /// invalidated by the next `clone` of this wrapper.
    pub fn is_unique(me: &Self) -> bool {
        me.cell.is_unique()
    }

    /// Whether two wrappers currently share one slot.
    ///
    /// Sharing implies equality of the observed payloads; the converse does not hold once
    /// wrappers have diverged.
    pub fn ptr_eq(me: &Self, other: &Self) -> bool {
        OwnCell::ptr_eq(&me.cell, &other.cell)
    }

    /// Replaces this wrapper's payload with `value`.
    ///
    /// A fresh slot is always allocated, so siblings sharing the old slot keep observing the old
    /// payload. The copier is not involved: `value` is taken by move, which already guarantees
    /// that nothing else aliases it.
    pub fn set(me: &mut Self, value: T) {
        me.cell = OwnCell::new(value);
    }

    /// Moves the payload out of the wrapper.
    ///
    /// If the slot is uniquely held, the payload is returned without copying. If it is shared,
    /// the copier produces the returned value and the sibling wrappers keep the original.
    pub fn into_inner(me: Self) -> T {
        match me.cell.try_unwrap() {
            Ok(value) => value,
            Err(cell) => (me.copier)(cell.get()),
        }
    }
}

impl<T> Deref for CowCell<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cell.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for CowCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell.get().fmt(f)
    }
}

impl<T: PartialEq> PartialEq for CowCell<T> {
    fn eq(&self, other: &Self) -> bool {
        // Slot identity is a cheap witness for payload equality.
        Self::ptr_eq(self, other) || self.cell.get() == other.cell.get()
    }
}

impl<T: Eq> Eq for CowCell<T> {}
