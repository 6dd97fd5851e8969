use crate::CowCell;

// === DeepClone === //

/// Payload types which can produce an independent copy of themselves.
///
/// Declaring this capability opts a type into [`CowCell::deep_cloning`], which wires
/// [`DeepClone::deep_clone`] in as the cell's copier.
///
/// The contract is the copier contract: the returned value must be newly allocated, semantically
/// equal to `self`, and share no mutable state with it. This is deliberately distinct from
/// [`Clone`]: a derived `Clone` over a type holding an `Rc` or other shared handle duplicates
/// the handle, which is exactly the aliasing a copy-on-write cell must not be fed.
pub trait DeepClone {
    /// Returns a new value equal to `self` and sharing no mutable state with it.
    fn deep_clone(&self) -> Self;
}

// === Convenience constructors === //

impl<T: DeepClone + 'static> CowCell<T> {
    /// Constructs a cell around `value`, copying through its [`DeepClone`] capability.
    pub fn deep_cloning(value: T) -> Self {
        Self::new(value, T::deep_clone)
    }
}

impl<T: Clone + 'static> CowCell<T> {
    /// Constructs a cell around `value`, copying through its [`Clone`] implementation.
    ///
    /// `Clone` is the platform-native copy protocol, and for most payloads (`String`, `Vec`,
    /// plain structs of such) its copies are fully independent. If `T`'s `Clone` merely
    /// duplicates a shared handle, it does not satisfy the copier contract; implement
    /// [`DeepClone`](crate::DeepClone) for such types and use [`CowCell::deep_cloning`] instead.
    pub fn cloning(value: T) -> Self {
        Self::new(value, T::clone)
    }
}

impl<T: Default + Clone + 'static> Default for CowCell<T> {
    fn default() -> Self {
        Self::cloning(T::default())
    }
}

impl<T: Clone + 'static> From<T> for CowCell<T> {
    fn from(value: T) -> Self {
        Self::cloning(value)
    }
}
