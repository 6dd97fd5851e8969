//! Copy-on-write value semantics for expensive-to-copy payloads.
//!
//! A [`CowCell`] holds its payload behind a shared, reference-counted slot and presents value
//! semantics to its owners: cloning the cell is O(1) and shares storage, reading is free, and a
//! deep copy happens only at the moment a *shared* cell is first mutated.
//!
//! ```
//! use cowcell::CowCell;
//!
//! let mut document = CowCell::cloning(vec!["intro".to_string()]);
//!
//! // Taking a snapshot is cheap: both cells share one slot.
//! let snapshot = document.clone();
//! assert!(CowCell::ptr_eq(&document, &snapshot));
//!
//! // The first mutation diverges the mutating side onto its own copy...
//! CowCell::make_mut(&mut document).push("body".to_string());
//!
//! // ...leaving the snapshot untouched.
//! assert_eq!(document.len(), 2);
//! assert_eq!(snapshot.len(), 1);
//! ```
//!
//! # Motivation
//!
//! Programs routinely hand out logical copies of a large object (a parsed document, say, or a
//! configuration tree) of which most are never mutated. Copying eagerly pays for every copy up
//! front; sharing through [`Rc`](std::rc::Rc) alone gives *reference* semantics, where a
//! mutation through one handle is visible through all of them. A `CowCell` sits in between: it
//! shares like `Rc` and diverges like a value, deciding between the two at each mutable access
//! by asking a single question: is this slot held by anyone else right now?
//!
//! The deciding query is [`Rc::strong_count`](std::rc::Rc::strong_count) on the cell's slot, so
//! the check costs a load, not a traversal. The deep copy itself goes through a *copier* function
//! supplied when the cell is constructed, because the payload's own [`Clone`] is not always the
//! right thing: a `#[derive(Clone)]` over a type with an `Rc` field duplicates the handle, not
//! the data behind it, which is precisely the aliasing a copy-on-write cell must avoid feeding
//! itself.
//!
//! # Reading and mutating
//!
//! Reads go through [`Deref`](std::ops::Deref) and never copy or change which slot the cell
//! references. Mutable access goes through [`CowCell::make_mut`], which copies exactly when the
//! slot is shared. [`CowCell::is_unique`] exposes the underlying
//! ownership query, which is also the cheapest way to predict whether the next `make_mut` will
//! pay for a copy.
//!
//! ```
//! use cowcell::CowCell;
//!
//! let mut text = CowCell::cloning(String::from("foo"));
//! assert!(CowCell::is_unique(&text));
//!
//! // Unique, so mutable access hands out the payload in place.
//! CowCell::make_mut(&mut text).push_str("bar");
//! assert!(CowCell::is_unique(&text));
//!
//! let fork = text.clone();
//! assert!(!CowCell::is_unique(&text));
//!
//! // Shared, so mutable access diverges first.
//! CowCell::make_mut(&mut text).push_str("baz");
//! assert_eq!(*text, "foobarbaz");
//! assert_eq!(*fork, "foobar");
//! assert!(CowCell::is_unique(&text) && CowCell::is_unique(&fork));
//! ```
//!
//! # Choosing a copier
//!
//! [`CowCell::new`] accepts any `Fn(&T) -> T`, and the two convenience constructors cover the
//! common cases: [`CowCell::cloning`] uses the payload's [`Clone`] implementation, and
//! [`CowCell::deep_cloning`] uses the [`DeepClone`] capability for types whose `Clone` would be
//! a shallow copy.
//!
//! ```
//! use std::rc::Rc;
//!
//! use cowcell::{CowCell, DeepClone};
//!
//! struct Blob {
//!     bytes: Rc<Vec<u8>>,
//! }
//!
//! impl DeepClone for Blob {
//!     fn deep_clone(&self) -> Self {
//!         Self {
//!             bytes: Rc::new((*self.bytes).clone()),
//!         }
//!     }
//! }
//!
//! let mut blob = CowCell::deep_cloning(Blob {
//!     bytes: Rc::new(vec![1, 2, 3]),
//! });
//!
//! let archived = blob.clone();
//! CowCell::make_mut(&mut blob).bytes = Rc::new(vec![4, 5, 6]);
//!
//! assert_eq!(*archived.bytes, vec![1, 2, 3]);
//! assert_eq!(*blob.bytes, vec![4, 5, 6]);
//! ```
//!
//! Whatever form the copier takes, it must return a newly allocated value equal to its input and
//! sharing no mutable state with it. The cell cannot check this; a copier which returns aliased
//! state silently turns value semantics back into reference semantics.
//!
//! # Limitations
//!
//! `CowCell` is single-threaded: the slot is `Rc`-backed, so the cell is `!Send + !Sync` and the
//! compiler rejects cross-thread use outright. It is also not a persistent collection: the
//! payload is copied wholesale on divergence, with no structural sharing of its sub-parts. And
//! if the payload has interior mutability, writes through the read accessor mutate the shared
//! slot in place for every sibling; that escape hatch is occasionally useful, but it is exactly
//! as value-unsafe as it sounds.

mod cell;

mod cow;
pub use self::cow::*;

mod copying;
pub use self::copying::*;
