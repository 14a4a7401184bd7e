//! Shared callback handles for the slider's output boundary.
//!
//! ## Usage
//!
//! Wrap a value-change handler in a [`CallbackWith`] and pass it through args
//! by clone; handles compare by identity, not by closure contents.

use std::sync::Arc;

/// Stable, comparable slot handle for a shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`) so it can sit inside args
/// structs without forcing deep closure comparisons.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(T)`.
///
/// Used for value-change handlers such as the slider's `on_change`.
pub struct CallbackWith<T> {
    slot: Slot<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        let handler = self.slot.shared();
        handler(value);
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for CallbackWith<T> {}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    };

    use super::*;

    #[test]
    fn call_forwards_argument() {
        let seen = Arc::new(AtomicI64::new(0));
        let seen_in_handler = seen.clone();
        let callback = CallbackWith::new(move |v: i64| {
            seen_in_handler.store(v, Ordering::SeqCst);
        });

        callback.call(42);
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn clones_compare_equal_distinct_handles_do_not() {
        let a = CallbackWith::new(|_: i64| {});
        let b = a.clone();
        let c = CallbackWith::new(|_: i64| {});

        assert!(a == b);
        assert!(a != c);
    }
}
