use core::cell::RefCell;

use critical_section::Mutex;

use crate::field::value::FieldAccess;

/// A field guarded by a critical section.
///
/// Use this when more than one channel (for example a console task and a
/// protocol ISR) can reach the same field. Every access runs inside
/// [`critical_section::with`], so it can live in a `static`.
pub struct SharedField<F> {
    inner: Mutex<RefCell<F>>,
}

impl<F> SharedField<F> {
    /// Wraps `field`. Usable in `static` initializers.
    pub const fn new(field: F) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(field)),
        }
    }

    /// Runs `f` with exclusive access to the field.
    ///
    /// # Panics
    /// Panics if called re-entrantly from within `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut F) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }

    pub fn into_inner(self) -> F {
        self.inner.into_inner().into_inner()
    }
}

impl<F: FieldAccess> SharedField<F> {
    pub fn get(&self) -> F::Value {
        self.with(|field| field.get())
    }

    pub fn set(&self, value: F::Value) -> bool {
        self.with(|field| field.set(value))
    }

    pub fn assign(&self, value: F::Value) -> F::Value {
        self.with(|field| field.assign(value))
    }
}
