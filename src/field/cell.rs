use crate::field::policy::{Policy, Predicate, Range};

/// Holder of one value plus the policy that keeps it valid.
///
/// After every [`set`](Self::set) the stored value satisfies the policy. Range
/// cells additionally clamp at construction; predicate cells store the initial
/// value as given.
#[derive(Debug, Clone)]
pub struct ValueCell<T, P> {
    value: T,
    policy: P,
}

impl<T, P: Policy<T>> ValueCell<T, P> {
    /// Builds a cell, passing `initial` through [`Policy::normalize`].
    pub fn new(initial: T, policy: P) -> Self {
        let value = policy.normalize(initial);
        Self { value, policy }
    }

    /// Stores `value` if the policy admits it.
    ///
    /// Range cells always succeed (clamping); predicate cells leave the stored
    /// value unchanged and return false on rejection.
    pub fn set(&mut self, value: T) -> bool {
        match self.policy.admit(value) {
            Some(v) => {
                self.value = v;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_valid(&self, value: &T) -> bool {
        self.policy.is_valid(value)
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<T: Clone, P: Policy<T>> ValueCell<T, P> {
    #[inline]
    pub fn get(&self) -> T {
        self.value.clone()
    }
}

impl<T: PartialOrd + Copy> ValueCell<T, Range<T>> {
    /// Range cell with `initial` clamped into `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn ranged(initial: T, min: T, max: T) -> Self {
        Self::new(initial, Range::new(min, max))
    }
}

impl<T> ValueCell<T, Predicate<T>> {
    pub fn validated(initial: T, validator: fn(&T) -> bool) -> Self {
        Self::new(initial, Predicate::new(validator))
    }
}
