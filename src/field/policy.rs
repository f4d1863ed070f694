/// Decides which values a [`ValueCell`](crate::field::ValueCell) may hold.
pub trait Policy<T> {
    /// Returns the value to store for a write of `value`, or `None` to reject it.
    fn admit(&self, value: T) -> Option<T>;
    /// Returns true if `value` satisfies the policy as-is.
    fn is_valid(&self, value: &T) -> bool;
    /// Maps the construction-time value onto the stored one.
    fn normalize(&self, initial: T) -> T;
}

/// Range policy: writes always succeed and saturate into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// # Panics
    /// Panics if `min > max` or the bounds are not comparable.
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "range lower bound exceeds upper bound");
        Self { min, max }
    }

    /// Lower bound, inclusive.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound, inclusive.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Forces `value` into `[min, max]`.
    ///
    /// Values comparable with neither bound (float NaN) map to `min`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn clamp(&self, value: T) -> T {
        if !(value >= self.min) {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl<T: PartialOrd + Copy> Policy<T> for Range<T> {
    fn admit(&self, value: T) -> Option<T> {
        Some(self.clamp(value))
    }

    fn is_valid(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    fn normalize(&self, initial: T) -> T {
        self.clamp(initial)
    }
}

/// Predicate policy: writes are accepted or rejected whole.
pub struct Predicate<T> {
    validator: fn(&T) -> bool,
}

impl<T> Predicate<T> {
    /// Accepts exactly the values for which `validator` returns true.
    pub const fn new(validator: fn(&T) -> bool) -> Self {
        Self { validator }
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Predicate<T> {}

impl<T> core::fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T> Policy<T> for Predicate<T> {
    fn admit(&self, value: T) -> Option<T> {
        (self.validator)(&value).then_some(value)
    }

    fn is_valid(&self, value: &T) -> bool {
        (self.validator)(value)
    }

    // Construction never validates.
    fn normalize(&self, initial: T) -> T {
        initial
    }
}
