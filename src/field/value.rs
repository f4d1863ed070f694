use crate::field::{
    cell::ValueCell,
    numeric::Numeric,
    overridable::OverrideAccess,
    policy::{Policy, Predicate, Range},
};

/// Uniform read/write capability shared by plain and overridable fields.
///
/// Every mutation goes through the underlying cell's policy.
pub trait FieldAccess {
    type Value: Clone;

    /// Observed value (override-aware where applicable).
    fn get(&self) -> Self::Value;

    /// Writes the underlying value through its policy.
    fn set(&mut self, value: Self::Value) -> bool;

    /// Writes the underlying value and returns the stored (post-policy) value.
    fn assign(&mut self, value: Self::Value) -> Self::Value;

    fn is_valid(&self, value: &Self::Value) -> bool;

    /// Override capability, if this field carries an override slot.
    fn as_override_mut(&mut self) -> Option<&mut dyn OverrideAccess<Value = Self::Value>> {
        None
    }
}

/// Increment/decrement for arithmetic fields.
pub trait Step: FieldAccess {
    /// Adds `delta` to the stored value, clamps, and returns the stored value.
    fn increment(&mut self, delta: Self::Value) -> Self::Value;
    /// Subtracts `delta` from the stored value, clamps, and returns the stored value.
    fn decrement(&mut self, delta: Self::Value) -> Self::Value;
}

/// A named data field over a [`ValueCell`].
#[derive(Debug, Clone)]
pub struct Field<T, P> {
    cell: ValueCell<T, P>,
}

/// Field that clamps writes into a range.
pub type RangeField<T> = Field<T, Range<T>>;

/// Field that accepts writes only when a predicate holds.
pub type ValidatedField<T> = Field<T, Predicate<T>>;

impl<T, P: Policy<T>> Field<T, P> {
    pub fn new(cell: ValueCell<T, P>) -> Self {
        Self { cell }
    }

    #[inline]
    pub fn cell(&self) -> &ValueCell<T, P> {
        &self.cell
    }
}

impl<T: PartialOrd + Copy> Field<T, Range<T>> {
    /// # Panics
    /// Panics if `min > max`.
    pub fn ranged(initial: T, min: T, max: T) -> Self {
        Self::new(ValueCell::ranged(initial, min, max))
    }
}

impl<T> Field<T, Predicate<T>> {
    pub fn validated(initial: T, validator: fn(&T) -> bool) -> Self {
        Self::new(ValueCell::validated(initial, validator))
    }
}

impl<T: Clone, P: Policy<T>> FieldAccess for Field<T, P> {
    type Value = T;

    #[inline]
    fn get(&self) -> T {
        self.cell.get()
    }

    #[inline]
    fn set(&mut self, value: T) -> bool {
        self.cell.set(value)
    }

    fn assign(&mut self, value: T) -> T {
        self.cell.set(value);
        self.cell.get()
    }

    #[inline]
    fn is_valid(&self, value: &T) -> bool {
        self.cell.is_valid(value)
    }
}

impl<T: Numeric> Step for Field<T, Range<T>> {
    fn increment(&mut self, delta: T) -> T {
        let next = self.cell.get().step_up(delta);
        self.assign(next)
    }

    fn decrement(&mut self, delta: T) -> T {
        let next = self.cell.get().step_down(delta);
        self.assign(next)
    }
}
