use crate::field::value::{FieldAccess, Step};

/// Override capability: a value that shadows the base field while present.
pub trait OverrideAccess: FieldAccess {
    /// Stores `value` as the override if the base field considers it valid.
    ///
    /// The value is stored as given, never clamped. On rejection the current
    /// override (if any) is left in place and false is returned.
    fn set_override(&mut self, value: Self::Value) -> bool;

    /// Clears the override. Idempotent.
    fn reset_override(&mut self);

    fn override_value(&self) -> Option<&Self::Value>;

    #[inline]
    fn is_overridden(&self) -> bool {
        self.override_value().is_some()
    }
}

/// Decorator that adds an override slot to any field.
///
/// Reads return the override while one is set. Writes (`set`, `assign`,
/// `increment`, `decrement`) always go to the base field, so base updates made
/// while an override is active become visible once it is cleared.
#[derive(Debug, Clone)]
pub struct Overridable<F: FieldAccess> {
    base: F,
    shadow: Option<F::Value>,
}

impl<F: FieldAccess> Overridable<F> {
    pub fn new(base: F) -> Self {
        Self { base, shadow: None }
    }

    #[inline]
    pub fn base(&self) -> &F {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut F {
        &mut self.base
    }

    pub fn into_base(self) -> F {
        self.base
    }
}

impl<F: FieldAccess> FieldAccess for Overridable<F> {
    type Value = F::Value;

    fn get(&self) -> F::Value {
        match &self.shadow {
            Some(v) => v.clone(),
            None => self.base.get(),
        }
    }

    #[inline]
    fn set(&mut self, value: F::Value) -> bool {
        self.base.set(value)
    }

    #[inline]
    fn assign(&mut self, value: F::Value) -> F::Value {
        self.base.assign(value)
    }

    #[inline]
    fn is_valid(&self, value: &F::Value) -> bool {
        self.base.is_valid(value)
    }

    fn as_override_mut(&mut self) -> Option<&mut dyn OverrideAccess<Value = F::Value>> {
        Some(self)
    }
}

impl<F: FieldAccess> OverrideAccess for Overridable<F> {
    fn set_override(&mut self, value: F::Value) -> bool {
        if !self.base.is_valid(&value) {
            return false;
        }
        self.shadow = Some(value);
        true
    }

    fn reset_override(&mut self) {
        self.shadow = None;
    }

    fn override_value(&self) -> Option<&F::Value> {
        self.shadow.as_ref()
    }
}

impl<F: Step> Step for Overridable<F> {
    #[inline]
    fn increment(&mut self, delta: F::Value) -> F::Value {
        self.base.increment(delta)
    }

    #[inline]
    fn decrement(&mut self, delta: F::Value) -> F::Value {
        self.base.decrement(delta)
    }
}
