use crate::field::{
    access::{AccessLevel, Channel},
    codec::{ByteOrder, RegisterValue},
    error::FieldError,
    overridable::OverrideAccess,
    value::FieldAccess,
};

/// Modbus register table a binding is exposed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    /// Read/write holding register.
    Holding,
    /// Read-only input register.
    Input,
}

/// Byte-level view of a bound field, as seen by a register map.
pub trait Register {
    fn address(&self) -> u16;
    fn kind(&self) -> RegisterKind;
    /// Wire width in bytes.
    fn width(&self) -> usize;
    /// Minimum privilege a write on `channel` requires.
    fn required_level(&self, channel: Channel) -> AccessLevel;
    /// Encodes the observed value into `buf`, returning the bytes written.
    fn encode(&self, buf: &mut [u8]) -> Result<usize, FieldError>;
    /// Decodes `bytes` and writes them to the underlying field.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FieldError>;
    /// Decodes `bytes` and sets them as the field's override.
    fn override_bytes(&mut self, bytes: &[u8]) -> Result<(), FieldError>;
    fn clear_override(&mut self) -> Result<(), FieldError>;
}

fn encode_value<T: RegisterValue>(
    value: &T,
    order: ByteOrder,
    buf: &mut [u8],
) -> Result<usize, FieldError> {
    let out = buf.get_mut(..T::WIDTH).ok_or(FieldError::BufferTooSmall)?;
    value.write_bytes(order, out);
    Ok(T::WIDTH)
}

fn decode_value<T: RegisterValue>(order: ByteOrder, bytes: &[u8]) -> Result<T, FieldError> {
    if bytes.len() != T::WIDTH {
        return Err(FieldError::WidthMismatch);
    }
    T::read_bytes(order, bytes).ok_or(FieldError::Malformed)
}

/// Writable (holding) register bound to a field.
///
/// The binding mutably borrows its field for its whole life, so it can neither
/// outlive nor be rebound away from it. Access levels are recorded but not
/// checked here; callers (typically [`RegisterMap`](crate::field::RegisterMap))
/// enforce them before writing.
pub struct RegisterBinding<'a, F: FieldAccess> {
    field: &'a mut F,
    address: u16,
    factory_write_protect: AccessLevel,
    user_write_protect: AccessLevel,
    order: ByteOrder,
}

impl<'a, F> RegisterBinding<'a, F>
where
    F: FieldAccess,
    F::Value: RegisterValue,
{
    pub fn new(
        field: &'a mut F,
        address: u16,
        factory_write_protect: AccessLevel,
        user_write_protect: AccessLevel,
    ) -> Self {
        Self {
            field,
            address,
            factory_write_protect,
            user_write_protect,
            order: ByteOrder::default(),
        }
    }

    /// Selects the wire byte order (big-endian by default).
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[inline]
    pub fn factory_write_protect(&self) -> AccessLevel {
        self.factory_write_protect
    }

    #[inline]
    pub fn user_write_protect(&self) -> AccessLevel {
        self.user_write_protect
    }

    pub fn required_level(&self, channel: Channel) -> AccessLevel {
        match channel {
            Channel::Factory => self.factory_write_protect,
            Channel::User => self.user_write_protect,
        }
    }

    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    #[inline]
    pub fn field(&self) -> &F {
        &*self.field
    }

    /// Observed value of the bound field.
    #[inline]
    pub fn get(&self) -> F::Value {
        self.field.get()
    }

    /// Encodes the observed value into `buf`.
    ///
    /// Fails with [`FieldError::BufferTooSmall`] without touching `buf` if it
    /// is shorter than the value's width; otherwise returns the width.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, FieldError> {
        encode_value(&self.field.get(), self.order, buf)
    }

    /// Writes `value` to the bound field through its policy.
    ///
    /// Does not check access levels.
    pub fn update_from_channel(&mut self, value: F::Value) -> bool {
        let accepted = self.field.set(value);
        if accepted {
            trace!(address = self.address, "register updated");
        } else {
            debug!(address = self.address, "register write rejected by validator");
        }
        accepted
    }
}

impl<'a, F> RegisterBinding<'a, F>
where
    F: OverrideAccess,
    F::Value: RegisterValue,
{
    pub fn update_override_from_channel(&mut self, value: F::Value) -> bool {
        let accepted = self.field.set_override(value);
        if accepted {
            trace!(address = self.address, "register override set");
        } else {
            debug!(address = self.address, "register override rejected");
        }
        accepted
    }

    pub fn clear_override_from_channel(&mut self) {
        trace!(address = self.address, "register override cleared");
        self.field.reset_override();
    }
}

impl<'a, F> Register for RegisterBinding<'a, F>
where
    F: FieldAccess,
    F::Value: RegisterValue,
{
    fn address(&self) -> u16 {
        self.address
    }

    fn kind(&self) -> RegisterKind {
        RegisterKind::Holding
    }

    fn width(&self) -> usize {
        <F::Value as RegisterValue>::WIDTH
    }

    fn required_level(&self, channel: Channel) -> AccessLevel {
        RegisterBinding::required_level(self, channel)
    }

    fn encode(&self, buf: &mut [u8]) -> Result<usize, FieldError> {
        RegisterBinding::encode(self, buf)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FieldError> {
        let value = decode_value(self.order, bytes)?;
        if self.update_from_channel(value) {
            Ok(())
        } else {
            Err(FieldError::Rejected)
        }
    }

    fn override_bytes(&mut self, bytes: &[u8]) -> Result<(), FieldError> {
        let value = decode_value(self.order, bytes)?;
        let slot = self
            .field
            .as_override_mut()
            .ok_or(FieldError::OverrideUnsupported)?;
        if slot.set_override(value) {
            trace!(address = self.address, "register override set");
            Ok(())
        } else {
            debug!(address = self.address, "register override rejected");
            Err(FieldError::Rejected)
        }
    }

    fn clear_override(&mut self) -> Result<(), FieldError> {
        let slot = self
            .field
            .as_override_mut()
            .ok_or(FieldError::OverrideUnsupported)?;
        slot.reset_override();
        trace!(address = self.address, "register override cleared");
        Ok(())
    }
}

/// Read-only (input) register bound to a field.
pub struct InputBinding<'a, F: FieldAccess> {
    field: &'a F,
    address: u16,
    factory_write_protect: AccessLevel,
    user_write_protect: AccessLevel,
    order: ByteOrder,
}

impl<'a, F> InputBinding<'a, F>
where
    F: FieldAccess,
    F::Value: RegisterValue,
{
    pub fn new(
        field: &'a F,
        address: u16,
        factory_write_protect: AccessLevel,
        user_write_protect: AccessLevel,
    ) -> Self {
        Self {
            field,
            address,
            factory_write_protect,
            user_write_protect,
            order: ByteOrder::default(),
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn get(&self) -> F::Value {
        self.field.get()
    }

    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, FieldError> {
        encode_value(&self.field.get(), self.order, buf)
    }
}

impl<'a, F> Register for InputBinding<'a, F>
where
    F: FieldAccess,
    F::Value: RegisterValue,
{
    fn address(&self) -> u16 {
        self.address
    }

    fn kind(&self) -> RegisterKind {
        RegisterKind::Input
    }

    fn width(&self) -> usize {
        <F::Value as RegisterValue>::WIDTH
    }

    fn required_level(&self, channel: Channel) -> AccessLevel {
        match channel {
            Channel::Factory => self.factory_write_protect,
            Channel::User => self.user_write_protect,
        }
    }

    fn encode(&self, buf: &mut [u8]) -> Result<usize, FieldError> {
        InputBinding::encode(self, buf)
    }

    fn write_bytes(&mut self, _bytes: &[u8]) -> Result<(), FieldError> {
        Err(FieldError::ReadOnly)
    }

    fn override_bytes(&mut self, _bytes: &[u8]) -> Result<(), FieldError> {
        Err(FieldError::ReadOnly)
    }

    fn clear_override(&mut self) -> Result<(), FieldError> {
        Err(FieldError::ReadOnly)
    }
}
