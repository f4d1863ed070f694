//! Test support utilities - only compiled in test builds.

use crate::field::{
    BoundedText, ByteOrder, FieldError, Overridable, RangeField, RegisterValue, ValidatedField,
    access::{AccessLevel, AccessPolicy, Channel},
};

/// Enumerated setting validated by `mode_is_valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Mode {
    One = 1,
    Two,
    Three,
    Four,
    Last,
}

impl Mode {
    fn from_u16(raw: u16) -> Option<Self> {
        match raw {
            1 => Some(Mode::One),
            2 => Some(Mode::Two),
            3 => Some(Mode::Three),
            4 => Some(Mode::Four),
            5 => Some(Mode::Last),
            _ => None,
        }
    }
}

impl RegisterValue for Mode {
    const WIDTH: usize = 2;

    fn write_bytes(&self, order: ByteOrder, out: &mut [u8]) {
        (*self as u16).write_bytes(order, out);
    }

    fn read_bytes(order: ByteOrder, bytes: &[u8]) -> Option<Self> {
        Mode::from_u16(u16::read_bytes(order, bytes)?)
    }
}

pub fn mode_is_valid(mode: &Mode) -> bool {
    (*mode as u16) < (Mode::Last as u16)
}

pub fn non_empty<const N: usize>(text: &BoundedText<N>) -> bool {
    !text.is_empty()
}

/// `u16` in `[0, 100]`, starting at 10.
pub fn integer_field() -> RangeField<u16> {
    RangeField::ranged(10, 0, 100)
}

/// Overridable `i32` in `[-10, 10000]`, starting at 100.
pub fn longint_field() -> Overridable<RangeField<i32>> {
    Overridable::new(RangeField::ranged(100, -10, 10_000))
}

pub fn mode_field() -> ValidatedField<Mode> {
    ValidatedField::validated(Mode::Two, mode_is_valid)
}

/// Non-empty text, starting at "Hello world".
pub fn text_field() -> ValidatedField<BoundedText<32>> {
    ValidatedField::validated(BoundedText::from("Hello world"), non_empty)
}

/// Data model owning one field of each flavour.
pub struct DataModel {
    pub integer: RangeField<u16>,
    pub longint: Overridable<RangeField<i32>>,
    pub mode: ValidatedField<Mode>,
    pub text: ValidatedField<BoundedText<32>>,
}

impl DataModel {
    pub fn new() -> Self {
        Self {
            integer: integer_field(),
            longint: longint_field(),
            mode: mode_field(),
            text: text_field(),
        }
    }
}

impl Default for DataModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Policy that only accepts writes arriving on the factory channel.
pub struct OnlyFactoryChannel;

impl AccessPolicy for OnlyFactoryChannel {
    fn can_write(&self, _addr: u16, channel: Channel, _required: AccessLevel) -> bool {
        channel == Channel::Factory
    }
}

/// Asserts that the result is a Denied error.
pub fn assert_denied<T: core::fmt::Debug>(result: Result<T, FieldError>) {
    assert_eq!(result.unwrap_err(), FieldError::Denied);
}
