/// Errors that can occur during register operations.
///
/// Field-level writes (`set`, `set_override`) report plain `bool`s; these
/// errors come from the byte-level binding and register map layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Output buffer shorter than the register's wire width.
    BufferTooSmall,
    /// Input bytes do not match the register's wire width.
    WidthMismatch,
    /// Input bytes do not decode to a value of the register's type.
    Malformed,
    /// Value rejected by the field's validity rule.
    Rejected,
    /// Write denied by access policy.
    Denied,
    /// Write attempted on an input register.
    ReadOnly,
    /// Override operation on a field without an override slot.
    OverrideUnsupported,
    /// No register bound at the address.
    UnknownAddress,
    /// A register of the same kind is already bound at the address.
    DuplicateAddress,
    /// Register map capacity exceeded.
    MapFull,
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::BufferTooSmall => write!(f, "buffer shorter than register width"),
            FieldError::WidthMismatch => write!(f, "input length does not match register width"),
            FieldError::Malformed => write!(f, "input bytes do not decode to a valid value"),
            FieldError::Rejected => write!(f, "value rejected by field validator"),
            FieldError::Denied => write!(f, "access denied by policy"),
            FieldError::ReadOnly => write!(f, "register is read-only"),
            FieldError::OverrideUnsupported => write!(f, "field does not support overrides"),
            FieldError::UnknownAddress => write!(f, "no register at address"),
            FieldError::DuplicateAddress => write!(f, "address already bound"),
            FieldError::MapFull => write!(f, "register map capacity exceeded"),
        }
    }
}

impl core::error::Error for FieldError {}
