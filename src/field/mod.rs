pub mod access;
pub mod binding;
pub mod cell;
pub mod codec;
pub mod error;
pub mod map;
pub mod numeric;
pub mod overridable;
pub mod policy;
pub mod shared;
pub mod text;
pub mod value;

#[cfg(test)]
mod test_support;

pub use access::{AccessLevel, AccessPolicy, AllowAllPolicy, Channel, Privilege};
pub use binding::{InputBinding, Register, RegisterBinding, RegisterKind};
pub use cell::ValueCell;
pub use codec::{ByteOrder, RegisterValue};
pub use error::FieldError;
pub use map::RegisterMap;
pub use numeric::Numeric;
pub use overridable::{OverrideAccess, Overridable};
pub use policy::{Policy, Predicate, Range};
pub use shared::SharedField;
pub use text::BoundedText;
pub use value::{Field, FieldAccess, RangeField, Step, ValidatedField};

pub mod prelude {
    pub use super::{
        AccessLevel, AccessPolicy, AllowAllPolicy, BoundedText, ByteOrder, Channel, Field,
        FieldAccess, FieldError, InputBinding, Numeric, OverrideAccess, Overridable, Policy,
        Predicate, Privilege, Range, RangeField, Register, RegisterBinding, RegisterKind,
        RegisterMap, RegisterValue, SharedField, Step, ValidatedField, ValueCell,
    };
}
