//! A `no_std`, no-alloc validated data field layer for register-oriented protocols.
//!
//! This crate provides typed fields whose every write passes a validity gate,
//! an optional override layer that shadows a field's value without disturbing
//! it, and fixed-width encoding of field values onto Modbus-style registers.
//!
//! # Features
//!
//! - **Clamp or reject** - Range fields saturate writes into `[min, max]`,
//!   validated fields accept or reject writes whole
//! - **Override shadowing** - An override masks the observed value while base
//!   writes keep landing underneath
//! - **Fixed-width encoding** - Values encode to 1, 2, 4 or 8 bytes (or `N` for
//!   text) in big-endian, little-endian or host order
//! - **Register map** - Address dispatch, access-level gating and dirty tracking
//!   over borrowed bindings
//!
//! # Cargo features
//!
//! - `tracing` - Emits `trace!`/`debug!` events on channel writes. Off by
//!   default; enabling it links `alloc`, so the target needs a global allocator
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  bytes  ┌─────────────────┐  value  ┌──────────────┐
//! │ RegisterMap  │────────▶│ RegisterBinding │────────▶│ Overridable  │
//! │ (policy,     │         │ (address,       │         │  └─ Field    │
//! │  dirty bits) │◀────────│  byte order)    │◀────────│     └─ Cell  │
//! └──────────────┘ encode  └─────────────────┘   get   └──────────────┘
//! ```
//!
//! - **Channel writes** are gated by an [`AccessPolicy`](field::AccessPolicy),
//!   decoded, then validated by the field's policy
//! - **Reads** return the override when one is set, otherwise the stored value
//! - **Bindings** borrow their fields, so they cannot outlive them
//!
//! # Example
//!
//! ```rust
//! use register_field::prelude::*;
//!
//! let mut setpoint = Overridable::new(RangeField::ranged(100i32, -10, 10_000));
//! let mut binding =
//!     RegisterBinding::new(&mut setpoint, 11, AccessLevel::Open, AccessLevel::Admin);
//!
//! assert!(binding.update_override_from_channel(42));
//! let mut map: RegisterMap<'_, 8> = RegisterMap::new();
//! map.insert(&mut binding).unwrap();
//!
//! // the user channel needs Admin on this register
//! let user = Privilege(AccessLevel::Factory);
//! assert_eq!(
//!     map.write(&user, Channel::User, 11, &7i32.to_be_bytes()),
//!     Err(FieldError::Denied)
//! );
//!
//! let mut buf = [0u8; 4];
//! map.read(RegisterKind::Holding, 11, &mut buf).unwrap();
//! assert_eq!(buf, 42i32.to_be_bytes());
//! ```

#![deny(unsafe_code)]
#![no_std]

#[macro_use]
mod macros;

pub mod field;

pub mod prelude {
    pub use crate::field::prelude::*;
}
