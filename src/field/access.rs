/// Privilege levels, ordered `Open < Factory < Admin`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AccessLevel {
    #[default]
    Open = 0,
    Factory,
    Admin,
}

/// Write channel a request arrives on. Each binding carries a separate
/// requirement per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Factory,
    User,
}

/// Gatekeeper for channel writes.
///
/// Bindings only record their required levels; enforcement happens in the
/// register map through an implementation of this trait.
pub trait AccessPolicy {
    /// Returns true if a write on `channel` to `addr` requiring `required` may proceed.
    fn can_write(&self, addr: u16, channel: Channel, required: AccessLevel) -> bool;
}

/// Policy that allows every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllPolicy {}

impl AccessPolicy for AllowAllPolicy {
    fn can_write(&self, _addr: u16, _channel: Channel, _required: AccessLevel) -> bool {
        true
    }
}

/// Policy for a requester holding a fixed privilege level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Privilege(pub AccessLevel);

impl AccessPolicy for Privilege {
    fn can_write(&self, _addr: u16, _channel: Channel, required: AccessLevel) -> bool {
        self.0 >= required
    }
}
