use bitmaps::{Bitmap, Bits, BitsImpl};
use heapless::Vec;

use crate::field::{
    access::{AccessPolicy, Channel},
    binding::{Register, RegisterKind},
    error::FieldError,
};

/// Fixed-capacity address table over register bindings.
///
/// Dispatches reads and writes by `(kind, address)`, checks channel writes
/// against an [`AccessPolicy`] before they reach the binding, and tracks which
/// entries were written since the last [`clear_dirty`](Self::clear_dirty).
/// Holding and input registers live in separate address spaces.
pub struct RegisterMap<'a, const N: usize>
where
    BitsImpl<N>: Bits,
{
    entries: Vec<&'a mut dyn Register, N>,
    dirty: Bitmap<N>,
}

impl<'a, const N: usize> RegisterMap<'a, N>
where
    BitsImpl<N>: Bits,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            dirty: Bitmap::new(),
        }
    }

    /// Adds a register to the map.
    ///
    /// Fails with `DuplicateAddress` if a register of the same kind is already
    /// bound at its address, or `MapFull` at capacity.
    pub fn insert(&mut self, register: &'a mut dyn Register) -> Result<(), FieldError> {
        if self
            .position(register.kind(), register.address())
            .is_some()
        {
            return Err(FieldError::DuplicateAddress);
        }
        self.entries
            .push(register)
            .map_err(|_| FieldError::MapFull)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, kind: RegisterKind, addr: u16) -> Option<&(dyn Register + 'a)> {
        let idx = self.position(kind, addr)?;
        Some(&*self.entries[idx])
    }

    /// Encodes the register at `addr` into `buf`, returning the bytes written.
    pub fn read(&self, kind: RegisterKind, addr: u16, buf: &mut [u8]) -> Result<usize, FieldError> {
        let idx = self
            .position(kind, addr)
            .ok_or(FieldError::UnknownAddress)?;
        self.entries[idx].encode(buf)
    }

    /// Writes raw bytes to the holding register at `addr`.
    ///
    /// The policy is consulted first; a denied write changes nothing.
    pub fn write<P: AccessPolicy>(
        &mut self,
        policy: &P,
        channel: Channel,
        addr: u16,
        bytes: &[u8],
    ) -> Result<(), FieldError> {
        let idx = self.authorize(policy, channel, addr)?;
        self.entries[idx].write_bytes(bytes)?;
        self.dirty.set(idx, true);
        trace!(addr, ?channel, "holding register written");
        Ok(())
    }

    /// Sets the override of the holding register at `addr` from raw bytes.
    pub fn write_override<P: AccessPolicy>(
        &mut self,
        policy: &P,
        channel: Channel,
        addr: u16,
        bytes: &[u8],
    ) -> Result<(), FieldError> {
        let idx = self.authorize(policy, channel, addr)?;
        self.entries[idx].override_bytes(bytes)?;
        self.dirty.set(idx, true);
        Ok(())
    }

    /// Clears the override of the holding register at `addr`.
    pub fn clear_override<P: AccessPolicy>(
        &mut self,
        policy: &P,
        channel: Channel,
        addr: u16,
    ) -> Result<(), FieldError> {
        let idx = self.authorize(policy, channel, addr)?;
        self.entries[idx].clear_override()?;
        self.dirty.set(idx, true);
        Ok(())
    }

    pub fn is_dirty(&self, kind: RegisterKind, addr: u16) -> Result<bool, FieldError> {
        let idx = self
            .position(kind, addr)
            .ok_or(FieldError::UnknownAddress)?;
        Ok(self.dirty.get(idx))
    }

    #[inline]
    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Visits every dirty register in insertion order.
    pub fn iter_dirty<F>(&self, mut f: F) -> Result<(), FieldError>
    where
        F: FnMut(&dyn Register) -> Result<(), FieldError>,
    {
        let mut idx = self.dirty.first_index();
        while let Some(i) = idx {
            f(&*self.entries[i])?;
            idx = self.dirty.next_index(i);
        }
        Ok(())
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = Bitmap::new();
    }

    fn position(&self, kind: RegisterKind, addr: u16) -> Option<usize> {
        self.entries
            .iter()
            .position(|r| r.kind() == kind && r.address() == addr)
    }

    fn authorize<P: AccessPolicy>(
        &self,
        policy: &P,
        channel: Channel,
        addr: u16,
    ) -> Result<usize, FieldError> {
        let idx = self
            .position(RegisterKind::Holding, addr)
            .ok_or(FieldError::UnknownAddress)?;
        let required = self.entries[idx].required_level(channel);
        if !policy.can_write(addr, channel, required) {
            debug!(addr, ?channel, ?required, "register write denied");
            return Err(FieldError::Denied);
        }
        Ok(idx)
    }
}

impl<'a, const N: usize> Default for RegisterMap<'a, N>
where
    BitsImpl<N>: Bits,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::test_support::{DataModel, OnlyFactoryChannel, assert_denied};
    use crate::field::{
        AccessLevel, AllowAllPolicy, FieldAccess, InputBinding, OverrideAccess, Privilege,
        RegisterBinding,
    };

    #[test]
    fn read_dispatches_by_kind_and_address() {
        let mut model = DataModel::new();
        let mut integer =
            RegisterBinding::new(&mut model.integer, 10, AccessLevel::Open, AccessLevel::Open);
        let mut mode = InputBinding::new(&model.mode, 10, AccessLevel::Open, AccessLevel::Open);

        let mut map: RegisterMap<'_, 4> = RegisterMap::new();
        map.insert(&mut integer).unwrap();
        map.insert(&mut mode).unwrap();
        assert_eq!(map.len(), 2);

        let mut buf = [0u8; 4];
        assert_eq!(map.read(RegisterKind::Holding, 10, &mut buf), Ok(2));
        assert_eq!(&buf[..2], &[0x00, 0x0A]);
        assert_eq!(map.read(RegisterKind::Input, 10, &mut buf), Ok(2));
        assert_eq!(&buf[..2], &[0x00, 0x02]);
        assert_eq!(
            map.read(RegisterKind::Input, 11, &mut buf),
            Err(FieldError::UnknownAddress)
        );
        assert_eq!(map.get(RegisterKind::Holding, 10).map(|r| r.width()), Some(2));
    }

    #[test]
    fn insert_rejects_duplicates_and_overflow() {
        let mut model = DataModel::new();
        let mut integer =
            RegisterBinding::new(&mut model.integer, 10, AccessLevel::Open, AccessLevel::Open);
        let mut longint =
            RegisterBinding::new(&mut model.longint, 10, AccessLevel::Open, AccessLevel::Open);
        let mut text = RegisterBinding::new(&mut model.text, 12, AccessLevel::Open, AccessLevel::Open);
        let mut mode = InputBinding::new(&model.mode, 13, AccessLevel::Open, AccessLevel::Open);

        let mut map: RegisterMap<'_, 2> = RegisterMap::new();
        assert!(map.is_empty());
        map.insert(&mut integer).unwrap();
        assert_eq!(map.insert(&mut longint), Err(FieldError::DuplicateAddress));
        map.insert(&mut text).unwrap();
        assert_eq!(map.insert(&mut mode), Err(FieldError::MapFull));
    }

    #[test]
    fn write_updates_field_and_marks_dirty() {
        let mut model = DataModel::new();
        {
            let mut integer =
                RegisterBinding::new(&mut model.integer, 10, AccessLevel::Open, AccessLevel::Open);
            let mut text =
                RegisterBinding::new(&mut model.text, 12, AccessLevel::Open, AccessLevel::Open);
            let mut map: RegisterMap<'_, 4> = RegisterMap::new();
            map.insert(&mut integer).unwrap();
            map.insert(&mut text).unwrap();

            assert!(!map.any_dirty());
            map.write(&AllowAllPolicy::default(), Channel::User, 10, &[0x01, 0xF4])
                .unwrap();
            assert!(map.any_dirty());
            assert_eq!(map.is_dirty(RegisterKind::Holding, 10), Ok(true));
            assert_eq!(map.is_dirty(RegisterKind::Holding, 12), Ok(false));

            let mut seen = 0;
            map.iter_dirty(|r| {
                assert_eq!(r.address(), 10);
                seen += 1;
                Ok(())
            })
            .unwrap();
            assert_eq!(seen, 1);

            map.clear_dirty();
            assert!(!map.any_dirty());
        }
        // 500 clamps to the field's upper bound
        assert_eq!(model.integer.get(), 100);
    }

    #[test]
    fn rejected_write_is_not_dirty() {
        let mut model = DataModel::new();
        {
            let mut text =
                RegisterBinding::new(&mut model.text, 12, AccessLevel::Open, AccessLevel::Open);
            let mut map: RegisterMap<'_, 4> = RegisterMap::new();
            map.insert(&mut text).unwrap();

            assert_eq!(
                map.write(&AllowAllPolicy::default(), Channel::User, 12, &[0u8; 32]),
                Err(FieldError::Rejected)
            );
            assert!(!map.any_dirty());
        }
        assert_eq!(model.text.get(), "Hello world");
    }

    #[test]
    fn policy_gates_writes_per_channel() {
        let mut model = DataModel::new();
        {
            let mut longint = RegisterBinding::new(
                &mut model.longint,
                11,
                AccessLevel::Open,
                AccessLevel::Admin,
            );
            let mut map: RegisterMap<'_, 4> = RegisterMap::new();
            map.insert(&mut longint).unwrap();

            let user = Privilege(AccessLevel::Factory);
            assert_denied(map.write(&user, Channel::User, 11, &5i32.to_be_bytes()));
            assert_denied(map.write_override(&user, Channel::User, 11, &5i32.to_be_bytes()));
            assert!(!map.any_dirty());

            // factory channel only requires Open on this register
            map.write(&user, Channel::Factory, 11, &5i32.to_be_bytes())
                .unwrap();

            let admin = Privilege(AccessLevel::Admin);
            map.write(&admin, Channel::User, 11, &6i32.to_be_bytes())
                .unwrap();

            assert_denied(map.write(&OnlyFactoryChannel, Channel::User, 11, &7i32.to_be_bytes()));
        }
        assert_eq!(model.longint.get(), 6);
    }

    #[test]
    fn override_round_trip_through_map() {
        let mut model = DataModel::new();
        {
            let mut longint =
                RegisterBinding::new(&mut model.longint, 11, AccessLevel::Open, AccessLevel::Open);
            let mut map: RegisterMap<'_, 4> = RegisterMap::new();
            map.insert(&mut longint).unwrap();
            let policy = AllowAllPolicy::default();

            map.write_override(&policy, Channel::User, 11, &42i32.to_be_bytes())
                .unwrap();
            map.write(&policy, Channel::User, 11, &101i32.to_be_bytes())
                .unwrap();

            let mut buf = [0u8; 4];
            map.read(RegisterKind::Holding, 11, &mut buf).unwrap();
            assert_eq!(buf, 42i32.to_be_bytes());

            map.clear_override(&policy, Channel::User, 11).unwrap();
            map.read(RegisterKind::Holding, 11, &mut buf).unwrap();
            assert_eq!(buf, 101i32.to_be_bytes());
        }
        assert!(!model.longint.is_overridden());
    }

    #[test]
    fn writes_never_reach_input_registers() {
        let model = DataModel::new();
        let mut mode = InputBinding::new(&model.mode, 10, AccessLevel::Open, AccessLevel::Open);
        let mut map: RegisterMap<'_, 4> = RegisterMap::new();
        map.insert(&mut mode).unwrap();

        assert_eq!(
            map.write(&AllowAllPolicy::default(), Channel::User, 10, &[0, 1]),
            Err(FieldError::UnknownAddress)
        );
    }
}
