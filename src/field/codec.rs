//! Fixed-width wire encoding for register values.
//!
//! Each value type has a constant wire width. Multi-byte values are laid out in
//! the requested [`ByteOrder`]; Modbus registers are big-endian, which is the
//! default used by bindings.

use crate::field::text::BoundedText;

/// Byte layout of multi-byte values on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first (Modbus register order).
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
    /// Host in-memory layout.
    Native,
}

/// A value with a fixed-width register encoding.
pub trait RegisterValue: Sized {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Writes the encoding into `out`.
    ///
    /// # Panics
    /// Panics if `out.len() != Self::WIDTH`.
    fn write_bytes(&self, order: ByteOrder, out: &mut [u8]);

    /// Decodes a value, or returns `None` if `bytes` is not a valid encoding.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn read_bytes(order: ByteOrder, bytes: &[u8]) -> Option<Self>;
}

/// Generates [`RegisterValue`] for primitive numeric types.
macro_rules! impl_register_value {
    ($($type:ty),* $(,)?) => {
        $(
            paste::paste! {
                #[doc = "`" $type "` encodes as its native width in the requested byte order."]
                impl RegisterValue for $type {
                    const WIDTH: usize = core::mem::size_of::<$type>();

                    #[inline]
                    fn write_bytes(&self, order: ByteOrder, out: &mut [u8]) {
                        let bytes = match order {
                            ByteOrder::BigEndian => self.to_be_bytes(),
                            ByteOrder::LittleEndian => self.to_le_bytes(),
                            ByteOrder::Native => self.to_ne_bytes(),
                        };
                        out.copy_from_slice(&bytes);
                    }

                    #[inline]
                    fn read_bytes(order: ByteOrder, bytes: &[u8]) -> Option<Self> {
                        assert!(
                            bytes.len() == Self::WIDTH,
                            "decode width mismatch: got {} expected {}",
                            bytes.len(), Self::WIDTH
                        );
                        let array: [u8; core::mem::size_of::<$type>()] = bytes.try_into().ok()?;
                        Some(match order {
                            ByteOrder::BigEndian => <$type>::from_be_bytes(array),
                            ByteOrder::LittleEndian => <$type>::from_le_bytes(array),
                            ByteOrder::Native => <$type>::from_ne_bytes(array),
                        })
                    }
                }
            }
        )*
    };
}

impl_register_value!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Text encodes as its content followed by zero padding to `N` bytes.
impl<const N: usize> RegisterValue for BoundedText<N> {
    const WIDTH: usize = N;

    fn write_bytes(&self, _order: ByteOrder, out: &mut [u8]) {
        assert!(out.len() == N, "encode width mismatch");
        let content = self.as_bytes();
        out[..content.len()].copy_from_slice(content);
        out[content.len()..].fill(0);
    }

    fn read_bytes(_order: ByteOrder, bytes: &[u8]) -> Option<Self> {
        assert!(bytes.len() == N, "decode width mismatch");
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        // An unterminated payload would need all N bytes, one more than fits.
        if end > Self::capacity() {
            return None;
        }
        let s = core::str::from_utf8(&bytes[..end]).ok()?;
        Some(Self::from(s))
    }
}
