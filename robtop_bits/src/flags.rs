//! Flag bytes.
//!
//! A flag byte packs up to eight booleans into one `u8`, one disjoint bit
//! mask per boolean. Encoding ORs the masks of the set flags together;
//! decoding tests each mask on its own and drops unknown bits.
//!
//! # Examples
//!
//! ```rust
//! use robtop_bits::flag_byte;
//! use robtop_bits::robtop_bytes::{Binary, Options, Reader};
//!
//! flag_byte! {
//!     pub struct Permissions {
//!         const READ = 1 << 0;
//!         const WRITE = 1 << 1;
//!         const EXECUTE = 1 << 2;
//!     }
//! }
//!
//! let perms = Permissions::READ | Permissions::WRITE;
//! assert_eq!(perms.to_bytes()?, vec![0b011]);
//!
//! // unknown bits are dropped
//! let mut reader = Reader::new(&[0b1111_0100]);
//! let decoded = Permissions::from_binary(&mut reader, &Options::default())?;
//! assert_eq!(decoded, Permissions::EXECUTE);
//! # Ok::<(), robtop_bits::robtop_bytes::FormatError>(())
//! ```

/// Declare a `bitflags` type over `u8` that reads and writes itself as a
/// single byte.
#[macro_export]
macro_rules! flag_byte {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $bit:expr;
            )*
        }
    ) => {
        $crate::bitflags::bitflags! {
            $(#[$outer])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name: u8 {
                $(
                    $(#[$inner])*
                    const $flag = $bit;
                )*
            }
        }

        impl $crate::robtop_bytes::Binary for $name {
            fn from_binary(
                reader: &mut $crate::robtop_bytes::Reader<'_>,
                _options: &$crate::robtop_bytes::Options,
            ) -> $crate::robtop_bytes::Result<Self> {
                Ok(Self::from_bits_truncate(reader.read_u8()?))
            }

            fn to_binary(
                &self,
                writer: &mut $crate::robtop_bytes::Writer,
                _options: &$crate::robtop_bytes::Options,
            ) -> $crate::robtop_bytes::Result<()> {
                writer.write_u8(self.bits());
                Ok(())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use robtop_bytes::Binary;

    flag_byte! {
        struct Sample {
            const A = 1 << 0;
            const B = 1 << 1;
            const C = 1 << 7;
        }
    }

    #[test]
    fn basic_flags_ops() {
        let mut flags = Sample::A | Sample::C;
        assert!(flags.contains(Sample::A));
        assert!(!flags.contains(Sample::B));
        flags.set(Sample::B, true);
        flags.set(Sample::A, false);
        assert_eq!(flags.bits(), 0b1000_0010);
    }

    #[test]
    fn flag_byte_roundtrip() {
        let flags = Sample::B | Sample::C;
        let bytes = flags.to_bytes().unwrap();
        assert_eq!(bytes, vec![0b1000_0010]);
        assert_eq!(Sample::from_bytes(&bytes).unwrap(), flags);
        assert_eq!(Sample::from_bytes(&[0xFF]).unwrap(), Sample::all());
    }
}
