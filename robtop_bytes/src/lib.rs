//! # robtop_bytes
//!
//! Primitive binary codec shared by every RobTop record: a forward-only
//! [`Reader`] and an append-only [`Writer`] over fixed-width integers and
//! floats, with the byte order passed explicitly on every call.
//!
//! ```rust
//! use robtop_bytes::{ByteOrder, Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_u16(0xBEEF, ByteOrder::Big);
//! writer.write_f32(1.5, ByteOrder::Little);
//!
//! let bytes = writer.into_bytes();
//! let mut reader = Reader::new(&bytes);
//!
//! assert_eq!(reader.read_u16(ByteOrder::Big)?, 0xBEEF);
//! assert_eq!(reader.read_f32(ByteOrder::Little)?, 1.5);
//! assert!(reader.is_empty());
//! # Ok::<(), robtop_bytes::FormatError>(())
//! ```

pub mod codec;
pub mod error;
pub mod options;
pub mod order;
pub mod reader;
pub mod writer;

pub use codec::Binary;
pub use error::{FormatError, Result};
pub use options::{Options, TextEncoding};
pub use order::ByteOrder;
pub use reader::Reader;
pub use writer::Writer;
