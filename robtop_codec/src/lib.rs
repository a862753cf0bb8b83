//! # RobTop Codec
//!
//! Binary and text codecs for Geometry Dash level data.
//!
//! ## Crates
//!
//! - [`robtop_bytes`]: primitive reader/writer, byte order, errors
//! - [`robtop_bits`]: flag bytes and packed words
//! - [`robtop_objects`]: level-editor objects and their binary layout
//! - [`robtop_records`]: versions, progress lists and recordings in the
//!   RobTop text format
//!
//! ## Quick Start
//!
//! ```rust
//! use robtop_codec::prelude::*;
//!
//! let mut spawn = SpawnTrigger::default();
//! spawn.target_group.target_group_id = 4;
//! spawn.object_mut().add_groups([1, 2]);
//!
//! let level = vec![AnyObject::from(spawn), AnyObject::new(ObjectKind::Orb)];
//! let bytes = encode_objects(&level, &Options::default())?;
//! assert_eq!(decode_objects(&bytes, &Options::default())?, level);
//!
//! let version = GameVersion::from_robtop("21")?;
//! assert_eq!(version, CURRENT_GAME_VERSION);
//! # Ok::<(), FormatError>(())
//! ```

pub mod io;
pub mod iter;
pub mod prelude;

pub use crate::io::{decode_objects, encode_objects};
pub use crate::iter::ObjectIter;

pub use robtop_bits;
pub use robtop_bytes;
pub use robtop_objects;
pub use robtop_records;

pub use robtop_bytes::{FormatError, Result};
