//! # robtop_records
//!
//! Small records sharing the RobTop text grammar: versions, progress
//! lists and input recordings.
//!
//! Each record implements [`RobTop`] for its text form; versions and
//! progress lists also have a compact binary form through
//! [`Binary`](robtop_bytes::Binary).
//!
//! ```rust
//! use robtop_records::{GameVersion, Progress, Recording, RobTop};
//!
//! let version = GameVersion::from_robtop("11")?;
//! assert_eq!(version.to_string(), "1.8");
//!
//! let progress = Progress::from_robtop("10,50,100")?;
//! assert_eq!(progress.as_slice(), &[10, 50, 100]);
//!
//! let recording = Recording::from_robtop("1;1.5;;2.25;1;")?;
//! assert_eq!(recording.len(), 2);
//! assert_eq!(recording.to_robtop(), "1;1.5;;2.25;1;");
//! # Ok::<(), robtop_records::FormatError>(())
//! ```

mod progress;
mod recording;
mod robtop;
mod version;

pub use progress::Progress;
pub use recording::{Recording, RecordingItem, RecordingIter};
pub use robtop::{RobTop, RobTopConfig};
pub use version::{CURRENT_BINARY_VERSION, CURRENT_GAME_VERSION, GameVersion, Version};

pub use robtop_bytes::{FormatError, Result};
