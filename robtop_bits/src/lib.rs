//! # robtop_bits
//!
//! The bit-packing vocabulary used by RobTop binary records:
//!
//! - flag bytes: several booleans ORed into one byte through disjoint
//!   single-bit masks ([`flag_byte!`])
//! - split words: a small value stored above a masked low field, as the
//!   z-layer sits above the 13-bit z-order ([`split_word`], [`join_word`])
//! - flagged words: a value in the low `N` bits plus a boolean at bit `N`
//!   ([`Flagged`])
//!
//! ```rust
//! use robtop_bits::{Flagged15, bit_width, join_word, split_word};
//!
//! // 15-bit block id + dynamic flag in one u16
//! let word = Flagged15::new(40000, true).to_word();
//! assert_eq!(word, (40000 & 0x7FFF) | 0x8000);
//!
//! // z-layer above a 13-bit z-order
//! assert_eq!(bit_width(0x1FFF), 13);
//! let packed = join_word(5, 42, 0x1FFF);
//! assert_eq!(split_word(packed, 0x1FFF), (5, 42));
//! ```

mod bit_ops;
pub mod flagged;
pub mod flags;

pub use bit_ops::{bit_width, get_bits, join_word, low_mask, set_bits, split_word};
pub use flagged::{Flagged, Flagged15};

#[doc(hidden)]
pub use bitflags;
#[doc(hidden)]
pub use robtop_bytes;
