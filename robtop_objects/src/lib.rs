//! # robtop_objects
//!
//! In-memory model and binary codec for level-editor objects.
//!
//! Every object shares the [`Object`] base record. Leaf variants embed it
//! (triggers through [`Trigger`]) next to small field bundles such as
//! [`HasTargetGroup`] or [`HasDuration`], and [`AnyObject`] unites all of
//! them behind one [`ObjectKind`] tag.
//!
//! ```rust
//! use robtop_objects::{AnyObject, MoveTrigger, Object, ObjectKind};
//! use robtop_bytes::{Binary, Options, Reader};
//!
//! let mut object = Object::new(1);
//! object.move_by(30.0, 45.0).add_groups([5, 3, 9]);
//!
//! let bytes = object.to_bytes()?;
//! assert_eq!(Object::from_bytes(&bytes)?, object);
//!
//! let trigger = AnyObject::from(MoveTrigger::default());
//! assert!(trigger.is_trigger());
//! assert_eq!(trigger.kind(), ObjectKind::MoveTrigger);
//!
//! let bytes = trigger.to_bytes()?;
//! let mut reader = Reader::new(&bytes);
//! let decoded = AnyObject::decode_inferred(&mut reader, &Options::default())?;
//! assert_eq!(decoded, trigger);
//! # Ok::<(), robtop_bytes::FormatError>(())
//! ```

#[macro_use]
mod macros;

mod any;
pub mod bundles;
mod color;
pub mod enums;
mod hsv;
pub mod ids;
mod kind;
mod object;
mod trigger;
pub mod triggers;
pub mod variants;

pub use any::AnyObject;
pub use bundles::{
    HasActivateGroup, HasAdditionalGroup, HasColor, HasCount, HasDelay, HasDuration, HasEasing,
    HasItem, HasMultiActivate, HasTargetGroup,
};
pub use color::Color;
pub use enums::{
    Easing, InstantCountComparison, PickupItemMode, PlayerColor, PulseMode, PulseTargetType,
    PulseType, TargetType, ToggleType, ZLayer,
};
pub use hsv::{Hsv, HsvFlags};
pub use kind::ObjectKind;
pub use object::{AsObject, Object, ObjectFlags, Z_ORDER_MASK};
pub use trigger::{Trigger, TriggerFlags};
pub use triggers::{
    AnimationTrigger, ColorTrigger, CollisionTrigger, CountTrigger, FollowPlayerYTrigger,
    FollowTrigger, InstantCountTrigger, MoveTrigger, OnDeathTrigger, PickupTrigger, PulseTrigger,
    RotateTrigger, ShakeTrigger, SpawnTrigger, StopTrigger, TouchTrigger,
};
pub use variants::{
    AnimatedObject, Coin, CollisionBlock, Orb, PickupItem, Teleport, TeleportFlags, Text,
};

pub use robtop_bytes::{Binary, FormatError, Options, Result};
