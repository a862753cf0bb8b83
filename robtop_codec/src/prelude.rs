//! Convenience re-exports for common usage

pub use crate::io::{decode_objects, encode_objects};
pub use crate::iter::ObjectIter;

// Primitive codec
pub use robtop_bytes::{
    Binary, ByteOrder, FormatError, Options, Reader, Result, TextEncoding, Writer,
};

// Objects
pub use robtop_objects::{
    AnyObject, AsObject, Color, Easing, Hsv, Object, ObjectKind, Trigger, ZLayer,
};
pub use robtop_objects::{
    AnimationTrigger, ColorTrigger, CollisionTrigger, CountTrigger, FollowPlayerYTrigger,
    FollowTrigger, InstantCountTrigger, MoveTrigger, OnDeathTrigger, PickupTrigger, PulseTrigger,
    RotateTrigger, ShakeTrigger, SpawnTrigger, StopTrigger, TouchTrigger,
};
pub use robtop_objects::{
    AnimatedObject, Coin, CollisionBlock, Orb, PickupItem, Teleport, Text,
};

// Text records
pub use robtop_records::{
    CURRENT_BINARY_VERSION, CURRENT_GAME_VERSION, GameVersion, Progress, Recording,
    RecordingItem, RobTop, RobTopConfig, Version,
};
