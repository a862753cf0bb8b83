use robtop_bytes::{Binary, FormatError, Options, Reader, Result, Writer};

use crate::triggers::*;
use crate::variants::*;
use crate::{AsObject, Object, ObjectKind, Trigger};

macro_rules! any_object {
    ($($variant:ident),* $(,)?) => {
        /// Any object record, tagged by its [`ObjectKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyObject {
            $($variant($variant),)*
        }

        impl AnyObject {
            /// Default record of the given kind.
            pub fn new(kind: ObjectKind) -> Self {
                match kind {
                    $(ObjectKind::$variant => Self::$variant($variant::default()),)*
                }
            }

            pub fn kind(&self) -> ObjectKind {
                match self {
                    $(Self::$variant(_) => ObjectKind::$variant,)*
                }
            }

            /// Decode a record of a known kind.
            pub fn decode(
                kind: ObjectKind,
                reader: &mut Reader<'_>,
                options: &Options,
            ) -> Result<Self> {
                let offset = reader.position();
                let object = match kind {
                    $(ObjectKind::$variant => Self::$variant($variant::from_binary(reader, options)?),)*
                };
                tracing::trace!(?kind, id = object.object().id, offset, "decoded object");
                Ok(object)
            }

            /// Encode the record.
            ///
            /// Fails with [`FormatError::KindMismatch`] when the id would be
            /// inferred as another kind, since the record could not be read
            /// back by [`AnyObject::decode_inferred`].
            pub fn encode(&self, writer: &mut Writer, options: &Options) -> Result<()> {
                self.check_inferable()?;
                tracing::trace!(
                    kind = ?self.kind(),
                    id = self.object().id,
                    offset = writer.len(),
                    "encoding object"
                );
                match self {
                    $(Self::$variant(inner) => inner.to_binary(writer, options),)*
                }
            }
        }

        impl AsObject for AnyObject {
            fn object(&self) -> &Object {
                match self {
                    $(Self::$variant(inner) => inner.object(),)*
                }
            }

            fn object_mut(&mut self) -> &mut Object {
                match self {
                    $(Self::$variant(inner) => inner.object_mut(),)*
                }
            }
        }

        $(
            impl From<$variant> for AnyObject {
                fn from(inner: $variant) -> Self {
                    Self::$variant(inner)
                }
            }
        )*
    };
}

any_object! {
    Object,
    Coin,
    Text,
    Teleport,
    AnimatedObject,
    CollisionBlock,
    Orb,
    PickupItem,
    Trigger,
    ColorTrigger,
    PulseTrigger,
    MoveTrigger,
    SpawnTrigger,
    StopTrigger,
    RotateTrigger,
    FollowTrigger,
    ShakeTrigger,
    AnimationTrigger,
    TouchTrigger,
    CountTrigger,
    InstantCountTrigger,
    PickupTrigger,
    FollowPlayerYTrigger,
    OnDeathTrigger,
    CollisionTrigger,
}

impl AnyObject {
    /// Decode a record whose kind is inferred from its leading id.
    ///
    /// The id is peeked, so the reader is left at the start of the record
    /// if the id itself cannot be read.
    pub fn decode_inferred(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let id = Reader::new(reader.peek_bytes(2)?).read_u16(options.order)?;
        Self::decode(ObjectKind::infer(id), reader, options)
    }

    fn check_inferable(&self) -> Result<()> {
        let id = self.object().id;
        let inferred = ObjectKind::infer(id);
        if inferred == self.kind() {
            return Ok(());
        }
        tracing::debug!(id, kind = ?self.kind(), ?inferred, "id does not infer back to its kind");
        Err(FormatError::KindMismatch {
            id,
            kind: format!("{:?}", self.kind()),
            inferred: format!("{inferred:?}"),
        })
    }

    pub fn is_trigger(&self) -> bool {
        self.kind().is_trigger()
    }

    pub fn has_target_group(&self) -> bool {
        self.kind().has_target_group()
    }

    /// The group this record acts upon, for kinds that have one.
    pub fn target_group_id(&self) -> Option<u16> {
        let id = match self {
            Self::PickupItem(item) => item.target_group.target_group_id,
            Self::SpawnTrigger(t) => t.target_group.target_group_id,
            Self::StopTrigger(t) => t.target_group.target_group_id,
            Self::RotateTrigger(t) => t.additional_group.target_group_id,
            Self::FollowTrigger(t) => t.additional_group.target_group_id,
            Self::AnimationTrigger(t) => t.target_group.target_group_id,
            Self::TouchTrigger(t) => t.target_group.target_group_id,
            Self::FollowPlayerYTrigger(t) => t.target_group.target_group_id,
            Self::OnDeathTrigger(t) => t.target_group.target_group_id,
            Self::CollisionTrigger(t) => t.target_group.target_group_id,
            _ => return None,
        };
        Some(id)
    }

    /// The trigger header, for trigger kinds.
    pub fn trigger(&self) -> Option<&Trigger> {
        Some(match self {
            Self::Trigger(t) => t,
            Self::ColorTrigger(t) => &t.trigger,
            Self::PulseTrigger(t) => &t.trigger,
            Self::MoveTrigger(t) => &t.trigger,
            Self::SpawnTrigger(t) => &t.trigger,
            Self::StopTrigger(t) => &t.trigger,
            Self::RotateTrigger(t) => &t.trigger,
            Self::FollowTrigger(t) => &t.trigger,
            Self::ShakeTrigger(t) => &t.trigger,
            Self::AnimationTrigger(t) => &t.trigger,
            Self::TouchTrigger(t) => &t.trigger,
            Self::CountTrigger(t) => &t.trigger,
            Self::InstantCountTrigger(t) => &t.trigger,
            Self::PickupTrigger(t) => &t.trigger,
            Self::FollowPlayerYTrigger(t) => &t.trigger,
            Self::OnDeathTrigger(t) => &t.trigger,
            Self::CollisionTrigger(t) => &t.trigger,
            _ => return None,
        })
    }
}

/// The binary form of an `AnyObject` is the bare record; decoding infers
/// the kind from the id.
impl Binary for AnyObject {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        Self::decode_inferred(reader, options)
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.encode(writer, options)
    }
}
