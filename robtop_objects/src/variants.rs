//! Non-trigger object variants.

use robtop_bits::{Flagged15, flag_byte};
use robtop_bytes::{Binary, Options, Reader, Result, Writer};

use crate::{HasItem, HasMultiActivate, HasTargetGroup, Object, PickupItemMode};

object_record! {
    @sequential
    /// A secret coin.
    pub struct Coin(Coin) {
        pub object: Object,
        pub coin_id: u8 = 0,
    }
}

object_record! {
    /// A text label. The content is written length-prefixed in the
    /// encoding selected by [`Options`].
    pub struct Text(Text) {
        pub object: Object,
        pub content: String = String::new(),
    }
}

impl Binary for Text {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        Ok(Self {
            object: Object::from_binary(reader, options)?,
            content: reader.read_string(options.order, options.encoding)?,
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.object.to_binary(writer, options)?;
        writer.write_string(&self.content, options.order, options.encoding)?;
        Ok(())
    }
}

flag_byte! {
    pub struct TeleportFlags {
        const SMOOTH = 1 << 0;
    }
}

object_record! {
    /// A teleport portal pair.
    pub struct Teleport(Teleport) {
        pub object: Object,
        /// Vertical distance to the exit portal.
        pub offset: f32 = 0.0,
        pub smooth: bool = false,
    }
}

impl Binary for Teleport {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let object = Object::from_binary(reader, options)?;
        let offset = reader.read_f32(options.order)?;
        let flags = TeleportFlags::from_binary(reader, options)?;

        Ok(Self {
            object,
            offset,
            smooth: flags.contains(TeleportFlags::SMOOTH),
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.object.to_binary(writer, options)?;
        writer.write_f32(self.offset, options.order);

        let mut flags = TeleportFlags::empty();
        flags.set(TeleportFlags::SMOOTH, self.smooth);
        flags.to_binary(writer, options)
    }
}

object_record! {
    @sequential
    pub struct AnimatedObject(AnimatedObject) {
        pub object: Object,
        pub randomize_start: bool = false,
        pub animation_speed: f32 = 1.0,
    }
}

object_record! {
    /// Collision geometry watched by collision triggers.
    pub struct CollisionBlock(CollisionBlock) {
        pub object: Object,
        /// Only the low 15 bits are stored.
        pub block_id: u16 = 0,
        pub dynamic: bool = false,
    }
}

impl Binary for CollisionBlock {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let object = Object::from_binary(reader, options)?;
        let word = Flagged15::from_u16(reader.read_u16(options.order)?);

        Ok(Self {
            object,
            block_id: word.value() as u16,
            dynamic: word.flag(),
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.object.to_binary(writer, options)?;
        let word = Flagged15::new(self.block_id.into(), self.dynamic);
        writer.write_u16(word.to_u16(), options.order);
        Ok(())
    }
}

object_record! {
    @sequential
    /// A jump orb.
    pub struct Orb(Orb) {
        pub object: Object,
        pub multi_activate: HasMultiActivate = HasMultiActivate::default(),
    }
}

object_record! {
    @sequential
    /// A collectible that changes an item counter and may toggle a group.
    pub struct PickupItem(PickupItem) {
        pub object: Object,
        pub item: HasItem = HasItem::default(),
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub mode: PickupItemMode = PickupItemMode::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AsObject;
    use robtop_bytes::{FormatError, TextEncoding};

    fn tail<T: Binary + AsObject>(value: &T) -> Vec<u8> {
        let base = value.object().to_bytes().unwrap().len();
        value.to_bytes().unwrap()[base..].to_vec()
    }

    #[test]
    fn defaults_carry_canonical_ids() {
        assert_eq!(Coin::default().object.id, 1329);
        assert_eq!(Text::default().object.id, 914);
        assert_eq!(CollisionBlock::default().object.id, 1816);
    }

    #[test]
    fn text_content() {
        let text = Text {
            content: "hello".into(),
            ..Text::default()
        };
        assert_eq!(tail(&text), b"\x05\x00hello");
        assert_eq!(Text::from_bytes(&text.to_bytes().unwrap()).unwrap(), text);
    }

    #[test]
    fn text_in_legacy_encoding() {
        let text = Text {
            content: "café".into(),
            ..Text::default()
        };
        let options = Options::default()
            .with_encoding(TextEncoding::for_label("windows-1252").unwrap());
        let bytes = text.to_bytes_with(&options).unwrap();
        assert_eq!(&bytes[bytes.len() - 4..], b"caf\xe9");
        assert_eq!(Text::from_bytes_with(&bytes, &options).unwrap(), text);
    }

    #[test]
    fn oversized_text_fails_to_encode() {
        let text = Text {
            content: "é".repeat(40_000),
            ..Text::default()
        };
        assert!(matches!(
            text.to_bytes(),
            Err(FormatError::TextTooLong { len: 80_000, .. })
        ));
    }

    #[test]
    fn teleport_smooth_bit() {
        let teleport = Teleport {
            offset: 30.0,
            smooth: true,
            ..Teleport::default()
        };
        let tail = tail(&teleport);
        assert_eq!(tail[..4], 30.0f32.to_le_bytes());
        assert_eq!(tail[4], 0b1);
    }

    #[test]
    fn collision_block_word() {
        let block = CollisionBlock {
            block_id: 0x7FFE,
            dynamic: true,
            ..CollisionBlock::default()
        };
        assert_eq!(tail(&block), 0xFFFEu16.to_le_bytes());

        let masked = CollisionBlock {
            block_id: 0x8001,
            dynamic: false,
            ..CollisionBlock::default()
        };
        assert_eq!(tail(&masked), 0x0001u16.to_le_bytes());
    }

    #[test]
    fn pickup_item_layout() {
        let item = PickupItem {
            item: HasItem { item_id: 4 },
            target_group: HasTargetGroup { target_group_id: 9 },
            mode: PickupItemMode::Toggle,
            ..PickupItem::default()
        };
        assert_eq!(tail(&item), [4, 0, 9, 0, 2]);

        let mut bytes = item.to_bytes().unwrap();
        *bytes.last_mut().unwrap() = 9;
        assert!(matches!(
            PickupItem::from_bytes(&bytes),
            Err(FormatError::InvalidEnumeration { .. })
        ));
    }
}
