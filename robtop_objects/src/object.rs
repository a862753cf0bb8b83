//! The base record shared by every object variant.

use std::collections::BTreeSet;

use robtop_bits::{flag_byte, join_word, split_word};
use robtop_bytes::{Binary, Options, Reader, Result, Writer};

use crate::{Hsv, ZLayer};

flag_byte! {
    /// Boolean properties of an object, bit 0 through bit 7.
    pub struct ObjectFlags {
        const H_FLIPPED = 1 << 0;
        const V_FLIPPED = 1 << 1;
        const DO_NOT_FADE = 1 << 2;
        const DO_NOT_ENTER = 1 << 3;
        const GROUP_PARENT = 1 << 4;
        const HIGH_DETAIL = 1 << 5;
        const GLOW = 1 << 6;
        const SPECIAL_CHECKED = 1 << 7;
    }
}

/// Mask of the z-order field; the z-layer sits in the bits above it.
pub const Z_ORDER_MASK: u16 = 0x1FFF;

/// Access to the base record of any object variant.
pub trait AsObject {
    fn object(&self) -> &Object;

    fn object_mut(&mut self) -> &mut Object;
}

/// A level-editor object.
///
/// Group ids form a set: duplicates collapse, and the binary form always
/// lists them in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: u16,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub flags: ObjectFlags,
    pub z_layer: ZLayer,
    /// Priority within the layer. Only the low 13 bits are stored.
    pub z_order: i16,
    pub base_editor_layer: u16,
    pub additional_editor_layer: u16,
    pub base_color_id: u16,
    pub detail_color_id: u16,
    pub base_color_hsv: Hsv,
    pub detail_color_hsv: Hsv,
    pub groups: BTreeSet<u16>,
    pub link_id: u16,
}

impl Default for Object {
    fn default() -> Self {
        Self::new(crate::ObjectKind::Object.default_id())
    }
}

impl Object {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
            flags: ObjectFlags::GLOW,
            z_layer: ZLayer::default(),
            z_order: 0,
            base_editor_layer: 0,
            additional_editor_layer: 0,
            base_color_id: 0,
            detail_color_id: 0,
            base_color_hsv: Hsv::default(),
            detail_color_hsv: Hsv::default(),
            groups: BTreeSet::new(),
            link_id: 0,
        }
    }

    pub fn is_h_flipped(&self) -> bool {
        self.flags.contains(ObjectFlags::H_FLIPPED)
    }

    pub fn is_v_flipped(&self) -> bool {
        self.flags.contains(ObjectFlags::V_FLIPPED)
    }

    pub fn is_do_not_fade(&self) -> bool {
        self.flags.contains(ObjectFlags::DO_NOT_FADE)
    }

    pub fn is_do_not_enter(&self) -> bool {
        self.flags.contains(ObjectFlags::DO_NOT_ENTER)
    }

    pub fn is_group_parent(&self) -> bool {
        self.flags.contains(ObjectFlags::GROUP_PARENT)
    }

    pub fn is_high_detail(&self) -> bool {
        self.flags.contains(ObjectFlags::HIGH_DETAIL)
    }

    pub fn is_glow(&self) -> bool {
        self.flags.contains(ObjectFlags::GLOW)
    }

    pub fn is_special_checked(&self) -> bool {
        self.flags.contains(ObjectFlags::SPECIAL_CHECKED)
    }

    pub fn set_flag(&mut self, flag: ObjectFlags, value: bool) -> &mut Self {
        self.flags.set(flag, value);
        self
    }

    pub fn add_group(&mut self, group: u16) -> &mut Self {
        self.groups.insert(group);
        self
    }

    pub fn add_groups(&mut self, groups: impl IntoIterator<Item = u16>) -> &mut Self {
        self.groups.extend(groups);
        self
    }

    pub fn remove_group(&mut self, group: u16) -> &mut Self {
        self.groups.remove(&group);
        self
    }

    pub fn remove_groups(&mut self, groups: impl IntoIterator<Item = u16>) -> &mut Self {
        for group in groups {
            self.groups.remove(&group);
        }
        self
    }

    pub fn move_by(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn h_flip(&mut self) -> &mut Self {
        self.flags.toggle(ObjectFlags::H_FLIPPED);
        self
    }

    pub fn v_flip(&mut self) -> &mut Self {
        self.flags.toggle(ObjectFlags::V_FLIPPED);
        self
    }

    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        self.rotation += angle;
        self
    }

    pub fn scale_by(&mut self, factor: f32) -> &mut Self {
        self.scale *= factor;
        self
    }

    pub fn scale_to(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    fn z_word(&self) -> u16 {
        let order = self.z_order as u16;
        if order & Z_ORDER_MASK != order {
            tracing::debug!(
                z_order = self.z_order,
                "z-order truncated to {} bits",
                robtop_bits::bit_width(Z_ORDER_MASK.into())
            );
        }
        join_word(
            self.z_layer.value().into(),
            order.into(),
            Z_ORDER_MASK.into(),
        ) as u16
    }
}

impl AsObject for Object {
    fn object(&self) -> &Object {
        self
    }

    fn object_mut(&mut self) -> &mut Object {
        self
    }
}

impl Binary for Object {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let order = options.order;

        let id = reader.read_u16(order)?;

        let x = reader.read_f32(order)?;
        let y = reader.read_f32(order)?;

        let rotation = reader.read_f32(order)?;
        let scale = reader.read_f32(order)?;

        let flags = ObjectFlags::from_binary(reader, options)?;

        let (layer, z_order) = split_word(reader.read_u16(order)?.into(), Z_ORDER_MASK.into());
        let z_layer = ZLayer::try_from(layer as u8)?;

        let base_editor_layer = reader.read_u16(order)?;
        let additional_editor_layer = reader.read_u16(order)?;

        let base_color_id = reader.read_u16(order)?;
        let detail_color_id = reader.read_u16(order)?;

        let base_color_hsv = Hsv::from_binary(reader, options)?;
        let detail_color_hsv = Hsv::from_binary(reader, options)?;

        let count = reader.read_u16(order)?;
        let groups = (0..count)
            .map(|_| reader.read_u16(order))
            .collect::<Result<BTreeSet<_>>>()?;

        let link_id = reader.read_u16(order)?;

        Ok(Self {
            id,
            x,
            y,
            rotation,
            scale,
            flags,
            z_layer,
            z_order: z_order as i16,
            base_editor_layer,
            additional_editor_layer,
            base_color_id,
            detail_color_id,
            base_color_hsv,
            detail_color_hsv,
            groups,
            link_id,
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        let order = options.order;

        writer
            .write_u16(self.id, order)
            .write_f32(self.x, order)
            .write_f32(self.y, order)
            .write_f32(self.rotation, order)
            .write_f32(self.scale, order);

        self.flags.to_binary(writer, options)?;

        writer
            .write_u16(self.z_word(), order)
            .write_u16(self.base_editor_layer, order)
            .write_u16(self.additional_editor_layer, order)
            .write_u16(self.base_color_id, order)
            .write_u16(self.detail_color_id, order);

        self.base_color_hsv.to_binary(writer, options)?;
        self.detail_color_hsv.to_binary(writer, options)?;

        let count = u16::try_from(self.groups.len()).unwrap_or(u16::MAX);
        if usize::from(count) < self.groups.len() {
            tracing::debug!(groups = self.groups.len(), "group list cut to u16 count");
        }
        writer.write_u16(count, order);
        // BTreeSet iterates in ascending order
        for &group in self.groups.iter().take(count.into()) {
            writer.write_u16(group, order);
        }

        writer.write_u16(self.link_id, order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robtop_bytes::ByteOrder;

    /// Byte offset of the group count in an encoded base record.
    const GROUP_COUNT_OFFSET: usize = 2 + 4 * 4 + 1 + 2 * 5 + 11 * 2;

    #[test]
    fn groups_are_written_ascending() {
        let mut object = Object::new(1);
        object.move_to(30.0, 45.0).add_groups([5, 3, 9]);

        let bytes = object.to_bytes().unwrap();
        let groups = &bytes[GROUP_COUNT_OFFSET..GROUP_COUNT_OFFSET + 8];
        assert_eq!(groups, &[3, 0, 3, 0, 5, 0, 9, 0]);
        assert_eq!(Object::from_bytes(&bytes).unwrap(), object);
    }

    #[test]
    fn flag_bits_in_order() {
        let mut object = Object::new(7);
        object.flags = ObjectFlags::empty();
        object.h_flip().set_flag(ObjectFlags::SPECIAL_CHECKED, true);

        let bytes = object.to_bytes().unwrap();
        assert_eq!(bytes[18], 0b1000_0001);

        let decoded = Object::from_bytes(&bytes).unwrap();
        assert!(decoded.is_h_flipped());
        assert!(decoded.is_special_checked());
        assert!(!decoded.is_glow());
    }

    #[test]
    fn z_word_packs_layer_above_order() {
        let mut object = Object::new(1);
        object.z_layer = ZLayer::T2;
        object.z_order = 0x2005;

        let options = Options::default().with_order(ByteOrder::Big);
        let bytes = object.to_bytes_with(&options).unwrap();
        let word = u16::from_be_bytes([bytes[19], bytes[20]]);
        assert_eq!(word, (6 << 13) | 0x0005);

        let decoded = Object::from_bytes_with(&bytes, &options).unwrap();
        assert_eq!(decoded.z_layer, ZLayer::T2);
        assert_eq!(decoded.z_order, 5);
    }

    #[test]
    fn fluent_helpers() {
        let mut object = Object::new(1);
        object
            .move_by(1.0, 2.0)
            .rotate(90.0)
            .scale_by(2.0)
            .add_groups([1, 2, 3])
            .remove_groups([2])
            .v_flip();

        assert_eq!((object.x, object.y), (1.0, 2.0));
        assert_eq!(object.rotation, 90.0);
        assert_eq!(object.scale, 2.0);
        assert_eq!(object.groups, BTreeSet::from([1, 3]));
        assert!(object.is_v_flipped());
    }

    #[test]
    fn truncated_group_list() {
        let mut object = Object::new(1);
        object.add_groups([1, 2]);
        let bytes = object.to_bytes().unwrap();
        assert!(matches!(
            Object::from_bytes(&bytes[..bytes.len() - 3]),
            Err(robtop_bytes::FormatError::Truncated { .. })
        ));
    }
}
