use robtop_bits::flag_byte;

use crate::{AsObject, Object, ObjectKind};

flag_byte! {
    /// How a trigger fires.
    pub struct TriggerFlags {
        const TOUCH_TRIGGERED = 1 << 0;
        const SPAWN_TRIGGERED = 1 << 1;
        const MULTI_TRIGGER = 1 << 2;
    }
}

/// Header shared by every trigger: the base object plus one flag byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub object: Object,
    pub flags: TriggerFlags,
}

sequential_binary!(Trigger { object, flags });

impl Default for Trigger {
    fn default() -> Self {
        Self::new(ObjectKind::Trigger.default_id())
    }
}

impl Trigger {
    pub fn new(id: u16) -> Self {
        Self {
            object: Object::new(id),
            flags: TriggerFlags::empty(),
        }
    }

    pub fn is_touch_triggered(&self) -> bool {
        self.flags.contains(TriggerFlags::TOUCH_TRIGGERED)
    }

    pub fn is_spawn_triggered(&self) -> bool {
        self.flags.contains(TriggerFlags::SPAWN_TRIGGERED)
    }

    pub fn is_multi_trigger(&self) -> bool {
        self.flags.contains(TriggerFlags::MULTI_TRIGGER)
    }

    pub fn set_touch_triggered(&mut self, value: bool) -> &mut Self {
        self.flags.set(TriggerFlags::TOUCH_TRIGGERED, value);
        self
    }

    pub fn set_spawn_triggered(&mut self, value: bool) -> &mut Self {
        self.flags.set(TriggerFlags::SPAWN_TRIGGERED, value);
        self
    }

    pub fn set_multi_trigger(&mut self, value: bool) -> &mut Self {
        self.flags.set(TriggerFlags::MULTI_TRIGGER, value);
        self
    }
}

impl AsObject for Trigger {
    fn object(&self) -> &Object {
        &self.object
    }

    fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robtop_bytes::Binary;

    #[test]
    fn header_follows_base_record() {
        let mut trigger = Trigger::new(1932);
        trigger.set_spawn_triggered(true).set_multi_trigger(true);

        let base = trigger.object.to_bytes().unwrap();
        let bytes = trigger.to_bytes().unwrap();
        assert_eq!(&bytes[..base.len()], &base[..]);
        assert_eq!(bytes[base.len()..], [0b110]);

        let decoded = Trigger::from_bytes(&bytes).unwrap();
        assert!(!decoded.is_touch_triggered());
        assert!(decoded.is_spawn_triggered());
        assert_eq!(decoded, trigger);
    }
}
