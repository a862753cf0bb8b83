//! Trigger specializations.
//!
//! Every trigger starts with the [`Trigger`] header, followed by its
//! bundles (in the order they are declared in [`crate::bundles`]) and
//! then its own fields.

use robtop_bits::Flagged15;
use robtop_bytes::{Binary, Options, Reader, Result, Writer};

use crate::{
    Color, HasActivateGroup, HasAdditionalGroup, HasColor, HasCount, HasDelay, HasDuration,
    HasEasing, HasItem, HasMultiActivate, HasTargetGroup, Hsv, InstantCountComparison,
    PlayerColor, PulseMode, PulseTargetType, PulseType, TargetType, ToggleType, Trigger,
};

object_record! {
    @sequential
    /// Changes a color channel.
    pub struct ColorTrigger(ColorTrigger) {
        pub trigger: Trigger,
        pub duration: HasDuration = HasDuration::default(),
        pub color: HasColor = HasColor::default(),
        pub blending: bool = false,
        pub target_color_id: u16 = 0,
        pub copied_color_id: u16 = 0,
        pub copied_color_hsv: Hsv = Hsv::default(),
        pub copy_opacity: bool = false,
        pub player_color: PlayerColor = PlayerColor::default(),
    }
}

object_record! {
    @sequential
    pub struct PulseTrigger(PulseTrigger) {
        pub trigger: Trigger,
        pub fade_in: f32 = 0.0,
        pub hold: f32 = 0.0,
        pub fade_out: f32 = 0.0,
        pub color: Color = Color::default(),
        pub hsv: Hsv = Hsv::default(),
        pub target_type: PulseTargetType = PulseTargetType::default(),
        pub pulse_type: PulseType = PulseType::default(),
        pub mode: PulseMode = PulseMode::default(),
        pub exclusive: bool = false,
    }
}

object_record! {
    @sequential
    pub struct MoveTrigger(MoveTrigger) {
        pub trigger: Trigger,
        pub duration: HasDuration = HasDuration::default(),
        pub easing: HasEasing = HasEasing::default(),
        pub x_offset: f32 = 0.0,
        pub y_offset: f32 = 0.0,
        pub locked_to_player_x: bool = false,
        pub locked_to_player_y: bool = false,
        pub target_type: TargetType = TargetType::default(),
    }
}

impl MoveTrigger {
    pub fn move_offset(&mut self, x: f32, y: f32) -> &mut Self {
        self.x_offset += x;
        self.y_offset += y;
        self
    }

    pub fn lock_to_player_x(&mut self) -> &mut Self {
        self.locked_to_player_x = true;
        self
    }

    pub fn lock_to_player_y(&mut self) -> &mut Self {
        self.locked_to_player_y = true;
        self
    }

    pub fn unlock_from_player_x(&mut self) -> &mut Self {
        self.locked_to_player_x = false;
        self
    }

    pub fn unlock_from_player_y(&mut self) -> &mut Self {
        self.locked_to_player_y = false;
        self
    }
}

object_record! {
    @sequential
    pub struct SpawnTrigger(SpawnTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub delay: HasDelay = HasDelay::default(),
        pub editor_disable: bool = false,
    }
}

object_record! {
    @sequential
    pub struct StopTrigger(StopTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
    }
}

object_record! {
    @sequential
    /// Rotates the target group around the additional group.
    pub struct RotateTrigger(RotateTrigger) {
        pub trigger: Trigger,
        pub additional_group: HasAdditionalGroup = HasAdditionalGroup::default(),
        pub duration: HasDuration = HasDuration::default(),
        pub easing: HasEasing = HasEasing::default(),
        /// Degrees.
        pub target_rotation: f32 = 0.0,
        pub rotation_locked: bool = false,
    }
}

impl RotateTrigger {
    pub fn target_rotate(&mut self, angle: f32) -> &mut Self {
        self.target_rotation += angle;
        self
    }

    pub fn lock_rotation(&mut self) -> &mut Self {
        self.rotation_locked = true;
        self
    }

    pub fn unlock_rotation(&mut self) -> &mut Self {
        self.rotation_locked = false;
        self
    }
}

object_record! {
    @sequential
    /// Makes the target group follow the additional group.
    pub struct FollowTrigger(FollowTrigger) {
        pub trigger: Trigger,
        pub additional_group: HasAdditionalGroup = HasAdditionalGroup::default(),
        pub duration: HasDuration = HasDuration::default(),
        pub easing: HasEasing = HasEasing::default(),
        pub x_modifier: f32 = 1.0,
        pub y_modifier: f32 = 1.0,
    }
}

object_record! {
    @sequential
    pub struct ShakeTrigger(ShakeTrigger) {
        pub trigger: Trigger,
        pub duration: HasDuration = HasDuration::default(),
        pub strength: f32 = 0.0,
        pub interval: f32 = 0.0,
    }
}

object_record! {
    @sequential
    pub struct AnimationTrigger(AnimationTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub animation_id: u16 = 0,
    }
}

object_record! {
    @sequential
    pub struct TouchTrigger(TouchTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub hold_mode: bool = false,
        pub dual_mode: bool = false,
        pub toggle: ToggleType = ToggleType::default(),
    }
}

object_record! {
    @sequential
    pub struct CountTrigger(CountTrigger) {
        pub trigger: Trigger,
        pub item: HasItem = HasItem::default(),
        pub count: HasCount = HasCount::default(),
        pub activate_group: HasActivateGroup = HasActivateGroup::default(),
        pub multi_activate: HasMultiActivate = HasMultiActivate::default(),
    }
}

object_record! {
    @sequential
    pub struct InstantCountTrigger(InstantCountTrigger) {
        pub trigger: Trigger,
        pub item: HasItem = HasItem::default(),
        pub count: HasCount = HasCount::default(),
        pub activate_group: HasActivateGroup = HasActivateGroup::default(),
        pub comparison: InstantCountComparison = InstantCountComparison::default(),
    }
}

object_record! {
    @sequential
    pub struct PickupTrigger(PickupTrigger) {
        pub trigger: Trigger,
        pub item: HasItem = HasItem::default(),
        pub count: HasCount = HasCount::default(),
    }
}

object_record! {
    @sequential
    pub struct FollowPlayerYTrigger(FollowPlayerYTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub delay: HasDelay = HasDelay::default(),
        pub speed: f32 = 1.0,
        pub max_speed: f32 = 0.0,
        pub offset: f32 = 0.0,
    }
}

object_record! {
    @sequential
    pub struct OnDeathTrigger(OnDeathTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub activate_group: HasActivateGroup = HasActivateGroup::default(),
    }
}

object_record! {
    /// Fires when two collision blocks touch (or stop touching).
    pub struct CollisionTrigger(CollisionTrigger) {
        pub trigger: Trigger,
        pub target_group: HasTargetGroup = HasTargetGroup::default(),
        pub activate_group: HasActivateGroup = HasActivateGroup::default(),
        /// Only the low 15 bits are stored.
        pub block_a_id: u16 = 0,
        /// Only the low 15 bits are stored.
        pub block_b_id: u16 = 0,
        pub trigger_on_exit: bool = false,
    }
}

impl Binary for CollisionTrigger {
    fn from_binary(reader: &mut Reader<'_>, options: &Options) -> Result<Self> {
        let trigger = Trigger::from_binary(reader, options)?;
        let target_group = HasTargetGroup::from_binary(reader, options)?;
        let activate_group = HasActivateGroup::from_binary(reader, options)?;

        let block_a = Flagged15::from_u16(reader.read_u16(options.order)?);
        let block_b = Flagged15::from_u16(reader.read_u16(options.order)?);

        Ok(Self {
            trigger,
            target_group,
            activate_group,
            block_a_id: block_a.value() as u16,
            block_b_id: block_b.value() as u16,
            trigger_on_exit: block_b.flag(),
        })
    }

    fn to_binary(&self, writer: &mut Writer, options: &Options) -> Result<()> {
        self.trigger.to_binary(writer, options)?;
        self.target_group.to_binary(writer, options)?;
        self.activate_group.to_binary(writer, options)?;

        // block a has no flag, its top bit is always clear
        let block_a = Flagged15::new(self.block_a_id.into(), false);
        let block_b = Flagged15::new(self.block_b_id.into(), self.trigger_on_exit);
        writer
            .write_u16(block_a.to_u16(), options.order)
            .write_u16(block_b.to_u16(), options.order);
        Ok(())
    }
}
