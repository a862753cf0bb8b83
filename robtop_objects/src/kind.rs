use crate::ids;

/// Tag naming each leaf variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
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

impl ObjectKind {
    pub const ALL: &'static [Self] = &[
        Self::Object,
        Self::Coin,
        Self::Text,
        Self::Teleport,
        Self::AnimatedObject,
        Self::CollisionBlock,
        Self::Orb,
        Self::PickupItem,
        Self::Trigger,
        Self::ColorTrigger,
        Self::PulseTrigger,
        Self::MoveTrigger,
        Self::SpawnTrigger,
        Self::StopTrigger,
        Self::RotateTrigger,
        Self::FollowTrigger,
        Self::ShakeTrigger,
        Self::AnimationTrigger,
        Self::TouchTrigger,
        Self::CountTrigger,
        Self::InstantCountTrigger,
        Self::PickupTrigger,
        Self::FollowPlayerYTrigger,
        Self::OnDeathTrigger,
        Self::CollisionTrigger,
    ];

    /// True for the trigger header and every trigger specialization.
    pub const fn is_trigger(self) -> bool {
        matches!(
            self,
            Self::Trigger
                | Self::ColorTrigger
                | Self::PulseTrigger
                | Self::MoveTrigger
                | Self::SpawnTrigger
                | Self::StopTrigger
                | Self::RotateTrigger
                | Self::FollowTrigger
                | Self::ShakeTrigger
                | Self::AnimationTrigger
                | Self::TouchTrigger
                | Self::CountTrigger
                | Self::InstantCountTrigger
                | Self::PickupTrigger
                | Self::FollowPlayerYTrigger
                | Self::OnDeathTrigger
                | Self::CollisionTrigger
        )
    }

    /// True for variants composing a target group, directly or through
    /// the additional-group bundle.
    pub const fn has_target_group(self) -> bool {
        matches!(
            self,
            Self::PickupItem
                | Self::SpawnTrigger
                | Self::StopTrigger
                | Self::RotateTrigger
                | Self::FollowTrigger
                | Self::AnimationTrigger
                | Self::TouchTrigger
                | Self::FollowPlayerYTrigger
                | Self::OnDeathTrigger
                | Self::CollisionTrigger
        )
    }

    /// Id given to freshly constructed records of this kind.
    pub const fn default_id(self) -> u16 {
        match self {
            Self::Object => ids::DEFAULT_BLOCK,
            Self::Coin => ids::USER_COIN,
            Self::Text => ids::TEXT,
            Self::Teleport => ids::TELEPORT_PORTAL,
            Self::AnimatedObject => ids::ANIMATED_OBJECT,
            Self::CollisionBlock => ids::COLLISION_BLOCK,
            Self::Orb => ids::YELLOW_ORB,
            Self::PickupItem => ids::PICKUP_ITEM,
            Self::Trigger => ids::TOGGLE_TRIGGER,
            Self::ColorTrigger => ids::COLOR_TRIGGER,
            Self::PulseTrigger => ids::PULSE_TRIGGER,
            Self::MoveTrigger => ids::MOVE_TRIGGER,
            Self::SpawnTrigger => ids::SPAWN_TRIGGER,
            Self::StopTrigger => ids::STOP_TRIGGER,
            Self::RotateTrigger => ids::ROTATE_TRIGGER,
            Self::FollowTrigger => ids::FOLLOW_TRIGGER,
            Self::ShakeTrigger => ids::SHAKE_TRIGGER,
            Self::AnimationTrigger => ids::ANIMATION_TRIGGER,
            Self::TouchTrigger => ids::TOUCH_TRIGGER,
            Self::CountTrigger => ids::COUNT_TRIGGER,
            Self::InstantCountTrigger => ids::INSTANT_COUNT_TRIGGER,
            Self::PickupTrigger => ids::PICKUP_TRIGGER,
            Self::FollowPlayerYTrigger => ids::FOLLOW_PLAYER_Y_TRIGGER,
            Self::OnDeathTrigger => ids::ON_DEATH_TRIGGER,
            Self::CollisionTrigger => ids::COLLISION_TRIGGER,
        }
    }

    /// Guess the variant of a record from its object id.
    ///
    /// Unknown ids are plain objects.
    pub fn infer(id: u16) -> Self {
        match id {
            ids::TEXT => return Self::Text,
            ids::TELEPORT_PORTAL => return Self::Teleport,
            ids::ANIMATED_OBJECT => return Self::AnimatedObject,
            ids::COLLISION_BLOCK => return Self::CollisionBlock,
            _ => {}
        }

        if ids::COINS.contains(&id) {
            Self::Coin
        } else if ids::ORBS.contains(&id) {
            Self::Orb
        } else if ids::PICKUP_ITEMS.contains(&id) {
            Self::PickupItem
        } else if ids::COLOR_TRIGGERS.contains(&id) {
            Self::ColorTrigger
        } else if ids::GENERIC_TRIGGERS.contains(&id) {
            Self::Trigger
        } else {
            Self::ALL
                .iter()
                .copied()
                .filter(|kind| kind.is_trigger())
                .find(|kind| kind.default_id() == id)
                .unwrap_or(Self::Object)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ids_infer_back() {
        for &kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::infer(kind.default_id()), kind, "{kind:?}");
        }
    }

    #[test]
    fn inference_table() {
        assert_eq!(ObjectKind::infer(142), ObjectKind::Coin);
        assert_eq!(ObjectKind::infer(1333), ObjectKind::Orb);
        assert_eq!(ObjectKind::infer(29), ObjectKind::ColorTrigger);
        assert_eq!(ObjectKind::infer(1613), ObjectKind::Trigger);
        assert_eq!(ObjectKind::infer(2), ObjectKind::Object);
        assert_eq!(ObjectKind::infer(u16::MAX), ObjectKind::Object);
    }

    #[test]
    fn capabilities() {
        assert_eq!(ObjectKind::ALL.len(), 25);
        assert!(!ObjectKind::Orb.is_trigger());
        assert!(ObjectKind::Trigger.is_trigger());
        assert!(!ObjectKind::Trigger.has_target_group());
        assert!(ObjectKind::PickupItem.has_target_group());
        assert!(!ObjectKind::CountTrigger.has_target_group());
    }
}
