//! Field bundles shared between variants.
//!
//! A variant composes a bundle by value; the bundle's fields are written
//! right where the variant embeds it. Variants embed bundles in this
//! module's declaration order.

use crate::{Color, Easing};

/// Item counter the variant reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasItem {
    pub item_id: u16,
}

sequential_binary!(HasItem { item_id });

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasCount {
    pub count: i32,
}

sequential_binary!(HasCount { count });

/// Group the variant acts upon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasTargetGroup {
    pub target_group_id: u16,
}

sequential_binary!(HasTargetGroup { target_group_id });

/// A target group plus a second group, e.g. the center of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasAdditionalGroup {
    pub target_group_id: u16,
    pub additional_group_id: u16,
}

sequential_binary!(HasAdditionalGroup {
    target_group_id,
    additional_group_id,
});

/// Whether the target group is activated (rather than deactivated).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasActivateGroup {
    pub activate_group: bool,
}

sequential_binary!(HasActivateGroup { activate_group });

/// Duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasDuration {
    pub duration: f32,
}

sequential_binary!(HasDuration { duration });

/// Delay in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasDelay {
    pub delay: f32,
}

sequential_binary!(HasDelay { delay });

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasEasing {
    pub easing: Easing,
    pub easing_rate: f32,
}

sequential_binary!(HasEasing {
    easing,
    easing_rate
});

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasMultiActivate {
    pub multi_activate: bool,
}

sequential_binary!(HasMultiActivate { multi_activate });

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HasColor {
    pub color: Color,
}

sequential_binary!(HasColor { color });
