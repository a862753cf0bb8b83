//! Well-known game object ids.

pub const DEFAULT_BLOCK: u16 = 1;

pub const SECRET_COIN: u16 = 142;
pub const USER_COIN: u16 = 1329;
pub const COINS: &[u16] = &[SECRET_COIN, USER_COIN];

pub const TEXT: u16 = 914;
pub const TELEPORT_PORTAL: u16 = 747;
pub const ANIMATED_OBJECT: u16 = 918;
pub const COLLISION_BLOCK: u16 = 1816;

pub const YELLOW_ORB: u16 = 36;
pub const ORBS: &[u16] = &[36, 84, 141, 1022, 1330, 1333, 1594, 1704, 1751];

pub const PICKUP_ITEM: u16 = 1275;
pub const PICKUP_ITEMS: &[u16] = &[1275, 1587, 1589, 1598, 1614];

pub const COLOR_TRIGGER: u16 = 899;
/// Color triggers, including the legacy per-channel ones.
pub const COLOR_TRIGGERS: &[u16] = &[29, 30, 104, 105, 221, 717, 718, 743, 744, 899, 900, 915];

pub const PULSE_TRIGGER: u16 = 1006;
pub const MOVE_TRIGGER: u16 = 901;
pub const SPAWN_TRIGGER: u16 = 1268;
pub const STOP_TRIGGER: u16 = 1616;
pub const ROTATE_TRIGGER: u16 = 1346;
pub const FOLLOW_TRIGGER: u16 = 1347;
pub const SHAKE_TRIGGER: u16 = 1520;
pub const ANIMATION_TRIGGER: u16 = 1585;
pub const TOUCH_TRIGGER: u16 = 1595;
pub const COUNT_TRIGGER: u16 = 1611;
pub const INSTANT_COUNT_TRIGGER: u16 = 1811;
pub const PICKUP_TRIGGER: u16 = 1817;
pub const FOLLOW_PLAYER_Y_TRIGGER: u16 = 1814;
pub const ON_DEATH_TRIGGER: u16 = 1812;
pub const COLLISION_TRIGGER: u16 = 1815;

pub const TOGGLE_TRIGGER: u16 = 1932;
/// Triggers without a specialized record (enter effects, camera, toggles).
pub const GENERIC_TRIGGERS: &[u16] = &[
    22, 23, 24, 25, 26, 27, 28, 32, 33, 55, 56, 57, 58, 59, 1612, 1613, 1818, 1819, 1915, 1917,
    1932, 1934, 1935,
];
