use core::fmt;

use crate::config::ArenaConfig;
use crate::geometry::Point;

/// Unique identifier assigned by the host to every visible entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shield counters above this value mean the entity is immune to spells.
pub const SHIELD_THRESHOLD: i32 = 1;

/// Returns true if a shield with `shield_life` turns left blocks spells.
pub const fn is_shielded(shield_life: i32) -> bool {
    shield_life > SHIELD_THRESHOLD
}

/// A home base in one corner of the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub position: Point,
    /// Remaining health, reported by the host every turn.
    pub health: i32,
}

impl Structure {
    pub fn new(position: Point, health: i32) -> Self {
        Self { position, health }
    }

    /// Returns true if this base sits in the `(0, 0)` corner.
    pub fn is_origin_corner(&self) -> bool {
        self.position.x <= f64::EPSILON
    }
}

/// Which base a monster's current trajectory leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Threat {
    #[default]
    Neither,
    /// Heading for our base.
    Mine,
    /// Heading for the enemy base.
    Enemy,
}

impl Threat {
    /// Decodes the host's `threatFor` field.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Neither),
            1 => Some(Self::Mine),
            2 => Some(Self::Enemy),
            _ => None,
        }
    }
}

/// An enemy hero. Only its position and shield are tracked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opponent {
    pub id: EntityId,
    pub position: Point,
    pub shield_life: i32,
    /// Distance to the diagonal joining `(0, MAX_Y)` and `(MAX_X, 0)`.
    /// Opponents far from it are deep inside one half of the map.
    pub distance_from_diagonal: f64,
}

impl Opponent {
    pub fn new(id: EntityId, position: Point, shield_life: i32) -> Self {
        Self {
            id,
            position,
            shield_life,
            distance_from_diagonal: position
                .distance_from_line(Point::bottom_left(), Point::top_right()),
        }
    }

    pub fn is_shielded(&self) -> bool {
        is_shielded(self.shield_life)
    }

    /// Returns true if this opponent can hit `target` in melee within one step.
    pub fn threatens_melee(&self, target: Point) -> bool {
        self.position.distance(target) <= ArenaConfig::HERO_ATTACK_RANGE + ArenaConfig::HERO_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_threshold_is_exclusive() {
        assert!(!is_shielded(0));
        assert!(!is_shielded(1));
        assert!(is_shielded(2));
    }

    #[test]
    fn threat_codes_decode() {
        assert_eq!(Threat::from_code(0), Some(Threat::Neither));
        assert_eq!(Threat::from_code(1), Some(Threat::Mine));
        assert_eq!(Threat::from_code(2), Some(Threat::Enemy));
        assert_eq!(Threat::from_code(3), None);
    }

    #[test]
    fn opponent_on_diagonal_has_zero_distance() {
        let opponent = Opponent::new(EntityId(7), Point::center(), 0);
        assert!(opponent.distance_from_diagonal < 1.0);
    }

    #[test]
    fn opponent_in_corner_is_far_from_diagonal() {
        let opponent = Opponent::new(EntityId(7), Point::ORIGIN, 0);
        assert!(opponent.distance_from_diagonal > 7000.0);
    }
}
