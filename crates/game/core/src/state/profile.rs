//! Fixed personalities for each squad slot.
//!
//! A hero's slot decides how it weighs every candidate action and where it
//! returns when nothing else is worth doing. The table is hand tuned and is
//! looked up once when a hero is first seen.

use crate::config::ArenaConfig;
use crate::geometry::Point;

/// Six positive weights that bias a hero's utility scores.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Pushes monsters onto the enemy base.
    pub attacker: f64,
    /// Protects our own base.
    pub defender: f64,
    /// Harasses enemy heroes.
    pub duelist: f64,
    /// Chases monsters.
    pub hunter: f64,
    /// Willingness to spend mana.
    pub prodigal: f64,
    /// Pull back towards the guard point.
    pub conservator: f64,
}

impl Profile {
    pub const fn new(
        attacker: f64,
        defender: f64,
        duelist: f64,
        hunter: f64,
        prodigal: f64,
        conservator: f64,
    ) -> Self {
        Self {
            attacker,
            defender,
            duelist,
            hunter,
            prodigal,
            conservator,
        }
    }
}

/// Everything a slot contributes to a hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotProfile {
    pub name: &'static str,
    pub profile: Profile,
    /// Guard point offset measured from the `(0, 0)` corner.
    pub guard_offset: Point,
}

/// Looks up the personality of the hero in `slot`.
///
/// Slot 0 stays close to home, slot 1 roams the enemy half, and every
/// later slot covers the flank.
pub fn profile_for(slot: usize) -> SlotProfile {
    let phi = ArenaConfig::GOLDEN_RATIO;
    match slot {
        0 => SlotProfile {
            name: "REX",
            profile: Profile::new(5.0, 40000.0, 1_000_000.0, 0.5, 0.0001, 0.000_000_2),
            guard_offset: Point::new(ArenaConfig::HERO_VISIBILITY, ArenaConfig::HERO_VISIBILITY),
        },
        1 => {
            let center = Point::center();
            SlotProfile {
                name: "TEX",
                profile: Profile::new(2000.0, 3.0, 1_000_000.0, 20.0, 0.001, 0.000_000_2),
                guard_offset: Point::new((center.x * phi).trunc(), (center.y * phi).trunc()),
            }
        }
        _ => {
            let radius = (ArenaConfig::HERO_VISIBILITY * phi).trunc();
            let side1 = (radius * ArenaConfig::COS_22_5 * phi).trunc();
            let side2 = (radius * ArenaConfig::SIN_22_5 * phi).trunc();
            SlotProfile {
                name: "TAU",
                profile: Profile::new(50.0, 40000.0, 100_000.0, 1.0, 0.0001, 0.000_000_2),
                guard_offset: Point::new(side2, side1),
            }
        }
    }
}

/// Places a guard offset relative to the hero's home corner.
pub fn guard_point(offset: Point, home: Point) -> Point {
    if home.x <= f64::EPSILON {
        offset
    } else {
        Point::new(home.x - offset.x, home.y - offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_have_distinct_names() {
        assert_eq!(profile_for(0).name, "REX");
        assert_eq!(profile_for(1).name, "TEX");
        assert_eq!(profile_for(2).name, "TAU");
        assert_eq!(profile_for(5).name, "TAU");
    }

    #[test]
    fn flank_guard_offset_is_rotated() {
        let offset = profile_for(2).guard_offset;
        assert_eq!(offset, Point::new(2203.0, 5320.0));
    }

    #[test]
    fn guard_point_mirrors_for_far_corner() {
        let offset = profile_for(0).guard_offset;
        assert_eq!(guard_point(offset, Point::ORIGIN), Point::new(2200.0, 2200.0));
        assert_eq!(
            guard_point(offset, Point::bottom_right()),
            Point::new(ArenaConfig::MAX_X - 2200.0, ArenaConfig::MAX_Y - 2200.0)
        );
    }
}
