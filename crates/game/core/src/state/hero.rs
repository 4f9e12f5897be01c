use crate::config::ArenaConfig;
use crate::geometry::Point;
use crate::motion;

use super::entities::{EntityId, Opponent, Structure, is_shielded};
use super::monster::Monster;
use super::profile::{Profile, guard_point, profile_for};

/// One of our heroes as seen this turn.
///
/// Slot, name, profile and guard point are fixed by the slot the hero was
/// given when first observed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hero {
    pub id: EntityId,
    pub slot: usize,
    pub name: &'static str,
    pub position: Point,
    pub shield_life: i32,
    pub profile: Profile,
    pub guard_point: Point,
}

impl Hero {
    pub fn new(
        id: EntityId,
        slot: usize,
        position: Point,
        shield_life: i32,
        home: &Structure,
    ) -> Self {
        let slot_profile = profile_for(slot);
        Self {
            id,
            slot,
            name: slot_profile.name,
            position,
            shield_life,
            profile: slot_profile.profile,
            guard_point: guard_point(slot_profile.guard_offset, home.position),
        }
    }

    pub fn is_shielded(&self) -> bool {
        is_shielded(self.shield_life)
    }

    pub fn distance_to(&self, point: Point) -> f64 {
        self.position.distance(point)
    }

    /// Approximate turns until this hero gets within push range of `monster`,
    /// assuming the monster keeps its heading.
    ///
    /// `None` means the monster cannot be caught on that heading.
    pub fn time_to_intercept(&self, monster: &Monster) -> Option<f64> {
        motion::intercept_time(
            self.position,
            ArenaConfig::HERO_SPEED,
            monster.position,
            monster.heading,
            ArenaConfig::MONSTER_SPEED,
            ArenaConfig::WIND_RANGE,
        )
    }

    /// Monsters whose current position is within `range`.
    pub fn monsters_in_range<'m>(
        &self,
        monsters: &'m [Monster],
        range: f64,
    ) -> impl Iterator<Item = &'m Monster> + 'm {
        let origin = self.position;
        monsters
            .iter()
            .filter(move |m| m.position.distance(origin) <= range)
    }

    /// Opponents still within `range` after taking one step away.
    pub fn opponents_in_range<'o>(
        &self,
        opponents: &'o [Opponent],
        range: f64,
    ) -> impl Iterator<Item = &'o Opponent> + 'o {
        let origin = self.position;
        opponents
            .iter()
            .filter(move |o| o.position.distance(origin) <= range - ArenaConfig::HERO_SPEED)
    }

    /// Squad members still within `range` after taking one step away.
    /// Includes this hero.
    pub fn heroes_in_range<'h>(
        &self,
        heroes: &'h [Hero],
        range: f64,
    ) -> impl Iterator<Item = &'h Hero> + 'h {
        let origin = self.position;
        heroes
            .iter()
            .filter(move |h| h.position.distance(origin) <= range - ArenaConfig::HERO_SPEED)
    }

    /// Returns true if this hero can hit `target` in melee within one step.
    pub fn threatens_melee(&self, target: Point) -> bool {
        self.position.distance(target) <= ArenaConfig::HERO_ATTACK_RANGE + ArenaConfig::HERO_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MonsterSighting, Threat};

    fn home() -> Structure {
        Structure::new(Point::ORIGIN, 3)
    }

    fn away() -> Structure {
        Structure::new(Point::bottom_right(), 3)
    }

    #[test]
    fn profile_and_guard_follow_slot() {
        let hero = Hero::new(EntityId(1), 0, Point::new(100.0, 100.0), 0, &home());
        assert_eq!(hero.name, "REX");
        assert_eq!(hero.guard_point, Point::new(2200.0, 2200.0));

        let mirrored = Hero::new(EntityId(4), 0, Point::new(100.0, 100.0), 0, &away());
        assert_eq!(
            mirrored.guard_point,
            Point::new(ArenaConfig::MAX_X - 2200.0, ArenaConfig::MAX_Y - 2200.0)
        );
    }

    #[test]
    fn head_on_interception_closes_to_push_range() {
        let hero = Hero::new(EntityId(1), 0, Point::new(2000.0, 4000.0), 0, &home());
        let monster = Monster::new(
            MonsterSighting {
                id: EntityId(20),
                position: Point::new(8000.0, 4000.0),
                health: 10,
                heading: Point::new(2000.0, 4000.0),
                shield_life: 0,
                near_base: false,
                threat: Threat::Neither,
            },
            &home(),
            &away(),
        );

        let t = hero.time_to_intercept(&monster).expect("monster walks into the hero");
        assert!(t >= 0.0 && t.is_finite());

        let monster_then = monster.position_after(t);
        let hero_then = hero.position.step_towards(monster_then, ArenaConfig::HERO_SPEED * t);
        assert!(hero_then.distance(monster_then) <= ArenaConfig::WIND_RANGE + 1e-6);
    }

    /// Covers only the zero-time edge; closing the gap over several turns is
    /// checked by `head_on_interception_closes_to_push_range`.
    #[test]
    fn monster_inside_push_range_is_reached_immediately() {
        let hero = Hero::new(EntityId(1), 0, Point::new(2000.0, 4000.0), 0, &home());
        let monster = Monster::new(
            MonsterSighting {
                id: EntityId(20),
                position: Point::new(2200.0, 4000.0),
                health: 10,
                heading: Point::new(2000.0, 4000.0),
                shield_life: 0,
                near_base: false,
                threat: Threat::Neither,
            },
            &home(),
            &away(),
        );

        let t = hero.time_to_intercept(&monster).expect("already within reach");
        assert_eq!(t, 0.0);
        let reach = ArenaConfig::MONSTER_ATTACK_RANGE;
        assert!(monster.position_after(t).distance(hero.position) <= reach);
    }

    #[test]
    fn range_queries_discount_a_step_for_heroes() {
        let hero = Hero::new(EntityId(1), 0, Point::ORIGIN, 0, &home());
        let opponents = vec![
            Opponent::new(EntityId(5), Point::new(1400.0, 0.0), 0),
            Opponent::new(EntityId(6), Point::new(1500.0, 0.0), 0),
        ];
        let ids: Vec<_> = hero
            .opponents_in_range(&opponents, ArenaConfig::CONTROL_RANGE)
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![EntityId(5)]);
    }
}
