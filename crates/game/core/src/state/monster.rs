use crate::config::ArenaConfig;
use crate::geometry::Point;
use crate::motion;

use super::entities::{EntityId, Structure, Threat, is_shielded};

/// A neutral monster as seen this turn, with its predicted arrival times.
///
/// All derived fields are computed once in [`Monster::new`] from the current
/// observation; nothing is carried over between turns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: EntityId,
    pub position: Point,
    pub health: i32,
    /// Point the monster is heading for. The host reports it in the
    /// velocity fields.
    pub heading: Point,
    pub shield_life: i32,
    /// The monster has locked onto a base.
    pub near_base: bool,
    pub threat: Threat,

    pub distance_from_my_base: f64,
    pub distance_from_op_base: f64,
    /// Turns until it starts damaging our base; infinite if never.
    pub time_to_my_base: f64,
    /// Turns until it starts damaging the enemy base; infinite if never.
    pub time_to_op_base: f64,
}

/// Observed fields of a monster before derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonsterSighting {
    pub id: EntityId,
    pub position: Point,
    pub health: i32,
    pub heading: Point,
    pub shield_life: i32,
    pub near_base: bool,
    pub threat: Threat,
}

impl Monster {
    pub fn new(sighting: MonsterSighting, my_base: &Structure, op_base: &Structure) -> Self {
        let distance_from_my_base = my_base.position.distance(sighting.position);
        let distance_from_op_base = op_base.position.distance(sighting.position);
        let (time_to_my_base, time_to_op_base) = time_to_impact(
            sighting.near_base,
            sighting.threat,
            distance_from_my_base,
            distance_from_op_base,
        );

        Self {
            id: sighting.id,
            position: sighting.position,
            health: sighting.health,
            heading: sighting.heading,
            shield_life: sighting.shield_life,
            near_base: sighting.near_base,
            threat: sighting.threat,
            distance_from_my_base,
            distance_from_op_base,
            time_to_my_base,
            time_to_op_base,
        }
    }

    pub fn is_shielded(&self) -> bool {
        is_shielded(self.shield_life)
    }

    /// Returns true if the monster already stands in melee range of a base.
    ///
    /// Such monsters are settled by base combat; no hero action changes
    /// their outcome this turn.
    pub fn is_engaged(&self) -> bool {
        self.time_to_my_base <= f64::EPSILON || self.time_to_op_base <= f64::EPSILON
    }

    /// Predicted position after `t` turns if the monster keeps its heading.
    pub fn position_after(&self, t: f64) -> Point {
        motion::extrapolate(self.position, self.heading, ArenaConfig::MONSTER_SPEED, t)
    }

    /// Returns true if our squad cannot kill it in melee before it reaches our base.
    pub fn outruns_squad_melee(&self) -> bool {
        self.time_to_my_base <= ArenaConfig::squad_melee_turns(self.health)
    }
}

/// Derives `(time_to_my_base, time_to_op_base)` from the monster's
/// commitment, threat and distances. Results are never negative.
pub fn time_to_impact(
    near_base: bool,
    threat: Threat,
    distance_from_my_base: f64,
    distance_from_op_base: f64,
) -> (f64, f64) {
    let travel = |distance: f64| {
        ((distance - ArenaConfig::MONSTER_ATTACK_RANGE) / ArenaConfig::MONSTER_SPEED).max(0.0)
    };

    if near_base {
        if distance_from_my_base <= ArenaConfig::MONSTER_ATTACK_RANGE {
            return (0.0, f64::INFINITY);
        }
        if distance_from_my_base <= ArenaConfig::BASE_VISIBILITY {
            return (travel(distance_from_my_base), f64::INFINITY);
        }
        if distance_from_op_base <= ArenaConfig::MONSTER_ATTACK_RANGE {
            return (f64::INFINITY, 0.0);
        }
        return (f64::INFINITY, travel(distance_from_op_base));
    }

    match threat {
        Threat::Neither => (f64::INFINITY, f64::INFINITY),
        // TODO: account for the curved approach once a monster bends towards the base.
        Threat::Mine => (travel(distance_from_my_base), f64::INFINITY),
        Threat::Enemy => (f64::INFINITY, travel(distance_from_op_base)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases() -> (Structure, Structure) {
        (
            Structure::new(Point::ORIGIN, 3),
            Structure::new(Point::bottom_right(), 3),
        )
    }

    fn sighting(position: Point, near_base: bool, threat: Threat) -> MonsterSighting {
        MonsterSighting {
            id: EntityId(10),
            position,
            health: 12,
            heading: Point::ORIGIN,
            shield_life: 0,
            near_base,
            threat,
        }
    }

    #[test]
    fn committed_monster_in_melee_range_hits_now() {
        let (mine, theirs) = bases();
        let monster = Monster::new(
            sighting(Point::new(200.0, 100.0), true, Threat::Mine),
            &mine,
            &theirs,
        );
        assert_eq!(monster.time_to_my_base, 0.0);
        assert_eq!(monster.time_to_op_base, f64::INFINITY);
        assert!(monster.is_engaged());
    }

    #[test]
    fn committed_monster_inside_visibility_walks_in() {
        let (mine, theirs) = bases();
        let monster = Monster::new(
            sighting(Point::new(2300.0, 0.0), true, Threat::Mine),
            &mine,
            &theirs,
        );
        assert!((monster.time_to_my_base - 5.0).abs() < 1e-9);
        assert_eq!(monster.time_to_op_base, f64::INFINITY);
    }

    #[test]
    fn committed_monster_far_from_home_targets_enemy() {
        let (mine, theirs) = bases();
        let position = Point::new(ArenaConfig::MAX_X - 1000.0, ArenaConfig::MAX_Y);
        let monster = Monster::new(sighting(position, true, Threat::Enemy), &mine, &theirs);
        assert_eq!(monster.time_to_my_base, f64::INFINITY);
        assert!((monster.time_to_op_base - 700.0 / 400.0).abs() < 1e-9);
    }

    #[test]
    fn wandering_monster_never_arrives() {
        let (mine, theirs) = bases();
        let monster = Monster::new(
            sighting(Point::center(), false, Threat::Neither),
            &mine,
            &theirs,
        );
        assert_eq!(monster.time_to_my_base, f64::INFINITY);
        assert_eq!(monster.time_to_op_base, f64::INFINITY);
        assert!(!monster.is_engaged());
    }

    #[test]
    fn threatening_monster_time_is_clamped() {
        let (t_mine, t_op) = time_to_impact(false, Threat::Mine, 100.0, 15000.0);
        assert_eq!(t_mine, 0.0);
        assert_eq!(t_op, f64::INFINITY);
    }

    #[test]
    fn position_after_zero_is_current() {
        let (mine, theirs) = bases();
        let mut s = sighting(Point::new(5000.0, 5000.0), false, Threat::Neither);
        s.heading = Point::new(6000.0, 5000.0);
        let monster = Monster::new(s, &mine, &theirs);
        assert!(monster.position_after(0.0).distance(monster.position) < 1e-9);
        assert!((monster.position_after(1.0).x - 5400.0).abs() < 1e-9);
    }

    #[test]
    fn emergency_when_time_to_impact_beats_melee() {
        let (mine, theirs) = bases();
        let monster = Monster::new(
            sighting(Point::new(700.0, 0.0), false, Threat::Mine),
            &mine,
            &theirs,
        );
        // One turn out, twelve health needs two squad turns.
        assert!(monster.outruns_squad_melee());
    }
}
