//! Host observations and the per-turn world assembled from them.

use arrayvec::ArrayVec;

use crate::config::ArenaConfig;
use crate::error::SnapshotError;
use crate::geometry::Point;
use crate::state::{EntityId, Hero, Monster, MonsterSighting, Opponent, Structure, Threat};

/// Heroes of one side, ordered by slot.
pub type Squad = ArrayVec<Hero, { ArenaConfig::MAX_HEROES }>;

/// Fixed positions of both bases, announced once at game start.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    pub my_base: Point,
    pub op_base: Point,
}

impl ArenaLayout {
    /// Bases sit in opposite corners; the enemy takes whichever corner ours isn't.
    pub fn from_home_corner(home: Point) -> Self {
        let op_base = if home.x <= f64::EPSILON {
            Point::bottom_right()
        } else {
            Point::ORIGIN
        };
        Self {
            my_base: home,
            op_base,
        }
    }
}

/// Kind of a reported entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Monster,
    Hero,
    Opponent,
}

impl EntityKind {
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Monster),
            1 => Some(Self::Hero),
            2 => Some(Self::Opponent),
            _ => None,
        }
    }
}

/// One entity as reported by the host, with codes left undecoded.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRecord {
    pub id: EntityId,
    pub kind: i32,
    pub position: Point,
    pub shield_life: i32,
    pub is_controlled: bool,
    pub health: i32,
    /// For monsters: the point they are heading for.
    pub heading: Point,
    pub near_base: bool,
    pub threat: i32,
}

/// Everything the host reports at the start of a turn.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnSnapshot {
    pub my_health: i32,
    pub my_mana: i32,
    pub op_health: i32,
    pub op_mana: i32,
    pub entities: Vec<EntityRecord>,
}

/// Validated per-turn world the decision engine works on.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    /// Turn counter, starting at 1.
    pub turn: u32,
    pub my_base: Structure,
    pub op_base: Structure,
    pub mana: i32,
    pub opponent_mana: i32,
    pub squad: Squad,
    /// Monsters still open to hero action; engaged monsters are excluded.
    pub monsters: Vec<Monster>,
    pub opponents: Vec<Opponent>,
    /// Number of monsters dropped because they are already hitting a base.
    pub engaged_monsters: usize,
}

impl World {
    /// Builds the world for `turn` from a raw snapshot.
    ///
    /// `slot_for` maps each hero to its squad slot; heroes are ordered by it.
    pub fn from_snapshot(
        layout: &ArenaLayout,
        snapshot: &TurnSnapshot,
        turn: u32,
        mut slot_for: impl FnMut(EntityId) -> usize,
    ) -> Result<Self, SnapshotError> {
        let my_base = Structure::new(layout.my_base, snapshot.my_health);
        let op_base = Structure::new(layout.op_base, snapshot.op_health);

        let mut seen: Vec<EntityId> = Vec::with_capacity(snapshot.entities.len());
        let mut squad = Squad::new();
        let mut monsters = Vec::new();
        let mut opponents = Vec::new();

        for record in &snapshot.entities {
            if seen.contains(&record.id) {
                return Err(SnapshotError::DuplicateEntity { id: record.id });
            }
            seen.push(record.id);

            let kind = EntityKind::from_code(record.kind).ok_or(SnapshotError::UnknownEntityKind {
                id: record.id,
                code: record.kind,
            })?;

            match kind {
                EntityKind::Hero => {
                    let hero = Hero::new(
                        record.id,
                        slot_for(record.id),
                        record.position,
                        record.shield_life,
                        &my_base,
                    );
                    squad.try_push(hero).map_err(|_| SnapshotError::SquadOverflow {
                        id: record.id,
                        capacity: ArenaConfig::MAX_HEROES,
                    })?;
                }
                EntityKind::Monster => {
                    let threat = Threat::from_code(record.threat).ok_or(
                        SnapshotError::UnknownThreat {
                            id: record.id,
                            code: record.threat,
                        },
                    )?;
                    let sighting = MonsterSighting {
                        id: record.id,
                        position: record.position,
                        health: record.health,
                        heading: record.heading,
                        shield_life: record.shield_life,
                        near_base: record.near_base,
                        threat,
                    };
                    monsters.push(Monster::new(sighting, &my_base, &op_base));
                }
                EntityKind::Opponent => {
                    opponents.push(Opponent::new(record.id, record.position, record.shield_life));
                }
            }
        }

        squad.sort_by_key(|hero| hero.slot);

        let before = monsters.len();
        monsters.retain(|monster| !monster.is_engaged());
        let engaged_monsters = before - monsters.len();

        Ok(Self {
            turn,
            my_base,
            op_base,
            mana: snapshot.my_mana,
            opponent_mana: snapshot.op_mana,
            squad,
            monsters,
            opponents,
            engaged_monsters,
        })
    }
}
