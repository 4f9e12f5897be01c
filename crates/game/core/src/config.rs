/// Arena rules and tunable parameters.
///
/// The numeric rules of the arena are compile-time constants. The only
/// runtime value is the squad size announced by the host in the game header.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Number of heroes each side controls.
    pub heroes_per_player: usize,
}

impl ArenaConfig {
    // ===== arena extents =====
    pub const MAX_X: f64 = 17630.0;
    pub const MAX_Y: f64 = 9000.0;

    // ===== squad =====
    /// Upper bound on heroes per side; sizes the squad storage.
    pub const MAX_HEROES: usize = 3;

    // ===== spells =====
    pub const SPELL_COST: i32 = 10;
    /// Reach of the push spell. Also the buffer used by interception:
    /// a hero only needs to close to this distance to act on a monster.
    pub const WIND_RANGE: f64 = 1280.0;
    pub const SHIELD_RANGE: f64 = 2200.0;
    /// Turns a shield lasts once cast.
    pub const SHIELD_LIFE: f64 = 12.0;
    pub const CONTROL_RANGE: f64 = 2200.0;

    // ===== heroes =====
    pub const HERO_SPEED: f64 = 800.0;
    pub const HERO_DAMAGE: f64 = 2.0;
    pub const HERO_ATTACK_RANGE: f64 = 800.0;
    pub const HERO_VISIBILITY: f64 = 2200.0;

    // ===== monsters =====
    pub const MONSTER_SPEED: f64 = 400.0;
    /// Distance at which a monster damages a base.
    pub const MONSTER_ATTACK_RANGE: f64 = 300.0;
    /// Radius around a base inside which monsters lock onto it.
    pub const BASE_VISIBILITY: f64 = 5000.0;

    // ===== formation geometry =====
    pub const GOLDEN_RATIO: f64 = 1.618;
    pub const COS_22_5: f64 = 0.92387953;
    pub const SIN_22_5: f64 = 0.38268343;

    pub fn with_heroes_per_player(heroes_per_player: usize) -> Self {
        Self { heroes_per_player }
    }

    /// Turns the whole squad needs to kill a monster with `health` in melee.
    ///
    /// Emergency checks compare a monster's time to impact against this.
    pub fn squad_melee_turns(health: i32) -> f64 {
        (f64::from(health) / (Self::HERO_DAMAGE * Self::MAX_HEROES as f64)).ceil()
    }
}
