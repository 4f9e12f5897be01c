//! Hero commands and the decision record produced for each hero every turn.

use crate::config::ArenaConfig;
use crate::geometry::Point;
use crate::state::EntityId;

/// Command keywords understood by the host.
///
/// The `message` of each variant is the incantation the hero shouts when
/// the command is issued.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumMessage,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    #[strum(serialize = "WAIT", message = "Confundo")]
    Wait,
    #[strum(serialize = "MOVE", message = "Accio")]
    Move,
    #[strum(serialize = "SPELL WIND", message = "Leviossa")]
    Wind,
    #[strum(serialize = "SPELL SHIELD", message = "Patronum")]
    Shield,
    #[strum(serialize = "SPELL CONTROL", message = "Imperius")]
    Control,
}

impl Command {
    /// Returns true for commands that consume mana.
    pub const fn is_spell(self) -> bool {
        matches!(self, Self::Wind | Self::Shield | Self::Control)
    }
}

/// A fully parameterised hero action.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Action {
    Wait,
    /// Walk towards `destination`.
    Move { destination: Point },
    /// Push every monster and opponent in range away, towards `direction`.
    Wind { direction: Point },
    /// Make `target` immune to spells for a while.
    Shield { target: EntityId },
    /// Force `target` to walk towards `destination` next turn.
    Control { target: EntityId, destination: Point },
}

impl Action {
    pub const fn command(&self) -> Command {
        match self {
            Self::Wait => Command::Wait,
            Self::Move { .. } => Command::Move,
            Self::Wind { .. } => Command::Wind,
            Self::Shield { .. } => Command::Shield,
            Self::Control { .. } => Command::Control,
        }
    }

    /// Mana this action consumes.
    pub const fn mana_cost(&self) -> i32 {
        if self.command().is_spell() {
            ArenaConfig::SPELL_COST
        } else {
            0
        }
    }
}

/// A hero's committed action for the turn plus its side effects on the
/// rest of the squad.
///
/// `claims` lists entities that later heroes must not consider this turn.
/// It is only ever non-empty for spells.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub hero: EntityId,
    pub action: Action,
    claims: Vec<EntityId>,
}

impl Decision {
    pub fn wait(hero: EntityId) -> Self {
        Self {
            hero,
            action: Action::Wait,
            claims: Vec::new(),
        }
    }

    pub fn walk(hero: EntityId, destination: Point) -> Self {
        Self {
            hero,
            action: Action::Move { destination },
            claims: Vec::new(),
        }
    }

    /// A spell that reserves `claims` for this hero.
    ///
    /// Claims attached to a non-spell action are dropped.
    pub fn cast(hero: EntityId, action: Action, claims: Vec<EntityId>) -> Self {
        let claims = if action.command().is_spell() {
            claims
        } else {
            Vec::new()
        };
        Self {
            hero,
            action,
            claims,
        }
    }

    pub fn claims(&self) -> &[EntityId] {
        &self.claims
    }

    pub fn mana_cost(&self) -> i32 {
        self.action.mana_cost()
    }

    pub fn is_wait(&self) -> bool {
        matches!(self.action, Action::Wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumMessage;

    #[test]
    fn spells_cost_mana_and_movement_is_free() {
        let hero = EntityId(1);
        assert_eq!(Decision::wait(hero).mana_cost(), 0);
        assert_eq!(Decision::walk(hero, Point::center()).mana_cost(), 0);
        let shield = Decision::cast(
            hero,
            Action::Shield { target: EntityId(9) },
            vec![EntityId(9)],
        );
        assert_eq!(shield.mana_cost(), ArenaConfig::SPELL_COST);
        assert_eq!(shield.claims(), &[EntityId(9)]);
    }

    #[test]
    fn claims_are_dropped_for_movement() {
        let decision = Decision::cast(
            EntityId(1),
            Action::Move { destination: Point::center() },
            vec![EntityId(9)],
        );
        assert!(decision.claims().is_empty());
    }

    #[test]
    fn commands_carry_keyword_and_incantation() {
        assert_eq!(Command::Wind.to_string(), "SPELL WIND");
        assert_eq!(Command::Control.get_message(), Some("Imperius"));
        assert_eq!(Command::Wait.get_message(), Some("Confundo"));
    }
}
