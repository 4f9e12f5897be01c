//! Candidate actions a hero weighs every turn.
//!
//! Candidates run in declaration order against one [`Accumulator`]. Scored
//! candidates offer their best option; two emergencies skip scoring
//! altogether and end the hero's evaluation with [`ControlFlow::Break`].

use std::ops::ControlFlow;

use arena_core::{Action, ArenaConfig, Decision, MapTriangle, Monster, Point, Structure, Threat};

use super::scoring::{Accumulator, weigh};
use crate::api::DecisionContext;

/// The rules a hero considers, in evaluation order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Candidate {
    /// Blow away monsters our melee cannot stop in time.
    EmergencyWind,
    /// Send the enemy hero deepest in one half back to the center.
    CharmOpponent,
    /// Shield a monster that is about to hurt the enemy base.
    ShieldMonster,
    /// Steer a monster into the enemy base, or away from ours in an emergency.
    CharmMonster,
    /// Walk to where a monster will be.
    Intercept,
    ReturnToGuard,
    /// Shield a squad member when there is nothing else to do.
    SupportShield,
}

impl Candidate {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns false for candidates that commit without a utility score.
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::EmergencyWind | Self::SupportShield)
    }

    /// Runs this candidate against the hero in `ctx`.
    ///
    /// `Break` carries a decision that must be committed immediately.
    pub fn evaluate(
        self,
        ctx: &DecisionContext<'_>,
        acc: &mut Accumulator,
    ) -> ControlFlow<Decision> {
        match self {
            Self::EmergencyWind => emergency_wind(ctx),
            Self::CharmOpponent => charm_opponent(ctx, acc),
            Self::ShieldMonster => shield_monster(ctx, acc),
            Self::CharmMonster => charm_monster(ctx, acc),
            Self::Intercept => intercept(ctx, acc),
            Self::ReturnToGuard => return_to_guard(ctx, acc),
            Self::SupportShield => support_shield(ctx, acc),
        }
    }
}

fn emergency_wind(ctx: &DecisionContext<'_>) -> ControlFlow<Decision> {
    if !ctx.can_cast() {
        return ControlFlow::Continue(());
    }

    let in_range: Vec<&Monster> = ctx.vulnerable_monsters(ArenaConfig::WIND_RANGE).collect();
    if !in_range.iter().any(|monster| monster.outruns_squad_melee()) {
        return ControlFlow::Continue(());
    }

    // The push hits everything in range, so all of it is spoken for.
    let claims = in_range.iter().map(|monster| monster.id).collect();
    ControlFlow::Break(Decision::cast(
        ctx.hero.id,
        Action::Wind {
            direction: ctx.op_base.position,
        },
        claims,
    ))
}

fn charm_opponent(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    if !ctx.can_cast() {
        return ControlFlow::Continue(());
    }

    let farthest = ctx
        .vulnerable_opponents(ArenaConfig::CONTROL_RANGE)
        .reduce(|best, opponent| {
            if opponent.distance_from_diagonal > best.distance_from_diagonal {
                opponent
            } else {
                best
            }
        });

    if let Some(opponent) = farthest {
        let profile = &ctx.hero.profile;
        let score = weigh(
            ctx.turn_factor()
                * ctx.mana_factor()
                * profile.prodigal
                * profile.duelist
                * opponent.distance_from_diagonal,
            1.0,
        );
        acc.offer(Candidate::CharmOpponent, score, || {
            Decision::cast(
                ctx.hero.id,
                Action::Control {
                    target: opponent.id,
                    destination: Point::center(),
                },
                vec![opponent.id],
            )
        });
    }

    ControlFlow::Continue(())
}

fn shield_monster(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    if !ctx.can_cast() {
        return ControlFlow::Continue(());
    }

    let eligible = ctx
        .vulnerable_monsters(ArenaConfig::SHIELD_RANGE)
        .filter(|monster| ctx.is_ahead_of_squad(monster))
        .filter(|monster| {
            monster.threat == Threat::Enemy || monster.time_to_op_base <= ArenaConfig::SHIELD_LIFE
        })
        .filter(|monster| !ctx.is_about_to_be_meleed(monster.position));

    for monster in eligible {
        acc.offer(Candidate::ShieldMonster, attack_weight(ctx, monster), || {
            Decision::cast(
                ctx.hero.id,
                Action::Shield { target: monster.id },
                vec![monster.id],
            )
        });
    }

    ControlFlow::Continue(())
}

fn charm_monster(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    if !ctx.can_cast() {
        return ControlFlow::Continue(());
    }

    if let Some(monster) = ctx
        .vulnerable_monsters(ArenaConfig::CONTROL_RANGE)
        .find(|monster| monster.outruns_squad_melee())
    {
        // One charm does not settle the threat; other heroes may still act
        // on the rest of the pool.
        return ControlFlow::Break(Decision::cast(
            ctx.hero.id,
            Action::Control {
                target: monster.id,
                destination: ctx.op_base.position,
            },
            vec![monster.id],
        ));
    }

    let eligible = ctx
        .vulnerable_monsters(ArenaConfig::CONTROL_RANGE)
        .filter(|monster| monster.threat == Threat::Neither)
        .filter(|monster| ctx.is_ahead_of_squad(monster))
        .filter(|monster| !ctx.is_about_to_be_meleed(monster.position));

    for monster in eligible {
        acc.offer(Candidate::CharmMonster, attack_weight(ctx, monster), || {
            Decision::cast(
                ctx.hero.id,
                Action::Control {
                    target: monster.id,
                    destination: charm_aim(monster.position, ctx.op_base),
                },
                vec![monster.id],
            )
        });
    }

    ControlFlow::Continue(())
}

fn intercept(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    let profile = &ctx.hero.profile;

    for monster in ctx
        .monsters
        .iter()
        .filter(|monster| monster.threat != Threat::Enemy)
    {
        // Aim one step past the meeting point; an uncatchable monster is
        // simply followed.
        let lead = ctx.hero.time_to_intercept(monster).filter(|t| *t > 0.0);
        let meeting = monster.position_after(lead.map_or(1.0, |t| t + 1.0));
        if !meeting.is_valid() {
            continue;
        }

        let hunt = weigh(
            profile.hunter * f64::from(monster.health),
            ctx.turn_factor() * ctx.mana_factor() * ctx.hero.distance_to(monster.position),
        );
        let defend = weigh(
            ctx.turn_factor() * profile.defender,
            monster.distance_from_my_base,
        );

        acc.offer(Candidate::Intercept, hunt.max(defend), || {
            Decision::walk(ctx.hero.id, meeting)
        });
    }

    ControlFlow::Continue(())
}

fn return_to_guard(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    let hero = ctx.hero;
    let score = weigh(
        hero.distance_to(hero.guard_point) * hero.profile.conservator,
        ctx.turn_factor() * hero.profile.hunter,
    );
    acc.offer(Candidate::ReturnToGuard, score, || {
        Decision::walk(hero.id, hero.guard_point)
    });

    ControlFlow::Continue(())
}

fn support_shield(ctx: &DecisionContext<'_>, acc: &mut Accumulator) -> ControlFlow<Decision> {
    if !ctx.can_cast() || ctx.has_open_threat() || !acc.is_idle() {
        return ControlFlow::Continue(());
    }

    // First in slot order; the acting hero counts as in range of itself.
    let ally = ctx
        .hero
        .heroes_in_range(ctx.squad, ArenaConfig::SHIELD_RANGE)
        .find(|hero| !hero.is_shielded());

    if let Some(ally) = ally {
        acc.fill_idle(
            Candidate::SupportShield,
            Decision::cast(ctx.hero.id, Action::Shield { target: ally.id }, vec![ally.id]),
        );
    }

    ControlFlow::Continue(())
}

/// Shared weight of spells that help a monster reach the enemy base.
fn attack_weight(ctx: &DecisionContext<'_>, monster: &Monster) -> f64 {
    let profile = &ctx.hero.profile;
    weigh(
        ctx.turn_factor()
            * ctx.mana_factor()
            * profile.prodigal
            * f64::from(monster.health)
            * profile.attacker,
        monster.distance_from_op_base * profile.hunter,
    )
}

/// Where a charmed monster is sent: a corner of the enemy base's sight
/// radius on the monster's side of the map.
pub fn charm_aim(monster: Point, op_base: &Structure) -> Point {
    let offset = ArenaConfig::BASE_VISIBILITY / ArenaConfig::GOLDEN_RATIO;
    let base = op_base.position;

    match (monster.map_triangle(), op_base.is_origin_corner()) {
        (MapTriangle::Upper, true) => Point::new(0.0, offset),
        (MapTriangle::Upper, false) => Point::new(base.x - offset, base.y),
        (MapTriangle::Lower, true) => Point::new(offset, 0.0),
        (MapTriangle::Lower, false) => Point::new(base.x, base.y - offset),
    }
}
