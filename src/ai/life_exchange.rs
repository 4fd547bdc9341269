//! Life exchange evaluator.
//!
//! Exchanging a life total with a creature's power or toughness is only
//! worth it in narrow windows. Each known card gets its own rule set:
//!
//! - `GainToToughness`: swap our life with the source's toughness, as a
//!   last-ditch heal
//! - `DrainToToughness`: swap an opponent's life with the source's toughness
//! - `PowerForLife`: swap our life with the source's power, when facing
//!   lethal damage or when a big attacker makes the swap pay off

use tracing::debug;

use super::{AbilityEvaluator, AiContext};
use crate::cards::{Ability, Card, Effect, LifeExchangeVariant};
use crate::core::PlayerId;
use crate::game::{GameView, Phase};

/// At or above this life total a heal is held back unless combat is dire.
const COMFORTABLE_LIFE: i32 = 5;

/// Evaluator for `Effect::LifeExchange` abilities.
#[derive(Clone, Debug, Default)]
pub struct LifeExchangeAi;

impl LifeExchangeAi {
    /// Any punisher in play, or a redirector under an opponent's control.
    fn life_gain_is_hazardous(
        game: &dyn GameView,
        agent: PlayerId,
        punishers: &[String],
        redirectors: &[String],
    ) -> bool {
        if punishers.iter().any(|name| game.is_card_in_play(name)) {
            return true;
        }
        game.opponents(agent).into_iter().any(|op| {
            redirectors
                .iter()
                .any(|name| game.controls_card_named(op, name))
        })
    }

    fn gain_to_toughness(
        ctx: &AiContext<'_>,
        ability: &Ability,
        source: &Card,
        punishers: &[String],
        redirectors: &[String],
    ) -> bool {
        let game = ctx.game;
        let agent = ctx.agent;

        if !game.can_gain_life(agent) {
            return false;
        }
        if Self::life_gain_is_hazardous(game, agent, punishers, redirectors) {
            debug!(%agent, source = %source.name, "life gain would be punished");
            return false;
        }
        if ctx.combat.wait_for_blocking(game, ability) {
            return false;
        }

        let life = game.life(agent);
        if life + 1 >= source.toughness {
            return false;
        }
        if life >= COMFORTABLE_LIFE && !ctx.combat.life_in_serious_danger(game, agent) {
            return false;
        }

        debug!(%agent, life, toughness = source.toughness, "swapping life for toughness");
        true
    }

    fn drain_to_toughness(
        ctx: &AiContext<'_>,
        ability: &mut Ability,
        source: &Card,
        redirectors: &[String],
    ) -> bool {
        let game = ctx.game;
        let agent = ctx.agent;

        ability.reset_targets();
        if ctx.combat.wait_for_blocking(game, ability) {
            return false;
        }

        let holds_redirector =
            |player: PlayerId| redirectors.iter().any(|name| game.controls_card_named(player, name));

        for op in game.opponents(agent) {
            if !game.can_be_targeted_by(op, ability) || !game.can_lose_life(op) {
                continue;
            }

            let worth_it = if game.life(op) + 1 >= source.toughness {
                true
            } else if !game.can_gain_life(op) {
                // Gaining life is the only way a small swap can still hurt.
                false
            } else if holds_redirector(agent) {
                true
            } else {
                game.allies(agent)
                    .into_iter()
                    .any(|ally| holds_redirector(ally) && game.is_opponent_of(op, ally))
            };

            if worth_it && ctx.try_target_player(ability, op) {
                debug!(%agent, target = %op, life = game.life(op), "draining opponent to toughness");
                return true;
            }
        }
        false
    }

    fn power_for_life(ctx: &mut AiContext<'_>, source: &Card) -> bool {
        let game = ctx.game;
        let agent = ctx.agent;

        if !game.can_gain_life(agent) {
            return false;
        }

        let life = game.life(agent);
        let power = source.power;

        if power > life {
            if ctx.combat.life_in_serious_danger(game, agent) {
                debug!(%agent, power, life, "swapping power for life: combat is dire");
                return true;
            }
            if let Some(top) = game.stack_top() {
                if ctx.combat.predict_damage_from(game, top, agent) >= life {
                    debug!(%agent, power, life, pending = %top.id, "swapping power for life: lethal on the stack");
                    return true;
                }
            }
        }

        let Some(combat) = game.combat() else {
            return false;
        };
        if !game.is_phase(Phase::CombatDeclareBlockers)
            || !combat.is_attacking(source.id)
            || power <= 0
            || power >= life
        {
            return false;
        }
        let Some(defender) = combat.defender_of(source.id) else {
            return false;
        };

        let defender_life = game.life(defender);
        if combat.is_unblocked(source.id)
            && game.can_lose_life(defender)
            && life >= defender_life
            && power < defender_life
        {
            // Their life becomes our power, ours gets theirs back.
            debug!(%agent, %defender, power, "unblocked swap wins the race");
            return true;
        }

        if life > power {
            let threshold = ctx.sample_danger_threshold();
            if power >= threshold {
                debug!(%agent, power, threshold, "attacker is big enough to swap");
                return true;
            }
        }
        false
    }
}

impl AbilityEvaluator for LifeExchangeAi {
    fn check_api_logic(&self, ctx: &mut AiContext<'_>, ability: &mut Ability) -> bool {
        let variant = match &ability.effect {
            Effect::LifeExchange(Some(variant)) => variant.clone(),
            _ => {
                debug!(ability = %ability.id, "no life exchange rules for this source");
                return false;
            }
        };
        let game = ctx.game;
        let Some(source) = game.card(ability.host) else {
            return false;
        };

        match variant {
            LifeExchangeVariant::GainToToughness {
                punishers,
                redirectors,
            } => Self::gain_to_toughness(ctx, ability, source, &punishers, &redirectors),
            LifeExchangeVariant::DrainToToughness { redirectors } => {
                Self::drain_to_toughness(ctx, ability, source, &redirectors)
            }
            LifeExchangeVariant::PowerForLife => Self::power_for_life(ctx, source),
        }
    }

    fn do_trigger_no_cost(&self, ctx: &mut AiContext<'_>, ability: &mut Ability, mandatory: bool) -> bool {
        if !ability.is_targeted() {
            return true;
        }

        let game = ctx.game;
        let agent = ctx.agent;
        ability.reset_targets();

        // The weakest opponent; ties go to the earlier seat.
        let Some(opp) = game.opponents(agent).into_iter().min_by_key(|p| game.life(*p)) else {
            return false;
        };
        // Trading life totals is only voluntary when we are behind.
        if !(mandatory || game.life(agent) < game.life(opp)) {
            return false;
        }
        ctx.try_target_player(ability, opp)
    }
}
