//! Mana ability evaluator.
//!
//! Plain mana abilities are activated when the general evaluator wants to
//! play them right away. Rituals (spend mana, get more back) go through a
//! feasibility search: activate only if the surplus unlocks some spell in
//! hand the AI would actually cast this turn. The search never picks which
//! spell; it only confirms that one exists.

use tracing::{debug, trace};

use super::{AbilityEvaluator, AiContext};
use crate::cards::{Ability, AiLogic, Card, Effect, Keyword, ManaProduction};
use crate::game::{AiPlayDecision, Phase};

/// Evaluator for `Effect::Mana` abilities.
#[derive(Clone, Debug, Default)]
pub struct ManaEffectAi;

impl ManaEffectAi {
    /// Mana left over after activating `ability` and tapping every source.
    ///
    /// A counted amount that includes the ritual itself is reduced by one,
    /// since activating it moves the card out of the counted zone.
    pub fn ritual_surplus(ctx: &AiContext<'_>, ability: &Ability, production: &ManaProduction, host: &Card) -> i64 {
        let game = ctx.game;
        let sources = game.available_mana_sources(ctx.agent) as i64;
        let produced = production.amount.evaluate(game, ctx.agent);
        let self_cost = i64::from(ability.cost.mana_value());

        let mut surplus = sources - self_cost + produced;
        if production.amount.counts_zone().is_some_and(|zone| host.is_in_zone(zone)) {
            surplus -= 1;
        }
        surplus
    }

    /// Whether spending `ability` now leaves enough mana for a spell the AI
    /// wants to cast.
    pub fn evaluate_ritual(&self, ctx: &AiContext<'_>, ability: &Ability) -> bool {
        let game = ctx.game;
        let agent = ctx.agent;
        let policy = &ctx.config.ritual;

        let Effect::Mana(production) = &ability.effect else {
            return false;
        };
        let Some(host) = game.card(ability.host) else {
            return false;
        };

        let surplus = Self::ritual_surplus(ctx, ability, production, host);
        if surplus <= 0 {
            debug!(%agent, ritual = %host.name, surplus, "ritual gains no mana");
            return false;
        }

        let in_main2 = game.is_phase(Phase::Main2);
        let mut wanted: Vec<&Card> = Vec::new();

        for candidate in game.hand_abilities(agent) {
            let cost = candidate.cost.total_mana();
            if cost.mana_value() == 0 && cost.count_x() == 0 {
                // Extra mana buys nothing for a free spell.
                continue;
            }
            let Some(card) = game.card(candidate.host) else {
                continue;
            };
            if card.name == host.name {
                continue;
            }

            let free = candidate.copy_with_no_mana_cost().with_activator(agent);
            if ctx.planner.can_play(game, agent, &free) != AiPlayDecision::WillPlay {
                trace!(%agent, candidate = %card.name, "would not play even for free");
                continue;
            }
            if policy.hold_non_haste_permanents_until_main2
                && card.is_permanent()
                && !card.has_keyword(Keyword::Haste)
                && !in_main2
            {
                trace!(%agent, candidate = %card.name, "permanent could not act this turn");
                continue;
            }
            if policy.skip_instants && card.is_instant() {
                trace!(%agent, candidate = %card.name, "instants are not ritual targets");
                continue;
            }

            if !wanted.iter().any(|c| c.id == card.id) {
                wanted.push(card);
            }
        }

        let castable = wanted
            .iter()
            .filter(|card| production.restrict.matches(card))
            .filter(|card| i64::from(card.mana_value()) <= surplus)
            .filter(|card| card.colors.is_colorless() || card.colors.intersects(production.produced))
            .count();

        debug!(%agent, ritual = %host.name, surplus, wanted = wanted.len(), castable, "ritual search");
        castable > 0
    }
}

impl AbilityEvaluator for ManaEffectAi {
    fn check_phase_restrictions(&self, ctx: &AiContext<'_>, ability: &Ability) -> bool {
        ctx.game.is_phase(Phase::Main2) && ctx.game.can_activate_for_cost(ctx.agent, ability)
    }

    fn check_phase_restrictions_for_logic(&self, ctx: &AiContext<'_>, ability: &Ability, logic: &AiLogic) -> bool {
        match logic {
            AiLogic::ManaRitual => ctx.game.phase().is_main() && ctx.game.active_player() == ctx.agent,
            // Only the ritual logic widens the default window.
            AiLogic::Other(_) => self.check_phase_restrictions(ctx, ability),
        }
    }

    fn check_ai_logic(&self, ctx: &AiContext<'_>, ability: &Ability, logic: &AiLogic) -> bool {
        match logic {
            AiLogic::ManaRitual => self.evaluate_ritual(ctx, ability),
            AiLogic::Other(_) => true,
        }
    }

    fn check_api_logic(&self, ctx: &mut AiContext<'_>, ability: &mut Ability) -> bool {
        if ability.logic.is_some() {
            // Named logic already decided in check_ai_logic.
            return true;
        }

        let cost = &ability.cost;
        cost.has_no_mana_cost()
            && cost.is_reusable_resource()
            && ability.sub_ability.is_none()
            && ctx.planner.play_immediately(ctx.game, ctx.agent, ability)
    }

    fn do_trigger_no_cost(&self, _ctx: &mut AiContext<'_>, _ability: &mut Ability, _mandatory: bool) -> bool {
        true
    }
}
