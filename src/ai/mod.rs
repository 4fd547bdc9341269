//! Ability evaluators for the AI player.
//!
//! An evaluator answers two questions about one family of effects:
//! should the agent activate this ability now, and once a trigger has fired,
//! which targets (if any) should it take. Evaluators are stateless unit
//! structs; everything a decision depends on arrives in an `AiContext`.
//!
//! - `LifeExchangeAi`: life-for-power/toughness swaps
//! - `ManaEffectAi`: mana abilities and rituals
//! - `EvaluatorRegistry`: picks the evaluator for an ability's effect kind

pub mod life_exchange;
pub mod mana;
pub mod registry;

pub use life_exchange::LifeExchangeAi;
pub use mana::ManaEffectAi;
pub use registry::EvaluatorRegistry;

use crate::cards::{Ability, AiLogic, Target};
use crate::core::{AiConfig, PlayerId, RandomSource};
use crate::game::{CombatPredictor, GameView, PlayEvaluator};

/// Everything one decision reads from.
///
/// Built fresh for each call. Nothing in it outlives the decision.
pub struct AiContext<'a> {
    /// The AI-controlled player.
    pub agent: PlayerId,
    pub game: &'a dyn GameView,
    pub combat: &'a dyn CombatPredictor,
    pub planner: &'a dyn PlayEvaluator,
    pub config: &'a AiConfig,
    rng: &'a mut dyn RandomSource,
}

impl<'a> AiContext<'a> {
    pub fn new(
        agent: PlayerId,
        game: &'a dyn GameView,
        combat: &'a dyn CombatPredictor,
        planner: &'a dyn PlayEvaluator,
        config: &'a AiConfig,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            agent,
            game,
            combat,
            planner,
            config,
            rng,
        }
    }

    /// Life total at or below which the agent considers itself threatened.
    ///
    /// Drawn from `[danger_threshold, danger_max_threshold)` so the AI is not
    /// perfectly predictable. A degenerate range yields the lower bound.
    pub fn sample_danger_threshold(&mut self) -> i32 {
        let min = self.config.danger_threshold;
        let max = self.config.danger_max_threshold;
        if max > min {
            self.rng.next_in_range(min..max)
        } else {
            min
        }
    }

    /// Target `player` with `ability` if the game allows it.
    ///
    /// Returns whether the target was recorded.
    pub fn try_target_player(&self, ability: &mut Ability, player: PlayerId) -> bool {
        if !self.game.can_be_targeted_by(player, ability) {
            return false;
        }
        ability.add_target(Target::Player(player));
        true
    }
}

/// Decision contract shared by every effect family.
///
/// `can_play` runs the standard pipeline:
/// 1. with a named logic: `check_ai_logic`, then `check_phase_restrictions_for_logic`
/// 2. without: `check_phase_restrictions`
/// 3. `check_api_logic`
pub trait AbilityEvaluator: Send + Sync {
    /// Timing gate for abilities without a named logic.
    fn check_phase_restrictions(&self, _ctx: &AiContext<'_>, _ability: &Ability) -> bool {
        true
    }

    /// Timing gate for abilities with a named logic.
    fn check_phase_restrictions_for_logic(
        &self,
        _ctx: &AiContext<'_>,
        _ability: &Ability,
        _logic: &AiLogic,
    ) -> bool {
        true
    }

    /// Bespoke reasoning selected by a named logic.
    fn check_ai_logic(&self, _ctx: &AiContext<'_>, _ability: &Ability, _logic: &AiLogic) -> bool {
        true
    }

    /// The effect family's own activation heuristic. May choose targets.
    fn check_api_logic(&self, ctx: &mut AiContext<'_>, ability: &mut Ability) -> bool;

    /// A trigger has fired and costs nothing: choose targets, or decline.
    fn do_trigger_no_cost(&self, ctx: &mut AiContext<'_>, ability: &mut Ability, mandatory: bool) -> bool;

    /// Should the agent voluntarily activate `ability` now.
    fn can_play(&self, ctx: &mut AiContext<'_>, ability: &mut Ability) -> bool {
        match ability.logic.clone() {
            Some(logic) => {
                if !self.check_ai_logic(ctx, ability, &logic) {
                    return false;
                }
                if !self.check_phase_restrictions_for_logic(ctx, ability, &logic) {
                    return false;
                }
            }
            None => {
                if !self.check_phase_restrictions(ctx, ability) {
                    return false;
                }
            }
        }
        self.check_api_logic(ctx, ability)
    }
}
