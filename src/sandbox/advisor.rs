//! Scripted combat and play answers.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::{Ability, AbilityId, CardId};
use crate::core::PlayerId;
use crate::game::{AiPlayDecision, CombatPredictor, GameView, PlayEvaluator};

/// Stand-in for the host's combat predictor and play planner.
///
/// Every answer is fixed up front with the builder methods. The planner
/// only approves free activations: a listed card whose ability still costs
/// mana gets `CantAfford`, which lets callers observe that what-if copies
/// really were made free.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAdvisor {
    in_danger: FxHashSet<PlayerId>,
    wait_for_blocking: bool,
    predicted_damage: FxHashMap<AbilityId, i32>,
    will_play: FxHashSet<CardId>,
    play_immediately: bool,
}

impl ScriptedAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_danger(mut self, player: PlayerId) -> Self {
        self.in_danger.insert(player);
        self
    }

    #[must_use]
    pub fn waiting_for_blocking(mut self) -> Self {
        self.wait_for_blocking = true;
        self
    }

    /// Damage the pending ability is expected to deal.
    #[must_use]
    pub fn predicts_damage(mut self, ability: AbilityId, amount: i32) -> Self {
        self.predicted_damage.insert(ability, amount);
        self
    }

    /// Approve free activations of abilities hosted by `card`.
    #[must_use]
    pub fn will_play(mut self, card: CardId) -> Self {
        self.will_play.insert(card);
        self
    }

    #[must_use]
    pub fn plays_immediately(mut self) -> Self {
        self.play_immediately = true;
        self
    }
}

impl CombatPredictor for ScriptedAdvisor {
    fn life_in_serious_danger(&self, _game: &dyn GameView, player: PlayerId) -> bool {
        self.in_danger.contains(&player)
    }

    fn wait_for_blocking(&self, _game: &dyn GameView, _ability: &Ability) -> bool {
        self.wait_for_blocking
    }

    fn predict_damage_from(&self, _game: &dyn GameView, pending: &Ability, _player: PlayerId) -> i32 {
        self.predicted_damage.get(&pending.id).copied().unwrap_or(0)
    }
}

impl PlayEvaluator for ScriptedAdvisor {
    fn can_play(&self, _game: &dyn GameView, _player: PlayerId, ability: &Ability) -> AiPlayDecision {
        if !self.will_play.contains(&ability.host) {
            AiPlayDecision::CantPlayAi
        } else if ability.cost.has_no_mana_cost() {
            AiPlayDecision::WillPlay
        } else {
            AiPlayDecision::CantAfford
        }
    }

    fn play_immediately(&self, _game: &dyn GameView, _player: PlayerId, _ability: &Ability) -> bool {
        self.play_immediately
    }
}
