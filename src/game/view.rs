//! Collaborator interfaces.
//!
//! The evaluators never own game state. They read it through these traits,
//! which the host implements over its rules engine:
//!
//! - `GameView`: players, cards, turn structure, combat, stack and costs
//! - `CombatPredictor`: combat risk and damage prediction
//! - `PlayEvaluator`: the general "would the AI play this" decision
//!
//! ## Implementation Notes
//!
//! - Every query is read-only and must not change what later queries return.
//! - Player lists may be empty; evaluators handle that.
//! - `opponents` order is the order evaluators consider targets in.

use serde::{Deserialize, Serialize};

use super::combat::Combat;
use super::phase::{Phase, Zone};
use crate::cards::{Ability, Card, CardId};
use crate::core::PlayerId;

/// Read-only view of the game at decision time.
pub trait GameView {
    // === Players ===

    fn life(&self, player: PlayerId) -> i32;

    fn can_gain_life(&self, player: PlayerId) -> bool;

    fn can_lose_life(&self, player: PlayerId) -> bool;

    /// Opponents of `player`, in a stable order.
    fn opponents(&self, player: PlayerId) -> Vec<PlayerId>;

    /// Teammates of `player`, not including `player`.
    fn allies(&self, player: PlayerId) -> Vec<PlayerId>;

    fn is_opponent_of(&self, player: PlayerId, other: PlayerId) -> bool {
        self.opponents(player).contains(&other)
    }

    /// Whether `player` is a legal target for `ability`.
    fn can_be_targeted_by(&self, player: PlayerId, ability: &Ability) -> bool;

    // === Cards ===

    fn card(&self, id: CardId) -> Option<&Card>;

    /// Whether `player` controls a permanent with this name.
    fn controls_card_named(&self, player: PlayerId, name: &str) -> bool;

    /// Whether any player controls a permanent with this name.
    fn is_card_in_play(&self, name: &str) -> bool;

    fn cards_in_zone(&self, player: PlayerId, zone: Zone) -> usize;

    fn count_named_in_all_graveyards(&self, name: &str) -> usize;

    /// Abilities `player` could play from hand, alternate costs included.
    fn hand_abilities(&self, player: PlayerId) -> Vec<Ability>;

    // === Turn structure ===

    fn phase(&self) -> Phase;

    fn active_player(&self) -> PlayerId;

    fn is_phase(&self, phase: Phase) -> bool {
        self.phase() == phase
    }

    /// In `phase` of `player`'s own turn.
    fn is_phase_for(&self, phase: Phase, player: PlayerId) -> bool {
        self.phase() == phase && self.active_player() == player
    }

    /// Current combat, `None` outside combat.
    fn combat(&self) -> Option<&Combat>;

    /// Most recently added ability on the stack.
    fn stack_top(&self) -> Option<&Ability>;

    // === Mana ===

    /// Untapped mana sources of `player`, counted as if none were spent yet.
    fn available_mana_sources(&self, player: PlayerId) -> usize;

    /// Whether `player` can pay for and activate `ability` right now.
    fn can_activate_for_cost(&self, player: PlayerId, ability: &Ability) -> bool;
}

/// Combat risk assessment.
pub trait CombatPredictor {
    /// Whether `player`'s life is in serious danger from the current combat.
    fn life_in_serious_danger(&self, game: &dyn GameView, player: PlayerId) -> bool;

    /// Whether the AI should hold `ability` until blockers are known.
    fn wait_for_blocking(&self, game: &dyn GameView, ability: &Ability) -> bool;

    /// Damage `pending` is expected to deal to `player` when it resolves.
    fn predict_damage_from(&self, game: &dyn GameView, pending: &Ability, player: PlayerId) -> i32;
}

/// Outcome of the general play decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiPlayDecision {
    WillPlay,
    CantPlayAi,
    CantAfford,
    AnotherTime,
    WaitForMain2,
}

/// The AI's general decision-making, outside the evaluators in this crate.
pub trait PlayEvaluator {
    /// Would `player` play `ability` as given.
    fn can_play(&self, game: &dyn GameView, player: PlayerId, ability: &Ability) -> AiPlayDecision;

    /// Would `player` activate `ability` right away if it were free.
    fn play_immediately(&self, game: &dyn GameView, player: PlayerId, ability: &Ability) -> bool;
}
