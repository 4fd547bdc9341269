//! # ccg-ability-ai
//!
//! Heuristic ability evaluators for an AI card game player.
//!
//! Given a game snapshot and an ability the AI could use, an evaluator
//! decides whether to activate it now, and for cost-free triggers which
//! player (if any) to target.
//!
//! ## Design Principles
//!
//! 1. **Read-Only Game Access**: Evaluators see the game only through the
//!    `GameView`, `CombatPredictor` and `PlayEvaluator` traits. They never
//!    mutate game state; the only thing they write is the target list of
//!    the ability being judged.
//!
//! 2. **Deterministic Under Seed**: The one random input (the danger
//!    threshold) comes from an injected `RandomSource`.
//!
//! 3. **Typed Ability Data**: Effects, amounts and costs are parsed into
//!    enums once, not re-read from strings on every decision.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: cards, abilities, costs, colors, effects, targeting
//! - `game`: phases, zones, combat, and the game-side traits
//! - `ai`: the evaluators and their registry
//! - `sandbox`: in-memory `GameView` and scripted advisor

pub mod core;
pub mod cards;
pub mod game;
pub mod ai;
pub mod sandbox;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState, RandomSource,
    AiConfig, RitualPolicy,
    Error, Result,
};

pub use crate::cards::{
    Ability, AbilityId, AbilityCost, ManaCost, AmountExpr,
    Card, CardId, CardType, Keyword, ColorSet,
    Effect, EffectKind, LifeExchangeVariant, ManaProduction, CardFilter, AiLogic,
    Target, TargetChoices, TargetFilter, TargetSpec,
};

pub use crate::game::{
    Phase, Zone, Attack, Combat,
    GameView, CombatPredictor, PlayEvaluator, AiPlayDecision,
};

pub use crate::ai::{AiContext, AbilityEvaluator, EvaluatorRegistry, LifeExchangeAi, ManaEffectAi};

pub use crate::sandbox::{ScriptedAdvisor, Seat, Table};
