//! Game-side interfaces the evaluators read from.
//!
//! The rules engine is external. This module defines the shapes it exposes:
//! turn structure, zones, combat state, and the query traits.

pub mod combat;
pub mod phase;
pub mod view;

pub use combat::{Attack, Combat};
pub use phase::{Phase, Zone};
pub use view::{AiPlayDecision, CombatPredictor, GameView, PlayEvaluator};
