//! Card-side data: cards, costs, colors, abilities and their effects.
//!
//! ## Key Types
//!
//! - `Card`: a game object (zone, controller, power/toughness, keywords)
//! - `Ability`: one effect of a card, with its cost and chosen targets
//! - `Effect`: closed set of effect kinds with their parameters
//! - `AmountExpr`: fixed or counted amounts
//! - `ManaCost` / `AbilityCost`: cost descriptors

pub mod ability;
pub mod amount;
pub mod card;
pub mod color;
pub mod cost;
pub mod effect;
pub mod targeting;

pub use ability::{Ability, AbilityId};
pub use amount::AmountExpr;
pub use card::{Card, CardId, CardType, Keyword};
pub use color::ColorSet;
pub use cost::{AbilityCost, ManaCost};
pub use effect::{AiLogic, CardFilter, Effect, EffectKind, LifeExchangeVariant, ManaProduction};
pub use targeting::{Target, TargetChoices, TargetFilter, TargetSpec};
