//! Evaluator lookup by effect kind.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{AbilityEvaluator, AiContext, LifeExchangeAi, ManaEffectAi};
use crate::cards::{Ability, EffectKind};

/// Maps effect kinds to their evaluators.
///
/// Abilities whose kind has no evaluator are never played and their
/// triggers are declined.
pub struct EvaluatorRegistry {
    evaluators: FxHashMap<EffectKind, Box<dyn AbilityEvaluator>>,
}

impl EvaluatorRegistry {
    /// A registry with no evaluators.
    pub fn empty() -> Self {
        Self {
            evaluators: FxHashMap::default(),
        }
    }

    /// Register (or replace) the evaluator for a kind.
    pub fn register(&mut self, kind: EffectKind, evaluator: Box<dyn AbilityEvaluator>) {
        self.evaluators.insert(kind, evaluator);
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn with(mut self, kind: EffectKind, evaluator: Box<dyn AbilityEvaluator>) -> Self {
        self.register(kind, evaluator);
        self
    }

    #[must_use]
    pub fn get(&self, kind: EffectKind) -> Option<&dyn AbilityEvaluator> {
        self.evaluators.get(&kind).map(|e| e.as_ref())
    }

    /// Should the agent activate `ability` now.
    pub fn can_play(&self, ctx: &mut AiContext<'_>, ability: &mut Ability) -> bool {
        let kind = ability.effect.kind();
        match self.get(kind) {
            Some(evaluator) => evaluator.can_play(ctx, ability),
            None => {
                debug!(ability = %ability.id, ?kind, "no evaluator, not playing");
                false
            }
        }
    }

    /// A cost-free trigger of `ability` fired: choose targets or decline.
    pub fn do_trigger(&self, ctx: &mut AiContext<'_>, ability: &mut Ability, mandatory: bool) -> bool {
        let kind = ability.effect.kind();
        match self.get(kind) {
            Some(evaluator) => evaluator.do_trigger_no_cost(ctx, ability, mandatory),
            None => {
                debug!(ability = %ability.id, ?kind, "no evaluator, declining trigger");
                false
            }
        }
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::empty()
            .with(EffectKind::LifeExchange, Box::new(LifeExchangeAi))
            .with(EffectKind::Mana, Box::new(ManaEffectAi))
    }
}
