//! Abilities: one activatable or triggered effect bound to a source card.

use serde::{Deserialize, Serialize};

use super::card::CardId;
use super::cost::AbilityCost;
use super::effect::{AiLogic, Effect};
use super::targeting::{Target, TargetChoices, TargetSpec};
use crate::core::PlayerId;

/// Identifier of an ability instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbilityId(pub u32);

impl AbilityId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// An ability of a card.
///
/// The rules engine owns abilities. An evaluator only ever writes to the
/// target list of the ability it was handed.
///
/// ```
/// use ccg_ability_ai::cards::{Ability, AbilityCost, AbilityId, CardId, Effect, TargetSpec};
///
/// let drain = Ability::new(AbilityId::new(1), CardId::new(7), Effect::life_exchange_for("Tree of Perdition"))
///     .with_cost(AbilityCost::tap())
///     .with_target(TargetSpec::single_opponent());
///
/// assert!(drain.is_targeted());
/// assert!(drain.targets().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    /// The card this ability belongs to.
    pub host: CardId,
    pub effect: Effect,
    pub cost: AbilityCost,
    /// Target restriction, `None` for untargeted abilities.
    pub target: Option<TargetSpec>,
    pub logic: Option<AiLogic>,
    /// Follow-up ability resolved as part of this one.
    pub sub_ability: Option<Box<Ability>>,
    /// Player activating the ability, once known.
    pub activator: Option<PlayerId>,
    targets: TargetChoices,
}

impl Ability {
    /// An untargeted ability with no cost.
    #[must_use]
    pub fn new(id: AbilityId, host: CardId, effect: Effect) -> Self {
        Self {
            id,
            host,
            effect,
            cost: AbilityCost::default(),
            target: None,
            logic: None,
            sub_ability: None,
            activator: None,
            targets: TargetChoices::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: AbilityCost) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_target(mut self, spec: TargetSpec) -> Self {
        self.target = Some(spec);
        self
    }

    #[must_use]
    pub fn with_logic(mut self, logic: impl Into<AiLogic>) -> Self {
        self.logic = Some(logic.into());
        self
    }

    #[must_use]
    pub fn with_sub_ability(mut self, sub: Ability) -> Self {
        self.sub_ability = Some(Box::new(sub));
        self
    }

    #[must_use]
    pub fn with_activator(mut self, player: PlayerId) -> Self {
        self.activator = Some(player);
        self
    }

    #[must_use]
    pub fn is_targeted(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn targets(&self) -> &TargetChoices {
        &self.targets
    }

    /// Clear the chosen targets before a new selection pass.
    pub fn reset_targets(&mut self) {
        self.targets.clear();
    }

    /// Record a target. Callers check legality against the game first.
    pub fn add_target(&mut self, target: Target) -> bool {
        self.targets.add(target)
    }

    /// A what-if copy of this ability with its mana cost removed.
    ///
    /// Chosen targets are not carried over.
    #[must_use]
    pub fn copy_with_no_mana_cost(&self) -> Self {
        let mut copy = self.clone();
        copy.cost.mana = None;
        copy.targets.clear();
        copy
    }
}
