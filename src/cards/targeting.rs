//! Target restrictions and chosen targets.
//!
//! - `TargetSpec`: what an ability may target
//! - `TargetFilter`: player filters relative to the acting player
//! - `TargetChoices`: the targets an evaluator has committed to

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;
use crate::core::PlayerId;
use crate::game::GameView;

/// Something an ability can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Player(PlayerId),
    Card(CardId),
}

/// Filters on targeted players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFilter {
    /// Target must be an opponent of the acting player.
    Opponent,
}

/// Target restriction attached to an ability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub filters: Vec<TargetFilter>,
    /// Most targets that may be chosen.
    pub max_targets: usize,
}

impl TargetSpec {
    /// Any single player.
    pub fn single_player() -> Self {
        Self {
            filters: Vec::new(),
            max_targets: 1,
        }
    }

    /// A single opponent of the acting player.
    pub fn single_opponent() -> Self {
        Self::single_player().with_filter(TargetFilter::Opponent)
    }

    /// Add a filter (builder pattern).
    pub fn with_filter(mut self, filter: TargetFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Whether `candidate` passes every filter when `actor` is choosing.
    pub fn allows_player(&self, game: &dyn GameView, actor: PlayerId, candidate: PlayerId) -> bool {
        self.filters.iter().all(|filter| match filter {
            TargetFilter::Opponent => game.is_opponent_of(actor, candidate),
        })
    }
}

/// Targets chosen for one ability.
///
/// Evaluators clear this before a selection pass and only add targets that
/// the game reported as legal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetChoices {
    chosen: SmallVec<[Target; 2]>,
}

impl TargetChoices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every chosen target.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Add a target. Returns false if it was already chosen.
    pub fn add(&mut self, target: Target) -> bool {
        if self.chosen.contains(&target) {
            return false;
        }
        self.chosen.push(target);
        true
    }

    #[must_use]
    pub fn contains(&self, target: Target) -> bool {
        self.chosen.contains(&target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Chosen players, in the order they were added.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.chosen.iter().filter_map(|t| match t {
            Target::Player(p) => Some(*p),
            Target::Card(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_spec_builders() {
        let spec = TargetSpec::single_opponent();
        assert_eq!(spec.max_targets, 1);
        assert_eq!(spec.filters, vec![TargetFilter::Opponent]);
        assert!(TargetSpec::single_player().filters.is_empty());
    }

    #[test]
    fn test_choices_add_and_clear() {
        let mut choices = TargetChoices::new();
        assert!(choices.add(Target::Player(PlayerId::new(1))));
        assert!(!choices.add(Target::Player(PlayerId::new(1))));
        assert!(choices.add(Target::Card(CardId::new(9))));

        assert_eq!(choices.len(), 2);
        assert_eq!(choices.players().collect::<Vec<_>>(), vec![PlayerId::new(1)]);
        assert!(choices.contains(Target::Card(CardId::new(9))));

        choices.clear();
        assert!(choices.is_empty());
    }
}
