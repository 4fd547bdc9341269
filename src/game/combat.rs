//! Combat state: who attacks whom, and who blocks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PlayerId;

/// One attacking creature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub attacker: CardId,
    pub defender: PlayerId,
    pub blockers: SmallVec<[CardId; 2]>,
}

/// Attacks declared this combat.
///
/// ```
/// use ccg_ability_ai::cards::CardId;
/// use ccg_ability_ai::core::PlayerId;
/// use ccg_ability_ai::game::Combat;
///
/// let combat = Combat::new()
///     .attack(CardId::new(1), PlayerId::new(1))
///     .attack(CardId::new(2), PlayerId::new(1))
///     .block(CardId::new(2), CardId::new(9));
///
/// assert!(combat.is_unblocked(CardId::new(1)));
/// assert!(!combat.is_unblocked(CardId::new(2)));
/// assert_eq!(combat.defender_of(CardId::new(2)), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    pub attacks: Vec<Attack>,
}

impl Combat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an attacker (builder pattern).
    #[must_use]
    pub fn attack(mut self, attacker: CardId, defender: PlayerId) -> Self {
        self.attacks.push(Attack {
            attacker,
            defender,
            blockers: SmallVec::new(),
        });
        self
    }

    /// Declare a blocker for an existing attacker. Unknown attackers are ignored.
    #[must_use]
    pub fn block(mut self, attacker: CardId, blocker: CardId) -> Self {
        if let Some(attack) = self.attacks.iter_mut().find(|a| a.attacker == attacker) {
            attack.blockers.push(blocker);
        }
        self
    }

    fn find(&self, attacker: CardId) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.attacker == attacker)
    }

    #[must_use]
    pub fn is_attacking(&self, card: CardId) -> bool {
        self.find(card).is_some()
    }

    /// Attacking with no blockers.
    #[must_use]
    pub fn is_unblocked(&self, attacker: CardId) -> bool {
        self.find(attacker).is_some_and(|a| a.blockers.is_empty())
    }

    #[must_use]
    pub fn defender_of(&self, attacker: CardId) -> Option<PlayerId> {
        self.find(attacker).map(|a| a.defender)
    }
}
