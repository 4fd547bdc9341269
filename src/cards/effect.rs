//! What an ability does, resolved when the ability is defined.
//!
//! Each effect kind carries its own parameters, so evaluators match on a
//! closed enum instead of comparing card names on every decision.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::amount::AmountExpr;
use super::card::{Card, CardType};
use super::color::ColorSet;
use crate::core::{Error, Result};

/// Effect kinds, used to pick an evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    LifeExchange,
    Mana,
    Other,
}

/// The effect of an ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Exchange a life total with a power or toughness. `None` when the
    /// card is not one the AI knows how to play.
    LifeExchange(Option<LifeExchangeVariant>),
    /// Add mana.
    Mana(ManaProduction),
    /// Any other effect, judged outside this crate.
    Other(String),
}

impl Effect {
    /// Life exchange effect for the named source card.
    #[must_use]
    pub fn life_exchange_for(card_name: &str) -> Self {
        Effect::LifeExchange(LifeExchangeVariant::for_card_name(card_name))
    }

    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::LifeExchange(_) => EffectKind::LifeExchange,
            Effect::Mana(_) => EffectKind::Mana,
            Effect::Other(_) => EffectKind::Other,
        }
    }
}

/// Known life exchange cards and the board hazards each one cares about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeExchangeVariant {
    /// Swap the agent's life with the source's toughness.
    GainToToughness {
        /// Permanents that make life gain hurt, whoever controls them.
        punishers: Vec<String>,
        /// Permanents that turn an opponent's life gain into life loss.
        redirectors: Vec<String>,
    },
    /// Swap a target opponent's life with the source's toughness.
    DrainToToughness { redirectors: Vec<String> },
    /// Swap the agent's life with the source's power.
    PowerForLife,
}

impl LifeExchangeVariant {
    /// ```
    /// use ccg_ability_ai::cards::LifeExchangeVariant;
    ///
    /// assert_eq!(
    ///     LifeExchangeVariant::for_card_name("Evra, Halcyon Witness"),
    ///     Some(LifeExchangeVariant::PowerForLife),
    /// );
    /// assert_eq!(LifeExchangeVariant::for_card_name("Grizzly Bears"), None);
    /// ```
    #[must_use]
    pub fn for_card_name(name: &str) -> Option<Self> {
        match name {
            "Tree of Redemption" => Some(LifeExchangeVariant::GainToToughness {
                punishers: vec!["Rain of Gore".into(), "Sulfuric Vortex".into()],
                redirectors: vec!["Tainted Remedy".into()],
            }),
            "Tree of Perdition" => Some(LifeExchangeVariant::DrainToToughness {
                redirectors: vec!["Tainted Remedy".into()],
            }),
            "Evra, Halcyon Witness" => Some(LifeExchangeVariant::PowerForLife),
            _ => None,
        }
    }
}

/// Mana produced by a mana ability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaProduction {
    pub amount: AmountExpr,
    /// Colors of the produced mana. Empty for colorless.
    pub produced: ColorSet,
    /// Which spells the mana may be spent on.
    pub restrict: CardFilter,
}

impl ManaProduction {
    pub fn new(amount: AmountExpr, produced: ColorSet) -> Self {
        Self {
            amount,
            produced,
            restrict: CardFilter::any(),
        }
    }

    #[must_use]
    pub fn restricted_to(mut self, restrict: CardFilter) -> Self {
        self.restrict = restrict;
        self
    }
}

/// A card restriction: any card, or cards of at least one listed type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    types: SmallVec<[CardType; 2]>,
}

impl CardFilter {
    /// Matches every card.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn of_types(types: impl IntoIterator<Item = CardType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| card.has_type(*t))
    }
}

impl FromStr for CardFilter {
    type Err = Error;

    /// ```
    /// use ccg_ability_ai::cards::{CardFilter, CardType};
    ///
    /// assert_eq!("Card".parse::<CardFilter>().unwrap(), CardFilter::any());
    /// assert_eq!(
    ///     "Card.Creature,Sorcery".parse::<CardFilter>().unwrap(),
    ///     CardFilter::of_types([CardType::Creature, CardType::Sorcery]),
    /// );
    /// ```
    fn from_str(text: &str) -> Result<Self> {
        let mut types = SmallVec::new();
        for entry in text.split(',').map(str::trim) {
            let entry = entry.strip_prefix("Card.").unwrap_or(entry);
            if entry == "Card" {
                return Ok(CardFilter::any());
            }
            types.push(entry.parse::<CardType>()?);
        }
        Ok(CardFilter { types })
    }
}

/// Named alternate heuristic attached to an ability definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiLogic {
    /// Spend mana now only if extra mana unlocks a spell this turn.
    ManaRitual,
    Other(String),
}

impl From<&str> for AiLogic {
    fn from(name: &str) -> Self {
        match name {
            "ManaRitual" => AiLogic::ManaRitual,
            other => AiLogic::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::PlayerId;

    #[test]
    fn test_known_life_exchange_cards() {
        match LifeExchangeVariant::for_card_name("Tree of Redemption") {
            Some(LifeExchangeVariant::GainToToughness { punishers, redirectors }) => {
                assert_eq!(punishers, vec!["Rain of Gore", "Sulfuric Vortex"]);
                assert_eq!(redirectors, vec!["Tainted Remedy"]);
            }
            other => panic!("unexpected variant {:?}", other),
        }
        assert!(matches!(
            LifeExchangeVariant::for_card_name("Tree of Perdition"),
            Some(LifeExchangeVariant::DrainToToughness { .. })
        ));
    }

    #[test]
    fn test_unknown_card_has_no_variant() {
        assert_eq!(Effect::life_exchange_for("Soul Conduit"), Effect::LifeExchange(None));
        assert_eq!(Effect::life_exchange_for("Soul Conduit").kind(), EffectKind::LifeExchange);
    }

    #[test]
    fn test_card_filter_matches() {
        let owner = PlayerId::new(0);
        let bear = Card::new(CardId::new(1), "Bear", owner).creature(2, 2);
        let bolt = Card::new(CardId::new(2), "Bolt", owner).with_type(CardType::Instant);

        assert!(CardFilter::any().matches(&bolt));
        let creatures: CardFilter = "Creature".parse().unwrap();
        assert!(creatures.matches(&bear));
        assert!(!creatures.matches(&bolt));
    }

    #[test]
    fn test_card_filter_rejects_unknown_type() {
        assert!(matches!("Card.Wizard".parse::<CardFilter>(), Err(Error::UnknownCardType(_))));
    }

    #[test]
    fn test_ai_logic_from_name() {
        assert_eq!(AiLogic::from("ManaRitual"), AiLogic::ManaRitual);
        assert_eq!(AiLogic::from("AtOppEOT"), AiLogic::Other("AtOppEOT".into()));
    }
}
