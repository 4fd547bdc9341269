//! Dynamic amounts in ability definitions.
//!
//! Amounts such as "add one mana for each card in your hand" are parsed once
//! when the ability is defined, then evaluated against the current game.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Error, PlayerId, Result};
use crate::game::{GameView, Zone};

const CARDS_IN_HAND: &str = "Count$CardsInYourHand";
const NAMED_IN_ALL_GRAVEYARDS: &str = "Count$NamedInAllYards";

/// An amount fixed in the text or counted from the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountExpr {
    Fixed(i64),
    /// Cards in the controller's hand.
    CardsInHand,
    /// Cards with this name across every graveyard.
    NamedInAllGraveyards(String),
}

impl AmountExpr {
    /// Current value for an ability controlled by `controller`.
    pub fn evaluate(&self, game: &dyn GameView, controller: PlayerId) -> i64 {
        match self {
            AmountExpr::Fixed(n) => *n,
            AmountExpr::CardsInHand => game.cards_in_zone(controller, Zone::Hand) as i64,
            AmountExpr::NamedInAllGraveyards(name) => {
                game.count_named_in_all_graveyards(name) as i64
            }
        }
    }

    /// The zone this amount counts cards in, if any.
    ///
    /// A card that is itself in that zone is counted while it is being
    /// activated, even though activating moves it away.
    #[must_use]
    pub fn counts_zone(&self) -> Option<Zone> {
        match self {
            AmountExpr::Fixed(_) => None,
            AmountExpr::CardsInHand => Some(Zone::Hand),
            AmountExpr::NamedInAllGraveyards(_) => Some(Zone::Graveyard),
        }
    }
}

impl Default for AmountExpr {
    fn default() -> Self {
        AmountExpr::Fixed(1)
    }
}

impl FromStr for AmountExpr {
    type Err = Error;

    /// ```
    /// use ccg_ability_ai::cards::AmountExpr;
    ///
    /// assert_eq!("3".parse::<AmountExpr>().unwrap(), AmountExpr::Fixed(3));
    /// assert_eq!(
    ///     "Count$NamedInAllYards Cabal Ritual".parse::<AmountExpr>().unwrap(),
    ///     AmountExpr::NamedInAllGraveyards("Cabal Ritual".into()),
    /// );
    /// ```
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Ok(AmountExpr::Fixed(n));
        }
        if text == CARDS_IN_HAND {
            return Ok(AmountExpr::CardsInHand);
        }
        if let Some(rest) = text.strip_prefix(NAMED_IN_ALL_GRAVEYARDS) {
            let name = rest.trim_start_matches(['.', ' ']).trim();
            if !name.is_empty() {
                return Ok(AmountExpr::NamedInAllGraveyards(name.to_string()));
            }
        }
        Err(Error::UnknownAmount(text.to_string()))
    }
}
