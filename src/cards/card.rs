//! Card objects as the evaluators see them.
//!
//! A `Card` is a read-only view of one game object: where it is, who controls
//! it, its printed cost and its current power and toughness. The rules engine
//! owns the real object; the evaluators only read these fields.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::color::ColorSet;
use super::cost::ManaCost;
use crate::core::{Error, PlayerId, Result};
use crate::game::Zone;

/// Identifier of one game object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Land,
    Creature,
    Artifact,
    Enchantment,
    Planeswalker,
    Battle,
    Instant,
    Sorcery,
}

impl CardType {
    /// Types whose cards stay on the battlefield after resolving.
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        !matches!(self, CardType::Instant | CardType::Sorcery)
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(match text.trim().to_ascii_lowercase().as_str() {
            "land" => CardType::Land,
            "creature" => CardType::Creature,
            "artifact" => CardType::Artifact,
            "enchantment" => CardType::Enchantment,
            "planeswalker" => CardType::Planeswalker,
            "battle" => CardType::Battle,
            "instant" => CardType::Instant,
            "sorcery" => CardType::Sorcery,
            _ => return Err(Error::UnknownCardType(text.to_string())),
        })
    }
}

/// Keywords the evaluators ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Haste,
}

/// A game object.
///
/// ```
/// use ccg_ability_ai::cards::{Card, CardId, CardType};
/// use ccg_ability_ai::core::PlayerId;
/// use ccg_ability_ai::game::Zone;
///
/// let tree = Card::new(CardId::new(1), "Tree of Redemption", PlayerId::new(0))
///     .creature(0, 13)
///     .in_zone(Zone::Battlefield);
///
/// assert!(tree.is_permanent());
/// assert_eq!(tree.toughness, 13);
/// assert!(tree.has_type(CardType::Creature));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub owner: PlayerId,
    pub controller: PlayerId,
    pub zone: Zone,
    pub types: SmallVec<[CardType; 2]>,
    pub colors: ColorSet,
    pub mana_cost: ManaCost,
    /// Current power, after modifiers.
    pub power: i32,
    /// Current toughness, after modifiers.
    pub toughness: i32,
    pub keywords: SmallVec<[Keyword; 4]>,
}

impl Card {
    /// A typeless, colorless card in its owner's hand.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            controller: owner,
            zone: Zone::Hand,
            types: SmallVec::new(),
            colors: ColorSet::COLORLESS,
            mana_cost: ManaCost::zero(),
            power: 0,
            toughness: 0,
            keywords: SmallVec::new(),
        }
    }

    /// Make this a creature with the given power and toughness.
    #[must_use]
    pub fn creature(mut self, power: i32, toughness: i32) -> Self {
        if !self.has_type(CardType::Creature) {
            self.types.push(CardType::Creature);
        }
        self.power = power;
        self.toughness = toughness;
        self
    }

    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        if !self.has_type(card_type) {
            self.types.push(card_type);
        }
        self
    }

    #[must_use]
    pub fn in_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    #[must_use]
    pub fn controlled_by(mut self, controller: PlayerId) -> Self {
        self.controller = controller;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorSet) -> Self {
        self.colors = colors;
        self
    }

    /// Set the printed cost. Colors follow the cost's pips.
    #[must_use]
    pub fn with_mana_cost(mut self, cost: ManaCost) -> Self {
        self.colors = cost.colors();
        self.mana_cost = cost;
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        if !self.has_keyword(keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    #[must_use]
    pub fn has_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.types.iter().any(|t| t.is_permanent())
    }

    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.has_type(CardType::Instant)
    }

    #[must_use]
    pub fn is_in_zone(&self, zone: Zone) -> bool {
        self.zone == zone
    }

    /// Mana value of the printed cost.
    #[must_use]
    pub fn mana_value(&self) -> u32 {
        self.mana_cost.mana_value()
    }
}
