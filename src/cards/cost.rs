//! Cost descriptors.
//!
//! `ManaCost` reads the shard notation used by ability definitions
//! ("2 B B", "X R", "0"). `AbilityCost` wraps the optional mana part together
//! with whether the rest of the payment is reusable (tapping, as opposed to
//! sacrificing or discarding).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::color::ColorSet;
use crate::core::{Error, Result};

/// A mana cost: generic amount, colored pips and X placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCost {
    pub generic: u32,
    /// One entry per colored pip. Hybrid pips hold more than one color.
    pub pips: SmallVec<[ColorSet; 4]>,
    pub x_count: u32,
}

impl ManaCost {
    /// The empty cost.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Generic-only cost.
    #[must_use]
    pub fn generic(amount: u32) -> Self {
        Self {
            generic: amount,
            ..Self::default()
        }
    }

    /// Converted mana value. X counts as zero.
    #[must_use]
    pub fn mana_value(&self) -> u32 {
        self.generic + self.pips.len() as u32
    }

    #[must_use]
    pub fn count_x(&self) -> u32 {
        self.x_count
    }

    /// True when there is nothing to pay and nothing to choose.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mana_value() == 0 && self.x_count == 0
    }

    /// Union of the pip colors.
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        self.pips.iter().fold(ColorSet::empty(), |acc, pip| acc | *pip)
    }
}

impl FromStr for ManaCost {
    type Err = Error;

    /// ```
    /// use ccg_ability_ai::cards::{ColorSet, ManaCost};
    ///
    /// let cost: ManaCost = "2 B B".parse().unwrap();
    /// assert_eq!(cost.mana_value(), 4);
    /// assert_eq!(cost.colors(), ColorSet::BLACK);
    /// ```
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let mut cost = ManaCost::zero();
        if text.eq_ignore_ascii_case("no cost") {
            return Ok(cost);
        }

        for shard in text.split_whitespace() {
            if let Ok(n) = shard.parse::<u32>() {
                cost.generic += n;
            } else if shard.eq_ignore_ascii_case("x") {
                cost.x_count += 1;
            } else if shard.eq_ignore_ascii_case("c") {
                // Colorless-only mana still adds one to the mana value.
                cost.generic += 1;
            } else {
                let mut pip = ColorSet::empty();
                for half in shard.split('/') {
                    let color = ColorSet::parse_names(half)
                        .map_err(|_| Error::InvalidManaCost(text.to_string()))?;
                    if color.is_empty() {
                        return Err(Error::InvalidManaCost(text.to_string()));
                    }
                    pip |= color;
                }
                cost.pips.push(pip);
            }
        }
        Ok(cost)
    }
}

/// Payment required to activate an ability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCost {
    /// Mana part, `None` when the cost has no mana component.
    pub mana: Option<ManaCost>,

    /// The non-mana part does not use anything up (e.g. tapping).
    pub reusable: bool,
}

impl AbilityCost {
    /// A cost with only a mana part.
    #[must_use]
    pub fn mana(cost: ManaCost) -> Self {
        Self {
            mana: Some(cost),
            reusable: false,
        }
    }

    /// A reusable, mana-free cost ("{T}").
    #[must_use]
    pub fn tap() -> Self {
        Self {
            mana: None,
            reusable: true,
        }
    }

    #[must_use]
    pub fn has_no_mana_cost(&self) -> bool {
        self.mana.as_ref().map_or(true, ManaCost::is_zero)
    }

    #[must_use]
    pub fn is_reusable_resource(&self) -> bool {
        self.reusable
    }

    /// The whole mana requirement, zero when there is none.
    #[must_use]
    pub fn total_mana(&self) -> ManaCost {
        self.mana.clone().unwrap_or_default()
    }

    /// Mana value of the mana part.
    #[must_use]
    pub fn mana_value(&self) -> u32 {
        self.mana.as_ref().map_or(0, ManaCost::mana_value)
    }
}
