//! Five-color sets. The empty set is colorless.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

bitflags! {
    /// A set of colors, used both for card colors and produced mana.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ColorSet: u8 {
        const WHITE = 1 << 0;
        const BLUE = 1 << 1;
        const BLACK = 1 << 2;
        const RED = 1 << 3;
        const GREEN = 1 << 4;
    }
}

impl ColorSet {
    /// Colorless (no colors).
    pub const COLORLESS: ColorSet = ColorSet::empty();

    /// Parse a whitespace-separated list of color names or symbols.
    ///
    /// Accepts `W U B R G C` and the full names. `C`/`Colorless` adds nothing,
    /// `Any` is all five colors.
    ///
    /// ```
    /// use ccg_ability_ai::cards::ColorSet;
    ///
    /// assert_eq!(ColorSet::parse_names("B").unwrap(), ColorSet::BLACK);
    /// assert_eq!(ColorSet::parse_names("red green").unwrap(), ColorSet::RED | ColorSet::GREEN);
    /// assert!(ColorSet::parse_names("C").unwrap().is_colorless());
    /// ```
    pub fn parse_names(text: &str) -> Result<Self> {
        let mut colors = ColorSet::empty();
        for token in text.split_whitespace() {
            colors |= match token.to_ascii_lowercase().as_str() {
                "w" | "white" => ColorSet::WHITE,
                "u" | "blue" => ColorSet::BLUE,
                "b" | "black" => ColorSet::BLACK,
                "r" | "red" => ColorSet::RED,
                "g" | "green" => ColorSet::GREEN,
                "c" | "colorless" => ColorSet::empty(),
                "any" => ColorSet::all(),
                _ => return Err(Error::UnknownColor(token.to_string())),
            };
        }
        Ok(colors)
    }

    #[must_use]
    pub fn is_colorless(self) -> bool {
        self.is_empty()
    }
}
