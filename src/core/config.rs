//! AI profile configuration.
//!
//! A profile carries the controller-tuned numbers the evaluators read. It is
//! passed to every call through `AiContext` instead of being looked up from
//! a global controller, so a decision depends only on its inputs.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Tunable thresholds for one AI controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Lower bound of the sampled "life in danger" threshold.
    pub danger_threshold: i32,

    /// Upper bound (exclusive) of the sampled threshold. Equal to
    /// `danger_threshold` means no sampling.
    pub danger_max_threshold: i32,

    /// Heuristics for rituals that spend mana to make more mana.
    pub ritual: RitualPolicy,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            danger_threshold: 4,
            danger_max_threshold: 4,
            ritual: RitualPolicy::default(),
        }
    }
}

impl AiConfig {
    /// Parse and validate a JSON profile. Missing keys keep their defaults.
    ///
    /// ```
    /// use ccg_ability_ai::core::AiConfig;
    ///
    /// let config = AiConfig::from_json(r#"{ "danger_max_threshold": 9 }"#).unwrap();
    /// assert_eq!(config.danger_threshold, 4);
    /// assert_eq!(config.danger_max_threshold, 9);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AiConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the danger bounds are ordered.
    pub fn validate(&self) -> Result<()> {
        if self.danger_max_threshold < self.danger_threshold {
            return Err(Error::InvalidDangerRange {
                min: self.danger_threshold,
                max: self.danger_max_threshold,
            });
        }
        Ok(())
    }

    /// Set both danger bounds.
    #[must_use]
    pub fn with_danger_range(mut self, min: i32, max: i32) -> Self {
        self.danger_threshold = min;
        self.danger_max_threshold = max;
        self
    }

    #[must_use]
    pub fn with_ritual_policy(mut self, ritual: RitualPolicy) -> Self {
        self.ritual = ritual;
        self
    }
}

/// Which follow-up spells a ritual may be spent on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RitualPolicy {
    /// Ignore instants as follow-ups. The general evaluator is a poor judge
    /// of which instants deserve a ritual.
    pub skip_instants: bool,

    /// Outside the second main phase, only hasty permanents count as
    /// follow-ups.
    pub hold_non_haste_permanents_until_main2: bool,
}

impl Default for RitualPolicy {
    fn default() -> Self {
        Self {
            skip_instants: true,
            hold_non_haste_permanents_until_main2: true,
        }
    }
}
