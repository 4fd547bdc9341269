//! Errors raised while loading ability definitions and AI profiles.
//!
//! Evaluation itself never fails: an unmet precondition is a `false`
//! decision. Only malformed input at load time surfaces as an `Error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown dynamic amount: {0}")]
    UnknownAmount(String),

    #[error("invalid mana cost: {0}")]
    InvalidManaCost(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown card type: {0}")]
    UnknownCardType(String),

    #[error("danger threshold range is inverted: min {min} > max {max}")]
    InvalidDangerRange { min: i32, max: i32 },

    #[error("AI profile could not be parsed: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
