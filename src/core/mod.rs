//! Core types: players, randomness, AI profile configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{AiConfig, RitualPolicy};
pub use error::{Error, Result};
