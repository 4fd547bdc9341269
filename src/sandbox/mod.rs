//! Self-contained implementations of the game-side traits.
//!
//! `Table` is a plain game snapshot and `ScriptedAdvisor` answers combat and
//! planning questions from a fixed script. Together they let the evaluators
//! run without a rules engine.

pub mod advisor;
pub mod table;

pub use advisor::ScriptedAdvisor;
pub use table::{Seat, Table};
