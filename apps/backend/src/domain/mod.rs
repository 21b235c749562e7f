//! Domain layer: pure game-engine types and logic.
//!
//! Nothing in here performs I/O, takes a lock, or reads the clock; randomness
//! and timestamps are injected by the service layer so every operation stays
//! deterministic under test.

pub mod claims;
pub mod insights;
pub mod phrases;
pub mod roster;
pub mod scorecard;
pub mod sequencer;
pub mod session;
pub mod snapshot;

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use claims::{ClaimType, ClaimVerdict};
pub use phrases::PhrasePool;
pub use scorecard::{Scorecard, FREE_SPACE};
pub use session::{GameSession, GameStatus};
