//! Core data structures (candidates, vote tally, detection results).

pub mod candidate;
pub mod detection;
pub mod tally;

pub use candidate::{Candidate, LocatedCandidate, Rect, Symbology};
pub use detection::Detection;
pub use tally::VoteTally;
