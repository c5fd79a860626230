use super::{Candidate, Symbology};

/// Final result of one detection call: the plurality winner plus a score.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Decoded text of the winning candidate
    pub value: String,
    /// Symbology of the winning candidate
    pub symbology: Symbology,
    /// Votes for the winner divided by variants attempted (0.0 - 1.0)
    pub confidence: f64,
}

impl Detection {
    /// Build a detection from the winning candidate and the vote math
    pub fn new(candidate: &Candidate, votes: u32, variants_attempted: usize) -> Self {
        Self {
            value: candidate.value.clone(),
            symbology: candidate.symbology,
            confidence: f64::from(votes) / variants_attempted as f64,
        }
    }
}
