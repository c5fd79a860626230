use super::Candidate;

/// Insertion-ordered vote counts over detected candidates.
///
/// Each preprocessing variant contributes at most one vote per distinct
/// (value, symbology) pair, so every count stays bounded by the number of
/// variants recorded. Iteration order is insertion order, which is what
/// breaks ties in [`VoteTally::winner`]: the pair first produced by the
/// highest-priority variant wins.
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    entries: Vec<(Candidate, u32)>,
}

impl VoteTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the output of one variant's decode pass.
    ///
    /// Duplicate pairs within `candidates` collapse to a single vote;
    /// pairs seen in earlier passes keep their insertion position and
    /// gain one count.
    pub fn record_variant<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut voted: Vec<usize> = Vec::new();
        for candidate in candidates {
            let idx = match self.entries.iter().position(|(c, _)| *c == candidate) {
                Some(idx) => idx,
                None => {
                    self.entries.push((candidate, 0));
                    self.entries.len() - 1
                }
            };
            if !voted.contains(&idx) {
                self.entries[idx].1 += 1;
                voted.push(idx);
            }
        }
    }

    /// Candidate with the highest count, ties broken by insertion order
    pub fn winner(&self) -> Option<(&Candidate, u32)> {
        let mut best: Option<(&Candidate, u32)> = None;
        for (candidate, count) in &self.entries {
            let beats_current = match best {
                Some((_, best_count)) => *count > best_count,
                None => true,
            };
            if beats_current {
                best = Some((candidate, *count));
            }
        }
        best
    }

    /// Vote count for a specific pair (0 when never seen)
    pub fn count(&self, candidate: &Candidate) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| c == candidate)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Iterate pairs and counts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Candidate, u32)> {
        self.entries.iter().map(|(c, count)| (c, *count))
    }

    /// Number of distinct pairs recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no variant produced any candidate
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
