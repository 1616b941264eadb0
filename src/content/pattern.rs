//! Pattern sequence generation.
//!
//! Each round's target is an ordered sequence of unique cell indices
//! chosen uniformly at random from the grid. Length grows with the round
//! index up to the configured cap. Evaluation elsewhere is positional:
//! the same set in a different order is incorrect.

use crate::core::{ChallengeRng, PatternRules};

/// Generate all round targets up front.
///
/// Sequences contain no repeated cells within a round.
#[must_use]
pub fn round_targets(
    rules: &PatternRules,
    total_rounds: usize,
    rng: &mut ChallengeRng,
) -> Vec<Vec<usize>> {
    (0..total_rounds)
        .map(|round| {
            let length = rules.sequence_length(round);
            let mut cells: Vec<usize> = (0..rules.cell_count()).collect();
            rng.shuffle(&mut cells);
            cells.truncate(length);
            cells
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_grow_and_cap() {
        let mut rng = ChallengeRng::new(42);
        let targets = round_targets(&PatternRules::default(), 5, &mut rng);

        let lengths: Vec<_> = targets.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_cells_unique_within_round() {
        let mut rng = ChallengeRng::new(42);
        let targets = round_targets(&PatternRules::default(), 5, &mut rng);

        for target in &targets {
            let mut sorted = target.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), target.len(), "duplicate cell in {target:?}");
        }
    }

    #[test]
    fn test_cells_in_grid() {
        let rules = PatternRules::default();
        let mut rng = ChallengeRng::new(9);
        for target in round_targets(&rules, 5, &mut rng) {
            assert!(target.iter().all(|&c| c < rules.cell_count()));
        }
    }

    #[test]
    fn test_deterministic() {
        let rules = PatternRules::default();
        let mut rng1 = ChallengeRng::new(5);
        let mut rng2 = ChallengeRng::new(5);
        assert_eq!(
            round_targets(&rules, 5, &mut rng1),
            round_targets(&rules, 5, &mut rng2)
        );
    }
}
