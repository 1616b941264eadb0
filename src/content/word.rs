//! Word puzzle bank and selection.
//!
//! Each entry carries a canonical uppercase answer, a human-readable hint,
//! and a precomputed scrambled display form (a fixed permutation of the
//! answer's letters - not re-shuffled per play). A play draws a random
//! subset of the bank.

use serde::{Deserialize, Serialize};

use crate::core::ChallengeRng;

/// (answer, hint, scrambled display form).
pub const BANK: [(&str, &str, &str); 8] = [
    ("BLOCKCHAIN", "Distributed ledger technology", "KCALBNIOHC"),
    ("ETHEREUM", "Smart contract platform", "MEHTRUEE"),
    ("DEFI", "Decentralized Finance (abbreviation)", "IEFD"),
    ("WALLET", "Stores your crypto assets", "TELLAW"),
    ("TOKEN", "Digital asset on blockchain", "NETOK"),
    ("MINING", "Process of validating transactions", "NINGIM"),
    ("STAKING", "Locking tokens to earn rewards", "KNITGAS"),
    ("BRIDGE", "Connects different blockchains", "GERBDI"),
];

/// One unscramble puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPuzzle {
    /// Canonical uppercase answer.
    pub answer: String,
    pub hint: String,
    /// Fixed scrambled permutation of the answer.
    pub scrambled: String,
}

/// Draw `count` distinct puzzles from the bank.
#[must_use]
pub fn draw(count: usize, rng: &mut ChallengeRng) -> Vec<WordPuzzle> {
    let mut indices: Vec<usize> = (0..BANK.len()).collect();
    rng.shuffle(&mut indices);
    indices
        .into_iter()
        .take(count)
        .map(|i| {
            let (answer, hint, scrambled) = BANK[i];
            WordPuzzle {
                answer: answer.to_string(),
                hint: hint.to_string(),
                scrambled: scrambled.to_string(),
            }
        })
        .collect()
}
