//! Memory board generation.
//!
//! A board is `2 * pairs` cells: the first `pairs` symbols duplicated and
//! dealt in a random permutation.

use serde::{Deserialize, Serialize};

use crate::core::ChallengeRng;

/// The crypto symbol bank, one symbol per pair.
pub const SYMBOLS: [char; 8] = ['Ξ', '₿', '◊', '⟠', '⬡', '◈', '⬢', '⬣'];

/// A dealt memory board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBoard {
    cells: Vec<char>,
}

impl MemoryBoard {
    /// Deal a board with the given pair count.
    #[must_use]
    pub fn deal(pairs: usize, rng: &mut ChallengeRng) -> Self {
        let symbols = &SYMBOLS[..pairs.min(SYMBOLS.len())];
        let mut cells: Vec<char> = symbols.iter().chain(symbols.iter()).copied().collect();
        rng.shuffle(&mut cells);
        Self { cells }
    }

    /// Total cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Pair count.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cells.len() / 2
    }

    /// Symbol at a cell.
    #[must_use]
    pub fn symbol_at(&self, cell: usize) -> Option<char> {
        self.cells.get(cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_full_board() {
        let mut rng = ChallengeRng::new(42);
        let board = MemoryBoard::deal(8, &mut rng);

        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.pairs(), 8);

        // Every symbol appears exactly twice
        for symbol in SYMBOLS {
            let count = (0..board.cell_count())
                .filter(|&c| board.symbol_at(c) == Some(symbol))
                .count();
            assert_eq!(count, 2, "symbol {symbol} should appear twice");
        }
    }

    #[test]
    fn test_deal_deterministic() {
        let mut rng1 = ChallengeRng::new(7);
        let mut rng2 = ChallengeRng::new(7);
        assert_eq!(MemoryBoard::deal(8, &mut rng1), MemoryBoard::deal(8, &mut rng2));
    }

    #[test]
    fn test_deal_small_board() {
        let mut rng = ChallengeRng::new(1);
        let board = MemoryBoard::deal(2, &mut rng);
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.pairs(), 2);
    }

    #[test]
    fn test_symbol_at_out_of_range() {
        let mut rng = ChallengeRng::new(1);
        let board = MemoryBoard::deal(2, &mut rng);
        assert_eq!(board.symbol_at(99), None);
    }
}
