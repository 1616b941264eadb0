//! Quiz question banks.
//!
//! One fixed, ordered bank per difficulty tier. Quiz content is
//! deterministic per difficulty: the same questions in the same order on
//! every play.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
}

type BankEntry = (&'static str, [&'static str; 4], usize);

const EASY: &[BankEntry] = &[
    (
        "What does DeFi stand for?",
        ["Digital Finance", "Decentralized Finance", "Direct Finance", "Distributed Finance"],
        1,
    ),
    (
        "What blockchain is this dApp built on?",
        ["Ethereum", "Polygon", "Base", "Arbitrum"],
        2,
    ),
    (
        "What is a wallet used for in crypto?",
        ["Storing paper money", "Storing crypto assets", "Playing games", "Sending emails"],
        1,
    ),
];

const MEDIUM: &[BankEntry] = &[
    (
        "What is Base?",
        [
            "A programming language",
            "An Ethereum Layer 2 solution",
            "A cryptocurrency",
            "A wallet provider",
        ],
        1,
    ),
    (
        "What does \"gas fee\" refer to in blockchain?",
        ["Car fuel cost", "Transaction processing fee", "Heating bill", "Network subscription"],
        1,
    ),
    (
        "What is an ERC-20 token?",
        ["A Bitcoin standard", "Ethereum token standard", "A mining algorithm", "A wallet type"],
        1,
    ),
    (
        "What is a smart contract?",
        [
            "A legal document",
            "Self-executing code on blockchain",
            "A business agreement",
            "A crypto wallet",
        ],
        1,
    ),
];

const HARD: &[BankEntry] = &[
    (
        "What consensus mechanism does Ethereum use after The Merge?",
        ["Proof of Work", "Proof of Stake", "Proof of Authority", "Delegated Proof of Stake"],
        1,
    ),
    (
        "What is an L2 scaling solution?",
        [
            "A second blockchain",
            "A layer built on top of L1 for scalability",
            "A type of token",
            "A wallet feature",
        ],
        1,
    ),
    (
        "What does TVL stand for in DeFi?",
        [
            "Total Value Locked",
            "Transaction Value Limit",
            "Token Verification Level",
            "Trading Volume Limit",
        ],
        0,
    ),
    (
        "What is a zk-rollup?",
        [
            "A token type",
            "A scaling solution using zero-knowledge proofs",
            "A wallet feature",
            "A mining method",
        ],
        1,
    ),
    (
        "What is the purpose of Base being built by Coinbase?",
        [
            "To compete with Bitcoin",
            "To provide a secure, low-cost L2 for developers",
            "To replace Ethereum",
            "To create a new cryptocurrency",
        ],
        1,
    ),
];

/// The fixed bank for a difficulty tier.
#[must_use]
pub fn bank(difficulty: Difficulty) -> &'static [BankEntry] {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
    }
}

/// Materialize the first `count` questions of a tier.
#[must_use]
pub fn questions(difficulty: Difficulty, count: usize) -> Vec<QuizQuestion> {
    bank(difficulty)
        .iter()
        .take(count)
        .map(|(prompt, options, correct)| QuizQuestion {
            prompt: (*prompt).to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct: *correct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_sizes() {
        assert_eq!(bank(Difficulty::Easy).len(), 3);
        assert_eq!(bank(Difficulty::Medium).len(), 4);
        assert_eq!(bank(Difficulty::Hard).len(), 5);
    }

    #[test]
    fn test_correct_indices_in_range() {
        for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for (prompt, options, correct) in bank(tier) {
                assert!(*correct < options.len(), "bad answer index for {prompt:?}");
            }
        }
    }

    #[test]
    fn test_questions_deterministic() {
        let a = questions(Difficulty::Easy, 3);
        let b = questions(Difficulty::Easy, 3);
        assert_eq!(a, b);
        assert_eq!(a[0].options.len(), 4);
    }

    #[test]
    fn test_questions_truncates() {
        assert_eq!(questions(Difficulty::Hard, 2).len(), 2);
    }
}
