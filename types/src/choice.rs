use std::{fmt::Display, str::FromStr};

use crate::error::GameError;

/// One of the three hand shapes. Declaration order is the enumeration order
/// used for tie-breaks: Rock, then Paper, then Scissors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn all_moves() -> Vec<Move> {
        Self::ALL.to_vec()
    }

    /// The move this one defeats.
    pub fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn beaten_by(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Move {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Move::ALL
            .get(index)
            .copied()
            .ok_or_else(|| GameError::InvalidMove(index.to_string()))
    }
}
