use std::{fmt::Display, str::FromStr};

use crate::{choice::Move, error::GameError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// Text written to the `Result` column and the history line.
    pub fn result_text(&self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win!",
            Outcome::ComputerWin => "Computer wins!",
            Outcome::Draw => "Draw!",
        }
    }

    /// The same outcome seen from the other side of the table.
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::PlayerWin => Outcome::ComputerWin,
            Outcome::ComputerWin => Outcome::PlayerWin,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.result_text())
    }
}

impl FromStr for Outcome {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "you win!" => Ok(Outcome::PlayerWin),
            "computer wins!" => Ok(Outcome::ComputerWin),
            "draw!" => Ok(Outcome::Draw),
            _ => Err(GameError::InvalidOutcome(s.to_string())),
        }
    }
}

pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Draw
    } else if player.beats() == computer {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        (0usize..3).prop_map(|idx| Move::ALL[idx])
    }

    #[test]
    fn test_truth_table() {
        use Move::*;
        let winning = [(Rock, Scissors), (Paper, Rock), (Scissors, Paper)];
        for player in Move::ALL {
            for computer in Move::ALL {
                let expected = if player == computer {
                    Outcome::Draw
                } else if winning.contains(&(player, computer)) {
                    Outcome::PlayerWin
                } else {
                    Outcome::ComputerWin
                };
                assert_eq!(resolve(player, computer), expected, "{player} vs {computer}");
            }
        }
    }

    #[test]
    fn test_result_text_parses_back() {
        for outcome in [Outcome::PlayerWin, Outcome::ComputerWin, Outcome::Draw] {
            assert_eq!(outcome.result_text().parse::<Outcome>(), Ok(outcome));
        }
        assert!("Unknown".parse::<Outcome>().is_err());
    }

    proptest! {
        #[test]
        fn same_move_is_always_a_draw(mv in any_move()) {
            prop_assert_eq!(resolve(mv, mv), Outcome::Draw);
        }

        #[test]
        fn swapping_sides_reverses_the_outcome(a in any_move(), b in any_move()) {
            prop_assert_eq!(resolve(a, b), resolve(b, a).reversed());
        }
    }
}
