use types::{HistoryLog, Move, Opponent};

/// Plays a fixed sequence of moves, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: Vec<_> = moves.into_iter().collect();
        Self { moves, next: 0 }
    }

    pub fn always(choice: Move) -> Self {
        Self::new([choice])
    }
}

impl Opponent for ScriptedOpponent {
    fn select_move(&mut self, _history: &HistoryLog) -> Move {
        // an empty script falls back to Rock
        let Some(&choice) = self.moves.get(self.next % self.moves.len().max(1)) else {
            return Move::Rock;
        };
        self.next += 1;
        choice
    }
}
