use std::fmt::Debug;

use crate::{choice::Move, history::HistoryLog};

/// Source of the computer's moves.
pub trait Opponent: Debug {
    fn select_move(&mut self, history: &HistoryLog) -> Move;
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn select_move(&mut self, history: &HistoryLog) -> Move {
        (**self).select_move(history)
    }
}
