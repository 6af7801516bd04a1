use std::fmt::Display;

use chrono::{Local, NaiveTime};
use itertools::Itertools;
use log;

use crate::{
    choice::Move,
    history::HistoryLog,
    opponent::Opponent,
    outcome::Outcome,
    round_record::{HistoryEntry, RoundRecord},
    statistics::{favorite_move, FavoriteMove, Rates, Scoreboard, FAVORITE_WINDOW},
};

/// Everything one play session knows: scores, stored rates, the retained
/// history and the all-time round counter that numbers new rounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    scoreboard: Scoreboard,
    rounds_played: u64,
    history: HistoryLog,
    last_round: Option<RoundRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from saved statistics and history rows. Scores come
    /// from `scoreboard` only; error entries take a history slot but never
    /// count towards them.
    pub fn restore(scoreboard: Scoreboard, entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let mut history = HistoryLog::new();
        let mut rows = 0u64;
        let mut highest_round = 0u64;
        for entry in entries {
            rows += 1;
            highest_round = highest_round.max(entry.round());
            history.append(entry);
        }
        // new rounds continue after the loaded rows without reusing a number
        let rounds_played = rows.max(highest_round);
        log::debug!(
            "Restored {rows} history rows, next round is {}",
            rounds_played + 1
        );

        Self {
            scoreboard,
            rounds_played,
            history,
            last_round: None,
        }
    }

    /// Draws the computer's move from `opponent` and records the round.
    pub fn play_round(&mut self, player: Move, opponent: &mut dyn Opponent) -> RoundRecord {
        let computer = opponent.select_move(&self.history);
        self.record_round(player, computer, Local::now().time())
    }

    pub fn record_round(&mut self, player: Move, computer: Move, timestamp: NaiveTime) -> RoundRecord {
        self.rounds_played += 1;
        let record = RoundRecord::new(self.rounds_played, timestamp, player, computer);

        let board = &mut self.scoreboard;
        board.total_rounds = board.total_rounds.saturating_add(1);
        match record.outcome {
            Outcome::PlayerWin => board.player_score = board.player_score.saturating_add(1),
            Outcome::ComputerWin => board.computer_score = board.computer_score.saturating_add(1),
            Outcome::Draw => {}
        }
        board.recompute_rates();

        let entry = HistoryEntry::from(record);
        log::info!("{entry}");
        if let Some(evicted) = self.history.append(entry) {
            log::debug!("History full, dropped round {}", evicted.round());
        }
        self.last_round = Some(record);
        record
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.last_round.as_ref()
    }

    pub fn rates(&self) -> Rates {
        self.scoreboard.rates()
    }

    pub fn favorite_move(&self) -> Option<FavoriteMove> {
        favorite_move(&self.history, FAVORITE_WINDOW)
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = &self.scoreboard;
        let history_str = self.history.all().map(|entry| entry.to_string()).join("\n");
        write!(
            f,
            "\nScore: You {} - {} Computer ({} draws, {} rounds)\nWin Rate: {} Draw Rate: {}\nHistory:\n{}",
            board.player_score,
            board.computer_score,
            board.draws(),
            board.total_rounds,
            board.win_rate_text(),
            board.draw_rate_text(),
            history_str
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{history::MAX_HISTORY, round_record::ErrorEntry};

    #[derive(Debug)]
    struct Scripted(VecDeque<Move>);

    impl Opponent for Scripted {
        fn select_move(&mut self, _history: &HistoryLog) -> Move {
            self.0.pop_front().expect("script ran out of moves")
        }
    }

    fn scripted(moves: &[Move]) -> Scripted {
        Scripted(moves.iter().copied().collect())
    }

    #[test]
    fn test_first_round_player_win() {
        let mut state = SessionState::new();
        let record = state.play_round(Move::Rock, &mut scripted(&[Move::Scissors]));

        assert_eq!(record.outcome, Outcome::PlayerWin);
        assert_eq!(record.round, 1);
        let board = state.scoreboard();
        assert_eq!(
            (board.player_score, board.computer_score, board.total_rounds),
            (1, 0, 1)
        );
        assert_eq!(board.win_rate, 100.0);
        assert_eq!(board.draw_rate, 0.0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.last_round(), Some(&record));
    }

    #[test]
    fn test_win_loss_draw_sequence() {
        let mut state = SessionState::new();
        let mut opponent = scripted(&[Move::Scissors, Move::Paper, Move::Rock]);
        let outcomes: Vec<_> = (0..3)
            .map(|_| state.play_round(Move::Rock, &mut opponent).outcome)
            .collect();

        assert_eq!(
            outcomes,
            vec![Outcome::PlayerWin, Outcome::ComputerWin, Outcome::Draw]
        );
        let board = state.scoreboard();
        assert_eq!(board.player_score, 1);
        assert_eq!(board.computer_score, 1);
        assert_eq!(board.total_rounds, 3);
        assert_eq!(board.draw_rate_text(), "33.3%");
        let rounds: Vec<_> = state.history().all().map(|e| e.round()).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        let recent: Vec<_> = state.history().recent(2).iter().map(|e| e.round()).collect();
        assert_eq!(recent, vec![3, 2]);
    }

    #[test]
    fn test_numbering_survives_eviction() {
        let mut state = SessionState::new();
        let ts = NaiveTime::from_hms_opt(1, 2, 3).expect("valid time");
        for _ in 0..150 {
            state.record_round(Move::Paper, Move::Paper, ts);
        }
        assert_eq!(state.history().len(), MAX_HISTORY);
        assert_eq!(state.history().last().map(|e| e.round()), Some(150));
        assert_eq!(state.history().all().next().map(|e| e.round()), Some(51));
        assert_eq!(state.scoreboard().total_rounds, 150);
        assert_eq!(state.scoreboard().draws(), 150);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SessionState::new();
        state.play_round(Move::Paper, &mut scripted(&[Move::Rock]));
        state.reset();
        assert_eq!(state, SessionState::new());
        assert_eq!(state.favorite_move(), None);
        assert_eq!(state.rates(), Rates::default());
    }

    #[test]
    fn test_restore_continues_numbering() {
        let scoreboard = Scoreboard {
            player_score: 4,
            computer_score: 1,
            total_rounds: 6,
            win_rate: 66.7,
            draw_rate: 16.7,
        };
        let entries = vec![
            HistoryEntry::Error(ErrorEntry::placeholder(10)),
            HistoryEntry::Error(ErrorEntry::placeholder(11)),
        ];
        let mut state = SessionState::restore(scoreboard, entries);
        assert_eq!(state.scoreboard(), &scoreboard);
        assert_eq!(state.history().len(), 2);

        let record = state.play_round(Move::Rock, &mut scripted(&[Move::Rock]));
        assert_eq!(record.round, 12);
    }
}
