use std::fmt::Display;

use itertools::Itertools;
use types::{
    statistics::favorite_move_text, HistoryEntry, Outcome, SessionState, Standing,
};

use crate::status::{Status, StatusLevel};

/// Everything a front-end needs to draw after an operation completes.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub player_score: u32,
    pub computer_score: u32,
    pub standing: Standing,
    pub total_rounds: u32,
    pub draws: u32,
    pub win_rate: String,
    pub draw_rate: String,
    pub computer_win_rate: String,
    pub last_result: Option<String>,
    pub last_outcome: Option<Outcome>,
    pub recent_history: Vec<String>,
    pub favorite_move: String,
    pub status: String,
    pub status_level: StatusLevel,
}

impl DisplayState {
    pub fn new(state: &SessionState, status: &Status, recent: usize) -> Self {
        let board = state.scoreboard();
        Self {
            player_score: board.player_score,
            computer_score: board.computer_score,
            standing: board.standing(),
            total_rounds: board.total_rounds,
            draws: board.draws(),
            win_rate: board.win_rate_text(),
            draw_rate: board.draw_rate_text(),
            computer_win_rate: board.computer_win_rate_text(),
            last_result: state.last_round().map(|record| record.summary()),
            last_outcome: state.last_round().map(|record| record.outcome),
            recent_history: state
                .history()
                .recent(recent)
                .into_iter()
                .map(HistoryEntry::to_string)
                .collect(),
            favorite_move: favorite_move_text(state.favorite_move()),
            status: status.to_string(),
            status_level: status.level(),
        }
    }

    /// The statistics panel: wins, rates, draws and the favourite move.
    pub fn stats_report(&self) -> String {
        [
            format!("Player Wins: {} ({})", self.player_score, self.win_rate),
            format!(
                "Computer Wins: {} ({})",
                self.computer_score, self.computer_win_rate
            ),
            format!("Draws: {} ({})", self.draws, self.draw_rate),
            format!("Total Rounds: {}", self.total_rounds),
            format!("Favorite Choice: {}", self.favorite_move),
        ]
        .join("\n")
    }
}

impl Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leader = match self.standing {
            Standing::PlayerLeads => "you lead",
            Standing::ComputerLeads => "computer leads",
            Standing::Tied => "tied",
        };
        let result = match (&self.last_result, self.last_outcome) {
            (Some(summary), Some(outcome)) => format!("{summary} {outcome}"),
            _ => "Make your choice!".to_string(),
        };
        writeln!(f, "{result}")?;
        writeln!(
            f,
            "Score: You {} - {} Computer ({leader})",
            self.player_score, self.computer_score
        )?;
        writeln!(
            f,
            "Win Rate: {}  Draw Rate: {}  Total Rounds: {}",
            self.win_rate, self.draw_rate, self.total_rounds
        )?;
        if !self.recent_history.is_empty() {
            writeln!(f, "Recent:\n  {}", self.recent_history.iter().join("\n  "))?;
        }
        write!(f, "Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use types::Move;

    #[test]
    fn test_empty_session_display() {
        let display = DisplayState::new(&SessionState::new(), &Status::Ready, 8);
        assert_eq!(display.win_rate, "0%");
        assert_eq!(display.favorite_move, "N/A");
        assert_eq!(display.standing, Standing::Tied);
        assert!(display.recent_history.is_empty());
        assert!(display.to_string().starts_with("Make your choice!"));
        assert!(display.to_string().ends_with("Status: Ready"));
    }

    #[test]
    fn test_display_after_rounds() {
        let ts = NaiveTime::from_hms_opt(20, 0, 0).expect("valid time");
        let mut state = SessionState::new();
        state.record_round(Move::Paper, Move::Rock, ts);
        state.record_round(Move::Paper, Move::Paper, ts);

        let display = DisplayState::new(&state, &Status::Ready, 1);
        assert_eq!(display.standing, Standing::PlayerLeads);
        assert_eq!(display.win_rate, "50.0%");
        assert_eq!(display.computer_win_rate, "0.0%");
        assert_eq!(
            display.recent_history,
            vec!["Round 2 [20:00:00]: You: Paper, PC: Paper - Draw!".to_string()]
        );
        assert_eq!(
            display.last_result.as_deref(),
            Some("You chose Paper, Computer chose Paper.")
        );
        assert_eq!(display.favorite_move, "Paper (2 times)");
        assert!(display.stats_report().contains("Draws: 1 (50.0%)"));
    }
}
