use std::fmt::Display;

use crate::{choice::Move, history::HistoryLog};

pub const FAVORITE_WINDOW: usize = 50;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rates {
    pub win_rate: f64,
    pub draw_rate: f64,
    pub computer_win_rate: f64,
}

/// Score counters plus the stored percentages. The percentages are kept
/// rather than derived so that a loaded snapshot shows exactly what was saved.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scoreboard {
    pub player_score: u32,
    pub computer_score: u32,
    pub total_rounds: u32,
    pub win_rate: f64,
    pub draw_rate: f64,
}

impl Scoreboard {
    pub fn draws(&self) -> u32 {
        self.total_rounds
            .saturating_sub(self.player_score)
            .saturating_sub(self.computer_score)
    }

    pub fn recompute_rates(&mut self) {
        self.win_rate = percentage(self.player_score, self.total_rounds);
        self.draw_rate = percentage(self.draws(), self.total_rounds);
    }

    pub fn rates(&self) -> Rates {
        if self.total_rounds == 0 {
            return Rates::default();
        }
        Rates {
            win_rate: self.win_rate,
            draw_rate: self.draw_rate,
            computer_win_rate: percentage(self.computer_score, self.total_rounds),
        }
    }

    pub fn standing(&self) -> Standing {
        match self.player_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => Standing::PlayerLeads,
            std::cmp::Ordering::Less => Standing::ComputerLeads,
            std::cmp::Ordering::Equal => Standing::Tied,
        }
    }

    pub fn win_rate_text(&self) -> String {
        format_rate(self.win_rate, self.total_rounds)
    }

    pub fn draw_rate_text(&self) -> String {
        format_rate(self.draw_rate, self.total_rounds)
    }

    pub fn computer_win_rate_text(&self) -> String {
        format_rate(self.rates().computer_win_rate, self.total_rounds)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Standing {
    PlayerLeads,
    ComputerLeads,
    Tied,
}

fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total) * 100.0
    }
}

/// `"33.3%"`, or `"0%"` before any round has been played.
pub fn format_rate(rate: f64, total_rounds: u32) -> String {
    if total_rounds == 0 {
        "0%".to_string()
    } else {
        format!("{rate:.1}%")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FavoriteMove {
    pub choice: Move,
    pub count: usize,
}

impl Display for FavoriteMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} times)", self.choice, self.count)
    }
}

/// Most frequent player move among the last `window` entries. Ties go to the
/// earlier move in Rock, Paper, Scissors order.
pub fn favorite_move(history: &HistoryLog, window: usize) -> Option<FavoriteMove> {
    if history.is_empty() || window == 0 {
        return None;
    }
    let mut counts = [0usize; 3];
    for choice in history.recent(window).iter().filter_map(|e| e.player_move()) {
        counts[choice.index()] += 1;
    }
    // max_by_key keeps the last maximum, so scan in reverse order
    Move::ALL
        .iter()
        .rev()
        .map(|&choice| FavoriteMove {
            choice,
            count: counts[choice.index()],
        })
        .max_by_key(|fav| fav.count)
}

pub fn favorite_move_text(favorite: Option<FavoriteMove>) -> String {
    favorite
        .map(|fav| fav.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
