use std::fmt::Display;

use chrono::{NaiveTime, Timelike};

use crate::{
    choice::Move,
    outcome::{resolve, Outcome},
};

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

const PLAYER_PREFIX: &str = "You: ";
const COMPUTER_PREFIX: &str = "PC: ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u64,
    pub timestamp: Option<NaiveTime>,
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl RoundRecord {
    pub fn new(round: u64, timestamp: NaiveTime, player: Move, computer: Move) -> Self {
        Self {
            round,
            timestamp: timestamp.with_nanosecond(0).or(Some(timestamp)),
            player,
            computer,
            outcome: resolve(player, computer),
        }
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string())
    }

    /// "You chose Rock, Computer chose Scissors."
    pub fn summary(&self) -> String {
        format!(
            "You chose {}, Computer chose {}.",
            self.player, self.computer
        )
    }
}

/// A history slot whose fields could not be turned into a [`RoundRecord`].
/// Keeps whatever text was recovered so it can be shown and written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEntry {
    pub round: u64,
    pub timestamp: String,
    pub player: String,
    pub computer: String,
    pub result: String,
}

impl ErrorEntry {
    pub fn placeholder(round: u64) -> Self {
        Self {
            round,
            timestamp: "error".to_string(),
            player: "error".to_string(),
            computer: "error".to_string(),
            result: "Error parsing entry".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEntry {
    Round(RoundRecord),
    Error(ErrorEntry),
}

/// The five text fields of a history row, in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFields {
    pub round: u64,
    pub timestamp: String,
    pub player: String,
    pub computer: String,
    pub result: String,
}

impl HistoryEntry {
    pub fn round(&self) -> u64 {
        match self {
            HistoryEntry::Round(record) => record.round,
            HistoryEntry::Error(entry) => entry.round,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HistoryEntry::Error(_))
    }

    pub fn record(&self) -> Option<&RoundRecord> {
        match self {
            HistoryEntry::Round(record) => Some(record),
            HistoryEntry::Error(_) => None,
        }
    }

    /// The player's move, if it can still be read from the entry.
    pub fn player_move(&self) -> Option<Move> {
        match self {
            HistoryEntry::Round(record) => Some(record.player),
            HistoryEntry::Error(entry) => entry.player.parse().ok(),
        }
    }

    pub fn fields(&self) -> EntryFields {
        match self {
            HistoryEntry::Round(record) => EntryFields {
                round: record.round,
                timestamp: record.timestamp_text(),
                player: record.player.to_string(),
                computer: record.computer.to_string(),
                result: record.outcome.to_string(),
            },
            HistoryEntry::Error(entry) => EntryFields {
                round: entry.round,
                timestamp: entry.timestamp.clone(),
                player: entry.player.clone(),
                computer: entry.computer.clone(),
                result: entry.result.clone(),
            },
        }
    }

    /// Builds an entry from raw column text. Falls back to an [`ErrorEntry`]
    /// holding the raw text when any field fails to parse or the result
    /// contradicts the moves.
    pub fn from_fields(
        round: u64,
        timestamp: &str,
        player: &str,
        computer: &str,
        result: &str,
    ) -> HistoryEntry {
        let error = || {
            HistoryEntry::Error(ErrorEntry {
                round,
                timestamp: timestamp.to_string(),
                player: player.to_string(),
                computer: computer.to_string(),
                result: result.to_string(),
            })
        };

        let timestamp = match parse_timestamp(timestamp) {
            Ok(ts) => ts,
            Err(()) => return error(),
        };
        let (Ok(player_move), Ok(computer_move), Ok(outcome)) = (
            player.parse::<Move>(),
            computer.parse::<Move>(),
            result.parse::<Outcome>(),
        ) else {
            return error();
        };
        if resolve(player_move, computer_move) != outcome {
            log::warn!(
                "Round {round}: result {outcome:?} contradicts {player_move} vs {computer_move}"
            );
            return error();
        }

        HistoryEntry::Round(RoundRecord {
            round,
            timestamp,
            player: player_move,
            computer: computer_move,
            outcome,
        })
    }

    /// Recovers an entry from the display line
    /// `Round {n} [{HH:MM:SS}]: You: {player}, PC: {computer} - {result}`.
    ///
    /// Missing pieces fall back the same way the line was always read:
    /// no `[...]` gives an unknown timestamp, no ` - ` gives an `Unknown`
    /// result and no `, ` gives an `Unknown` computer choice. A line without
    /// the `": "` separator cannot be split at all and becomes a placeholder.
    pub fn from_legacy_line(line: &str, fallback_round: u64) -> HistoryEntry {
        let Some((header, detail)) = line.split_once(": ") else {
            log::warn!("History line has no ': ' separator: {line:?}");
            return HistoryEntry::Error(ErrorEntry::placeholder(fallback_round));
        };

        let round = header
            .split('[')
            .next()
            .and_then(|head| head.trim().strip_prefix("Round"))
            .and_then(|num| num.trim().parse::<u64>().ok())
            .unwrap_or(fallback_round);
        let timestamp = match (header.find('['), header.find(']')) {
            (Some(open), Some(close)) if open < close => &header[open + 1..close],
            _ => UNKNOWN_TIMESTAMP,
        };

        let (choices, result) = detail.split_once(" - ").unwrap_or((detail, "Unknown"));
        let (player_part, computer_part) = choices
            .split_once(", ")
            .unwrap_or((choices, "PC: Unknown"));
        let player = player_part
            .strip_prefix(PLAYER_PREFIX)
            .unwrap_or(player_part);
        let computer = computer_part
            .strip_prefix(COMPUTER_PREFIX)
            .unwrap_or(computer_part);

        HistoryEntry::from_fields(round, timestamp, player, computer, result)
    }
}

fn parse_timestamp(text: &str) -> Result<Option<NaiveTime>, ()> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(UNKNOWN_TIMESTAMP) {
        return Ok(None);
    }
    NaiveTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map(Some)
        .map_err(|_| ())
}

impl Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.fields();
        write!(
            f,
            "Round {} [{}]: {PLAYER_PREFIX}{}, {COMPUTER_PREFIX}{} - {}",
            fields.round, fields.timestamp, fields.player, fields.computer, fields.result
        )
    }
}

impl From<RoundRecord> for HistoryEntry {
    fn from(record: RoundRecord) -> Self {
        HistoryEntry::Round(record)
    }
}
