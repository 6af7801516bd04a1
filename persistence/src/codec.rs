//! Conversion between a [`SessionState`] and its two-sheet [`Workbook`].
//!
//! Decoding is tolerant: every history row is read on its own and a row that
//! cannot be understood becomes an error entry instead of failing the load.
//! Only a workbook missing one of its sheets is rejected.

use std::collections::HashMap;

use types::{statistics::format_rate, ErrorEntry, HistoryEntry, Scoreboard, SessionState};

use crate::{
    error::SnapshotError,
    models::{
        Cell, Sheet, Workbook, COMPUTER_COLUMN, COMPUTER_SCORE, DRAW_RATE, FORMAT_VERSION,
        HISTORY_COLUMNS, HISTORY_SHEET, PLAYER_COLUMN, PLAYER_SCORE, RESULT_COLUMN, ROUND_COLUMN,
        STATISTICS_COLUMNS, STATISTICS_SHEET, STATISTIC_COLUMN, TIMESTAMP_COLUMN, TOTAL_ROUNDS,
        VALUE_COLUMN, WIN_RATE,
    },
};

pub fn serialize(state: &SessionState) -> Workbook {
    let mut workbook = Workbook {
        format_version: FORMAT_VERSION,
        sheets: Vec::with_capacity(2),
    };
    workbook.add_sheet(history_sheet(state));
    workbook.add_sheet(statistics_sheet(state.scoreboard()));
    workbook
}

pub fn deserialize(workbook: &Workbook) -> Result<SessionState, SnapshotError> {
    if workbook.format_version > FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(workbook.format_version));
    }
    let history = workbook
        .sheet(HISTORY_SHEET)
        .ok_or_else(|| SnapshotError::MissingSheet(HISTORY_SHEET.to_string()))?;
    let statistics = workbook
        .sheet(STATISTICS_SHEET)
        .ok_or_else(|| SnapshotError::MissingSheet(STATISTICS_SHEET.to_string()))?;

    let entries = decode_history(history);
    let errors = entries.iter().filter(|entry| entry.is_error()).count();
    if errors > 0 {
        tracing::warn!("{errors} of {} history rows could not be parsed", entries.len());
    }
    let scoreboard = decode_statistics(statistics);
    Ok(SessionState::restore(scoreboard, entries))
}

fn history_sheet(state: &SessionState) -> Sheet {
    let mut sheet = Sheet::new(HISTORY_SHEET, &HISTORY_COLUMNS);
    for entry in state.history().all() {
        let fields = entry.fields();
        sheet.push_row(vec![
            Cell::Int(i64::try_from(fields.round).unwrap_or(i64::MAX)),
            Cell::Text(fields.timestamp),
            Cell::Text(fields.player),
            Cell::Text(fields.computer),
            Cell::Text(fields.result),
        ]);
    }
    sheet
}

fn statistics_sheet(board: &Scoreboard) -> Sheet {
    let mut sheet = Sheet::new(STATISTICS_SHEET, &STATISTICS_COLUMNS);
    let rows: [(&str, Cell); 5] = [
        (PLAYER_SCORE, board.player_score.into()),
        (COMPUTER_SCORE, board.computer_score.into()),
        (TOTAL_ROUNDS, board.total_rounds.into()),
        (WIN_RATE, format_rate(board.win_rate, board.total_rounds).into()),
        (DRAW_RATE, format_rate(board.draw_rate, board.total_rounds).into()),
    ];
    for (statistic, value) in rows {
        sheet.push_row(vec![Cell::from(statistic), value]);
    }
    sheet
}

fn decode_history(sheet: &Sheet) -> Vec<HistoryEntry> {
    sheet
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| decode_row(sheet, row, idx as u64 + 1))
        .collect()
}

/// One history row. A row holding a single text cell is read as a history
/// line (`Round 1 [12:00:00]: You: Rock, PC: Paper - Computer wins!`).
fn decode_row(sheet: &Sheet, row: &[Cell], position: u64) -> HistoryEntry {
    let filled: Vec<&Cell> = row.iter().filter(|cell| !cell.is_empty()).collect();
    if let [Cell::Text(line)] = filled.as_slice() {
        return HistoryEntry::from_legacy_line(line, position);
    }

    let round = sheet
        .cell(row, ROUND_COLUMN)
        .and_then(Cell::as_int)
        .and_then(|round| u64::try_from(round).ok())
        .filter(|&round| round > 0)
        .unwrap_or(position);
    let text = |column: &str| sheet.cell(row, column).and_then(Cell::as_text);

    match (
        text(TIMESTAMP_COLUMN),
        text(PLAYER_COLUMN),
        text(COMPUTER_COLUMN),
        text(RESULT_COLUMN),
    ) {
        (Some(timestamp), Some(player), Some(computer), Some(result)) => {
            let entry = HistoryEntry::from_fields(round, &timestamp, &player, &computer, &result);
            if entry.is_error() {
                tracing::warn!("Malformed history row {position}: {entry}");
            }
            entry
        }
        (timestamp, player, computer, result) => {
            tracing::warn!("History row {position} is missing fields: {row:?}");
            let placeholder = ErrorEntry::placeholder(round);
            HistoryEntry::Error(ErrorEntry {
                round,
                timestamp: timestamp.unwrap_or(placeholder.timestamp),
                player: player.unwrap_or(placeholder.player),
                computer: computer.unwrap_or(placeholder.computer),
                result: result.unwrap_or(placeholder.result),
            })
        }
    }
}

fn decode_statistics(sheet: &Sheet) -> Scoreboard {
    let values: HashMap<String, &Cell> = sheet
        .rows
        .iter()
        .filter_map(|row| {
            let name = sheet.cell(row, STATISTIC_COLUMN)?.as_text()?;
            let value = sheet.cell(row, VALUE_COLUMN)?;
            Some((name.trim().to_string(), value))
        })
        .collect();

    let count = |name: &str| -> u32 {
        let Some(cell) = values.get(name) else {
            return 0;
        };
        match cell.as_int().map(u32::try_from) {
            Some(Ok(value)) => value,
            _ => {
                tracing::warn!("Ignoring unreadable {name:?} value: {cell:?}");
                0
            }
        }
    };
    let rate = |name: &str| -> f64 {
        let Some(cell) = values.get(name) else {
            return 0.0;
        };
        cell.as_rate().unwrap_or_else(|| {
            tracing::warn!("Ignoring unreadable {name:?} value: {cell:?}");
            0.0
        })
    };

    Scoreboard {
        player_score: count(PLAYER_SCORE),
        computer_score: count(COMPUTER_SCORE),
        total_rounds: count(TOTAL_ROUNDS),
        win_rate: rate(WIN_RATE),
        draw_rate: rate(DRAW_RATE),
    }
}
