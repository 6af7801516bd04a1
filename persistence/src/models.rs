use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;

pub const HISTORY_SHEET: &str = "Game History";
pub const STATISTICS_SHEET: &str = "Statistics";

pub const ROUND_COLUMN: &str = "Round";
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const PLAYER_COLUMN: &str = "Player Choice";
pub const COMPUTER_COLUMN: &str = "Computer Choice";
pub const RESULT_COLUMN: &str = "Result";
pub const HISTORY_COLUMNS: [&str; 5] = [
    ROUND_COLUMN,
    TIMESTAMP_COLUMN,
    PLAYER_COLUMN,
    COMPUTER_COLUMN,
    RESULT_COLUMN,
];

pub const STATISTIC_COLUMN: &str = "Statistic";
pub const VALUE_COLUMN: &str = "Value";
pub const STATISTICS_COLUMNS: [&str; 2] = [STATISTIC_COLUMN, VALUE_COLUMN];

pub const PLAYER_SCORE: &str = "Player Score";
pub const COMPUTER_SCORE: &str = "Computer Score";
pub const TOTAL_ROUNDS: &str = "Total Rounds";
pub const WIN_RATE: &str = "Win Rate";
pub const DRAW_RATE: &str = "Draw Rate";

/// A single spreadsheet cell. Integers are tried before floats so whole
/// numbers keep their integer type through a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Int(value) => Some(value.to_string()),
            Cell::Float(value) => Some(value.to_string()),
            Cell::Text(text) => Some(text.clone()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(value) => Some(*value),
            Cell::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            Cell::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Percentage value, accepting `"33.3%"`, `"33.3"` or a number.
    pub fn as_rate(&self) -> Option<f64> {
        match self {
            Cell::Int(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            Cell::Text(text) => {
                let text = text.trim();
                text.strip_suffix('%').unwrap_or(text).trim().parse().ok()
            }
            Cell::Empty => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(i64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == column)
    }

    /// The non-empty cell under `column` in `row`.
    pub fn cell<'a>(&self, row: &'a [Cell], column: &str) -> Option<&'a Cell> {
        self.column_index(column)
            .and_then(|idx| row.get(idx))
            .filter(|cell| !cell.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default = "default_version")]
    pub format_version: u32,
    pub sheets: Vec<Sheet>,
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

impl Default for Workbook {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            sheets: Vec::new(),
        }
    }
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.retain(|existing| existing.name != sheet.name);
        self.sheets.push(sheet);
    }
}
