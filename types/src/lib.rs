pub mod choice;
pub mod error;
pub mod history;
pub mod opponent;
pub mod outcome;
pub mod round_record;
pub mod session_state;
pub mod statistics;

pub use choice::Move;
pub use error::GameError;
pub use history::{HistoryLog, MAX_HISTORY};
pub use opponent::Opponent;
pub use outcome::{resolve, Outcome};
pub use round_record::{EntryFields, ErrorEntry, HistoryEntry, RoundRecord};
pub use session_state::SessionState;
pub use statistics::{FavoriteMove, Rates, Scoreboard, Standing, FAVORITE_WINDOW};
