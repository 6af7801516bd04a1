pub mod command;
pub mod config;
pub mod display;
pub mod game;
pub mod status;

pub use command::{parse_command, Command};
pub use config::{ConfigError, GameConfig};
pub use display::DisplayState;
pub use game::{Game, RECENT_ENTRIES};
pub use status::{Status, StatusLevel};
