use std::path::Path;

use log;
use persistence::{load_session, save_session, FileStore, SnapshotStore};
use types::{GameError, Move, Opponent, RoundRecord, SessionState};

use crate::{display::DisplayState, status::Status};

/// Entries shown on the main view.
pub const RECENT_ENTRIES: usize = 8;

/// Single owner of a play session. Every operation runs to completion before
/// returning, so anything read between calls is a consistent snapshot.
#[derive(Debug)]
pub struct Game {
    state: SessionState,
    opponent: Box<dyn Opponent>,
    status: Status,
}

impl Game {
    pub fn new(opponent: Box<dyn Opponent>) -> Self {
        Self {
            state: SessionState::new(),
            opponent,
            status: Status::Ready,
        }
    }

    pub fn with_random_opponent(seed: Option<u64>) -> Self {
        Self::new(strategies::random_opponent(seed))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn select_move(&mut self, choice: Move) -> RoundRecord {
        let record = self.state.play_round(choice, self.opponent.as_mut());
        log::debug!("{}", self.state);
        record
    }

    /// Parses `choice` first; an unknown move leaves the session unchanged.
    pub fn select_move_str(&mut self, choice: &str) -> Result<RoundRecord, GameError> {
        match choice.parse::<Move>() {
            Ok(choice) => Ok(self.select_move(choice)),
            Err(err) => {
                log::error!("{err}");
                self.status = Status::InvalidMove(err.to_string());
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.status = Status::Reset;
        log::info!("Game reset");
    }

    /// Writes the session to `store`. Returns whether the save succeeded; the
    /// outcome is also left in [`Game::status`].
    pub fn export_to(&mut self, store: &mut dyn SnapshotStore) -> bool {
        match save_session(store, &self.state) {
            Ok(()) => {
                self.status = Status::Saved {
                    location: store.location(),
                };
                true
            }
            Err(err) => {
                log::error!("Error saving data: {err}");
                self.status = Status::SaveFailed(err.to_string());
                false
            }
        }
    }

    /// Replaces the session with the one in `store`. On any failure the
    /// current session is kept as it was.
    pub fn import_from(&mut self, store: &dyn SnapshotStore) -> bool {
        match load_session(store) {
            Ok(state) => {
                self.state = state;
                self.status = Status::Loaded;
                log::info!(
                    "Loaded {} history entries, {} rounds",
                    self.state.history().len(),
                    self.state.scoreboard().total_rounds
                );
                true
            }
            Err(err) if err.is_not_found() => {
                log::warn!("{err}");
                self.status = Status::NoSavedData;
                false
            }
            Err(err) => {
                log::error!("Error loading data: {err}");
                self.status = Status::LoadFailed(err.to_string());
                false
            }
        }
    }

    pub fn export_snapshot(&mut self, path: impl AsRef<Path>) -> bool {
        match FileStore::new(path.as_ref()) {
            Ok(mut store) => self.export_to(&mut store),
            Err(err) => {
                self.status = Status::SaveFailed(err.to_string());
                false
            }
        }
    }

    pub fn import_snapshot(&mut self, path: impl AsRef<Path>) -> bool {
        match FileStore::new(path.as_ref()) {
            Ok(store) => self.import_from(&store),
            Err(err) => {
                self.status = Status::LoadFailed(err.to_string());
                false
            }
        }
    }

    pub fn display(&self, recent: usize) -> DisplayState {
        DisplayState::new(&self.state, &self.status, recent)
    }

    /// History lines newest first, all of them when `limit` is `None`.
    pub fn history_lines(&self, limit: Option<usize>) -> Vec<String> {
        let history = self.state.history();
        history
            .recent(limit.unwrap_or(history.len()))
            .into_iter()
            .map(|entry| entry.to_string())
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_random_opponent(None)
    }
}
