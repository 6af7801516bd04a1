use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// The one-line message shown after each user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    Saved { location: String },
    SaveFailed(String),
    Loaded,
    NoSavedData,
    LoadFailed(String),
    Reset,
    InvalidMove(String),
}

impl Status {
    pub fn level(&self) -> StatusLevel {
        match self {
            Status::Ready => StatusLevel::Info,
            Status::Saved { .. } | Status::Loaded => StatusLevel::Success,
            Status::NoSavedData | Status::Reset => StatusLevel::Warning,
            Status::SaveFailed(_) | Status::LoadFailed(_) | Status::InvalidMove(_) => {
                StatusLevel::Error
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.level() == StatusLevel::Error
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Ready
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Saved { location } => write!(f, "Data saved to {location}"),
            Status::SaveFailed(err) => write!(f, "Error saving data: {err}"),
            Status::Loaded => write!(f, "Data loaded successfully"),
            Status::NoSavedData => write!(f, "No saved data found"),
            Status::LoadFailed(err) => write!(f, "Error loading data: {err}"),
            Status::Reset => write!(f, "Game reset"),
            Status::InvalidMove(err) => write!(f, "{err}"),
        }
    }
}
