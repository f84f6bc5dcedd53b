// src/error.rs
use std::fmt;

/// Structural regions of a hero page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Type,
    Bio,
    Stats,
    AbilityWrapper,
    Ability,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Type => "type label",
            Region::Bio => "bio block",
            Region::Stats => "basic stats",
            Region::AbilityWrapper => "ability wrapper",
            Region::Ability => "ability",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("region not found: {0}")]
    RegionNotFound(Region),

    #[error("could not parse {region}: {detail}")]
    Parse { region: Region, detail: String },

    #[error("transport error: {0}")]
    Transport(String),

    /// Extraction of one hero panicked; the batch keeps going.
    #[error("worker panicked: {0}")]
    WorkerPanic(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn parse(region: Region, detail: impl Into<String>) -> Self {
        ScrapeError::Parse { region, detail: detail.into() }
    }

    /// Stable name of the error class, used in failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::RegionNotFound(_) => "RegionNotFound",
            ScrapeError::Parse { .. } => "ParseError",
            ScrapeError::Transport(_) => "TransportError",
            ScrapeError::WorkerPanic(_) => "WorkerPanic",
            ScrapeError::Io(_) => "IoError",
            ScrapeError::Json(_) => "JsonError",
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
