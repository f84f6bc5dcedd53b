// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

pub use data::{AbilityRecord, BatchReport, Dataset, HeroRecord, SubjectFailure};
pub use error::{Region, ScrapeError};
