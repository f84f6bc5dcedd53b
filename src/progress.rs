// src/progress.rs
use crate::error::ScrapeError;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of heroes queued.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One hero extracted.
    fn item_done(&mut self, _hero: &str) {}

    /// One hero failed; the run carries on.
    fn item_failed(&mut self, _hero: &str, _err: &ScrapeError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
