// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where hero pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    /// `GET <base_url><hero>`
    Remote { base_url: String },
    /// `<dir>/<hero>.html`, saved pages for offline runs.
    Local(PathBuf),
}

impl Default for PageSource {
    fn default() -> Self {
        PageSource::Remote { base_url: s!(BASE_URL) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroSelector {
    All,
    Only(Vec<String>),
}

impl HeroSelector {
    /// Ordered subject list; duplicates dropped, first occurrence kept.
    pub fn resolve(&self) -> Vec<String> {
        match self {
            HeroSelector::All => HEROES.iter().map(|h| s!(*h)).collect(),
            HeroSelector::Only(list) => {
                let mut out: Vec<String> = Vec::with_capacity(list.len());
                for h in list {
                    let h = h.trim();
                    if h.is_empty() || out.iter().any(|o| o == h) {
                        continue;
                    }
                    out.push(s!(h));
                }
                out
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: PageSource,
    pub heroes: HeroSelector,
    pub workers: usize,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: PageSource::default(),
            heroes: HeroSelector::All,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// File, or directory hint (trailing separator / existing dir).
    pub out_path: PathBuf,
    /// Failure report (JSON). None → not written.
    pub report_path: Option<PathBuf>,
    /// Carry over records of failed heroes from the existing output file.
    pub keep_previous: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            report_path: None,
            keep_previous: false,
        }
    }
}
