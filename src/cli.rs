// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::consts::{BASE_URL, DEFAULT_OUT_FILE, REQUEST_PAUSE_MS, WORKERS};
use crate::config::options::{AppOptions, ExportOptions, HeroSelector, PageSource, ScrapeOptions};
use crate::data::BatchReport;
use crate::error::{Result, ScrapeError};
use crate::{file, logging, progress::Progress, scrape, store};

pub const EXIT_OK: i32 = 0;
/// What the process exits with when `run` returns an error.
pub const EXIT_FATAL: i32 = 1;
/// Dataset written, but some heroes failed.
pub const EXIT_PARTIAL: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Scrape Overwatch hero pages into one JSON dataset.
#[derive(Parser, Debug)]
#[command(name = "hero_scrape", version)]
pub struct Args {
    /// Comma-separated hero slugs, e.g. `Ana,Soldier-76` (default: full roster)
    #[arg(long, value_delimiter = ',')]
    pub heroes: Option<Vec<String>>,

    /// Print the default roster and exit
    #[arg(long)]
    pub list_heroes: bool,

    /// Page URL prefix; the hero slug is appended
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Read `<DIR>/<hero>.html` instead of fetching
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    pub from_dir: Option<PathBuf>,

    /// Output file, or a directory (trailing `/`) to place the default file in
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Write failed heroes as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Keep the old record of a hero that fails this run
    #[arg(long)]
    pub keep_previous: bool,

    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Pause between requests per worker
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Level for .store/debug.log
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let source = match &self.from_dir {
            Some(dir) => PageSource::Local(dir.clone()),
            None => PageSource::Remote { base_url: self.base_url.clone() },
        };
        let heroes = match &self.heroes {
            Some(list) => HeroSelector::Only(list.clone()),
            None => HeroSelector::All,
        };
        AppOptions {
            scrape: ScrapeOptions {
                source,
                heroes,
                workers: self.workers.max(1),
                pause_ms: self.pause_ms,
            },
            export: ExportOptions {
                out_path: self.out.clone(),
                report_path: self.report.clone(),
                keep_previous: self.keep_previous,
            },
        }
    }
}

/// Prints one line per hero.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Crawler starts: {total} heroes.");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, hero: &str) {
        self.done += 1;
        println!("[{}/{}] ok      {hero}", self.done, self.total);
    }
    fn item_failed(&mut self, hero: &str, err: &ScrapeError) {
        self.done += 1;
        eprintln!("[{}/{}] FAILED  {hero}: {err}", self.done, self.total);
    }
    fn finish(&mut self) {
        println!("Crawler done.");
    }
}

/// Fill failed heroes from the existing output file. An unreadable file
/// only costs the carry-over, never the fresh results.
fn carry_previous(report: &mut BatchReport, out_hint: &Path) -> Vec<String> {
    let previous = file::resolve_out_path(out_hint, DEFAULT_OUT_FILE)
        .and_then(|out| store::load_dataset(&out));
    match previous {
        Ok(previous) => report.keep_previous(&previous),
        Err(e) => {
            log::warn!("keep-previous skipped: {e}");
            eprintln!("Warning: could not read previous results ({e}); nothing carried over.");
            Vec::new()
        }
    }
}

/// Parse the process arguments and run. Returns the exit code.
pub fn run() -> Result<i32> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<i32> {
    if args.list_heroes {
        for h in scrape::list_heroes() {
            println!("{h}");
        }
        return Ok(EXIT_OK);
    }

    logging::init(args.log_level.into());
    let opts = args.to_options();

    let mut progress = CliProgress::default();
    let mut report = scrape::run(&opts.scrape, Some(&mut progress))?;

    if opts.export.keep_previous && !report.is_complete() {
        let carried = carry_previous(&mut report, &opts.export.out_path);
        if !carried.is_empty() {
            println!("Kept previous records for: {}", carried.join(", "));
        }
    }

    let path = store::save_dataset(&opts.export.out_path, &report.dataset)?;
    if let Some(rp) = &opts.export.report_path {
        let rp = store::save_failures(rp, &report.failures)?;
        println!("Failure report: {}", rp.display());
    }
    println!("Result file: {}", path.display());

    if report.is_complete() {
        return Ok(EXIT_OK);
    }
    eprintln!("{} hero(es) failed:", report.failures.len());
    for f in &report.failures {
        eprintln!("  {} [{}] {}", f.hero, f.kind, f.message);
    }
    Ok(EXIT_PARTIAL)
}
