// src/logging.rs
// File logger behind the `log` facade. Lines look like
//   [00:00:01.234][INFO] Fetched Ana
// and are appended to .store/debug.log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Metadata, Record};

use crate::config::consts::{LOG_FILE_NAME, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger;

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE_NAME)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct FileLogger;

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level().as_str(), &record.args().to_string());
    }

    fn flush(&self) {}
}

fn write_line(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Install the file logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    start();
    let _ = fs::create_dir_all(STORE_DIR);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
