// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://overwatch.guide/heroes/";
pub const USER_AGENT: &str = concat!("hero_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE_NAME: &str = "debug.log";

// Export
pub const DEFAULT_OUT_FILE: &str = "ow_hero_data.json";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Page layout markers (overwatch.guide hero template)
pub const TYPE_LABEL_STYLE: &str = "font-size: 18px;";
pub const BIO_STYLE: &str = "line-height: 20px;";
pub const BIO_HEADING: &str = "Bio";
pub const STAT_UNIT_CLASS: &str = "vc_label_units";
pub const WRAPPER_CLASS: &str = "wpb_wrapper";
pub const PRIMARY_FIRE: &str = "Primary fire";
pub const SECONDARY_FIRE: &str = "Secondary fire";

// Default roster; slugs are appended to BASE_URL.
pub const HEROES: &[&str] = &[
    "Ana", "Baptiste", "Bastion", "D-va", "Doomfist", "Genji", "Hanzo", "Junkrat", "Lucio",
    "McCree", "Mei", "Mercy", "Moira", "Orisa", "Pharah", "Reaper", "Reinhardt", "Roadhog",
    "Soldier-76", "Sombra", "Symmetra", "Torbjorn", "Tracer", "Widowmaker", "Winston", "Zarya",
    "Zenyatta",
];
