// src/scrape/mod.rs
mod heroes;

pub use heroes::{collect_heroes, list_heroes, run};
