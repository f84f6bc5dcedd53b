// src/specs/mod.rs
//! # Hero page "specs"
//!
//! This module encodes *where the ground truth lives* on a hero page and
//! *how to read it*. Everything here is pure: it takes an already parsed
//! [`Document`](crate::core::Document) and returns typed records or a
//! [`ScrapeError`](crate::error::ScrapeError).
//!
//! ## What lives here
//! - **Region location** (`hero`): type label, bio block, the three stat
//!   values. Each has one primary marker; the bio block also has a
//!   heading-relative fallback.
//! - **Ability extraction** (`abilities`): finding the real ability wrapper
//!   behind the empty decoy, splitting fused ability boxes at the
//!   "Primary fire" / "Secondary fire" markers, and turning each block into
//!   a name, description and attribute map.
//!
//! ## What does **not** live here
//! - Fetching pages (`core::net`), worker scheduling (`scrape`), writing
//!   JSON (`store`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_heroes → specs::hero::fetch_and_extract
//!                            ↘ hero::extract(doc)
//!                                ↘ locate_type / locate_bio / locate_stats
//!                                ↘ abilities::extract(doc, bio)
//! ```
//!
//! ## Conventions & invariants
//! - One layout is targeted. When a marker is missing the extraction fails
//!   with `RegionNotFound`; it never guesses.
//! - Keys and values pass through `core::sanitize::clean_field`.
//! - Fallbacks are logged at debug level so layout drift shows up in
//!   `.store/debug.log`.
//!
//! ## Testing notes
//! Every step is testable offline on small HTML snippets; the full page
//! fixture lives in `tests/fixtures/`.
pub mod abilities;
pub mod hero;
