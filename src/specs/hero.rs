// src/specs/hero.rs

use crate::config::consts::{BIO_HEADING, BIO_STYLE, STAT_UNIT_CLASS, TYPE_LABEL_STYLE};
use crate::core::sanitize::{clean_field, split_field};
use crate::core::{Document, NodeId, PageLoader};
use crate::data::{Fields, HeroRecord};
use crate::error::{Region, Result, ScrapeError};

use super::abilities;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub health: u32,
    pub armor: u32,
    pub shield: u32,
}

/// Load, parse and extract one hero page.
pub fn fetch_and_extract(loader: &dyn PageLoader, hero: &str) -> Result<HeroRecord> {
    let html = loader.load(hero)?;
    let doc = Document::parse(&html);
    let record = extract(&doc)?;

    log::info!(
        "{hero}: {} bio fields, {} abilities",
        record.bio.len(),
        record.abilities.len()
    );
    Ok(record)
}

/// Type → bio → stats → abilities.
pub fn extract(doc: &Document) -> Result<HeroRecord> {
    let hero_type = locate_type(doc)?;
    let (bio_node, bio) = locate_bio(doc)?;
    let Stats { health, armor, shield } = locate_stats(doc)?;
    let abilities = abilities::extract(doc, bio_node)?;

    Ok(HeroRecord { health, armor, shield, hero_type, bio, abilities })
}

fn has_style(doc: &Document, id: NodeId, tag: &str, style: &str) -> bool {
    doc.is_tag(id, tag) && doc.element(id).and_then(|e| e.attr("style")) == Some(style)
}

fn is_stat_unit(doc: &Document, id: NodeId) -> bool {
    doc.is_tag(id, "span") && doc.element(id).is_some_and(|e| e.has_class(STAT_UNIT_CLASS))
}

/// Text of the `font-size: 18px` label, untrimmed.
pub fn locate_type(doc: &Document) -> Result<String> {
    doc.find(|d, n| has_style(d, n, "span", TYPE_LABEL_STYLE))
        .map(|n| doc.text(n))
        .ok_or(ScrapeError::RegionNotFound(Region::Type))
}

/// Bio container and its parsed fields.
pub fn locate_bio(doc: &Document) -> Result<(NodeId, Fields)> {
    let bio = doc
        .find(|d, n| has_style(d, n, "div", BIO_STYLE))
        .or_else(|| {
            log::debug!("bio style marker missing, trying the \"{BIO_HEADING}\" heading");
            bio_from_heading(doc)
        })
        .ok_or(ScrapeError::RegionNotFound(Region::Bio))?;

    Ok((bio, parse_bio(doc, bio)))
}

// "Bio" text → its block (two levels up) → two siblings on → two nodes
// further in document order.
fn bio_from_heading(doc: &Document) -> Option<NodeId> {
    let heading = doc.find(|d, n| d.text_node(n) == Some(BIO_HEADING))?;
    let block = doc.parent(doc.parent(heading)?)?;
    let n = doc.next_sibling(block)?;
    let n = doc.next_sibling(n)?;
    let n = doc.next_in_order(n)?;
    let n = doc.next_in_order(n)?;
    doc.is_element(n).then_some(n)
}

/// `Name: value` per child; blank children and children without a colon
/// are skipped. Names are only trimmed, values are also sanitized.
/// Repeated names: last wins.
pub fn parse_bio(doc: &Document, bio: NodeId) -> Fields {
    let mut fields = Fields::new();
    for &child in doc.children(bio) {
        let text = doc.text(child);
        if text.trim().is_empty() {
            continue;
        }
        match split_field(&text) {
            Some((name, value)) => {
                fields.insert(s!(name.trim()), clean_field(value));
            }
            None => log::debug!("bio: no separator in {:?}", text.trim()),
        }
    }
    fields
}

/// First three `vc_label_units` spans: health, armor, shield.
pub fn locate_stats(doc: &Document) -> Result<Stats> {
    let mut values = [0u32; 3];
    let mut from = doc.root();

    for (found, slot) in values.iter_mut().enumerate() {
        let node = doc.find_next(from, is_stat_unit).ok_or_else(|| {
            ScrapeError::parse(Region::Stats, format!("expected 3 stat values, found {found}"))
        })?;
        let text = doc.text(node);
        let text = text.trim();
        *slot = text
            .parse()
            .map_err(|_| ScrapeError::parse(Region::Stats, format!("{text:?} is not a stat value")))?;
        from = node + 1;
    }

    let [health, armor, shield] = values;
    Ok(Stats { health, armor, shield })
}
