// src/specs/abilities.rs
//
// Ability list of a hero page.
//
// Layout (as served):
//   <bio block/>
//   <div><div class="wpb_wrapper"></div></div>          ← empty decoy
//   <div><div class="wpb_wrapper">                      ← real list
//       <div>ability box</div> <div>ability box</div> …
//
// An ability box may fuse a signature ability with its "Primary fire" and
// "Secondary fire" modes into one text run; `segment` splits those apart.

use std::collections::BTreeMap;

use crate::config::consts::{PRIMARY_FIRE, SECONDARY_FIRE, WRAPPER_CLASS};
use crate::core::sanitize::{clean_field, split_field};
use crate::core::{Document, NodeId};
use crate::data::AbilityRecord;
use crate::error::{Region, Result, ScrapeError};

pub type Abilities = BTreeMap<String, AbilityRecord>;

/// All abilities below the wrapper that follows `bio`.
/// Later blocks with the same name replace earlier ones.
pub fn extract(doc: &Document, bio: NodeId) -> Result<Abilities> {
    let wrapper = find_ability_wrapper(doc, bio)?;

    let mut out = Abilities::new();
    for raw in ability_boxes(doc, wrapper) {
        for block in segment(&raw) {
            let (name, record) = parse_ability(&block)?;
            out.insert(name, record);
        }
    }
    Ok(out)
}

/// Element whose first `div` descendant carries `wpb_wrapper` as its first class.
fn holds_wrapper(doc: &Document, id: NodeId) -> bool {
    if !doc.is_element(id) {
        return false;
    }
    doc.find_descendant(id, |d, n| d.is_tag(n, "div"))
        .and_then(|div| doc.element(div)?.classes().next())
        == Some(WRAPPER_CLASS)
}

/// Walk forward from the end of the bio block; the first wrapper holder is
/// the decoy, the second one is returned.
pub fn find_ability_wrapper(doc: &Document, bio: NodeId) -> Result<NodeId> {
    let missing = || ScrapeError::RegionNotFound(Region::AbilityWrapper);

    let start = doc.following(bio).ok_or_else(missing)?;
    let decoy = doc.find_next(start, holds_wrapper).ok_or_else(missing)?;
    let wrapper = doc.find_next(decoy + 1, holds_wrapper).ok_or_else(missing)?;

    log::debug!("ability wrapper at node {wrapper} (decoy at {decoy})");
    Ok(wrapper)
}

/// Raw text of every ability box under `wrapper`, in document order.
/// Boxes are the non-blank children of the wrapper's element children.
pub fn ability_boxes(doc: &Document, wrapper: NodeId) -> Vec<String> {
    let mut boxes = Vec::new();
    for &group in doc.children(wrapper) {
        if !doc.is_element(group) {
            continue;
        }
        for &item in doc.children(group) {
            let text = doc.text(item);
            if !text.trim().is_empty() {
                boxes.push(text);
            }
        }
    }
    boxes
}

/// Split one ability box into ability blocks.
///
/// Double newlines are removed and the text trimmed first. Then:
/// - no "Primary fire": one block;
/// - "Primary fire" at `p`: `[..p]`, `[p..]`;
/// - plus "Secondary fire" at `s > p`: `[..p]`, `[p..s]`, `[s..]`.
///
/// Each block is trimmed.
pub fn segment(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\n\n", "");
    let text = normalized.trim();

    let Some(p) = text.find(PRIMARY_FIRE) else {
        return vec![s!(text)];
    };

    let mut cuts = vec![0, p];
    if let Some(rel) = text[p..].find(SECONDARY_FIRE) {
        cuts.push(p + rel);
    }
    cuts.push(text.len());

    cuts.windows(2)
        .map(|w| s!(text[w[0]..w[1]].trim()))
        .collect()
}

/// First line is the name. Other lines: `key: value` → attribute,
/// anything else → description (last one wins). A `description: x` line
/// sets the description.
pub fn parse_ability(block: &str) -> Result<(String, AbilityRecord)> {
    let mut lines = block.split('\n');
    let name = clean_field(lines.next().unwrap_or(""));
    if name.is_empty() {
        let head: String = block.chars().take(40).collect();
        return Err(ScrapeError::parse(Region::Ability, format!("empty ability name in {head:?}")));
    }

    let mut record = AbilityRecord::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match split_field(line) {
            // would collide with the description field once flattened
            Some((key, value)) if clean_field(key) == "description" => {
                record.description = Some(clean_field(value));
            }
            Some((key, value)) => {
                record.attributes.insert(clean_field(key), clean_field(value));
            }
            None => record.description = Some(clean_field(line)),
        }
    }
    Ok((name, record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id(doc: &Document, id: &str) -> NodeId {
        doc.find(|d, n| d.element(n).and_then(|e| e.attr("id")) == Some(id))
            .unwrap()
    }

    #[test]
    fn segment_without_markers_is_one_block() {
        for raw in [
            "Biotic Grenade\nCooldown: 10s",
            "  Sleep Dart\n\nCooldown: 12s\n",
            "Nano Boost",
            "Secondary fire\nDamage: 10",
        ] {
            let blocks = segment(raw);
            assert_eq!(blocks.len(), 1, "{raw:?}");
            assert_eq!(blocks[0], raw.replace("\n\n", "").trim());
        }
    }

    #[test]
    fn segment_splits_primary_and_secondary() {
        let raw = "Deflect\nCooldown: 8s\nPrimary fire\nDamage: 50\nSecondary fire\nDamage: 120";
        assert_eq!(
            segment(raw),
            vec!["Deflect\nCooldown: 8s", "Primary fire\nDamage: 50", "Secondary fire\nDamage: 120"]
        );
    }

    #[test]
    fn segment_primary_only() {
        let raw = "Fusion Cannons\nPrimary fire\nDamage: 2-11\n";
        assert_eq!(segment(raw), vec!["Fusion Cannons", "Primary fire\nDamage: 2-11"]);
    }

    #[test]
    fn segment_ignores_secondary_before_primary() {
        let raw = "Mode\nSecondary fire note\nPrimary fire\nAmmo: 30";
        assert_eq!(
            segment(raw),
            vec!["Mode\nSecondary fire note", "Primary fire\nAmmo: 30"]
        );
    }

    #[test]
    fn segment_drops_double_newlines() {
        assert_eq!(segment("Heal\n\nAmount: 50"), vec!["HealAmount: 50"]);
        assert_eq!(segment("A\n\n\nB"), vec!["A\nB"]);
    }

    #[test]
    fn parse_ability_last_description_wins() {
        let (name, rec) = parse_ability("Deflect\nCooldown: 8s\nBlocks damage").unwrap();
        assert_eq!(name, "Deflect");
        assert_eq!(rec.attributes, map! { "Cooldown" => "8s" });
        assert_eq!(rec.description.as_deref(), Some("Blocks damage"));

        let (_, rec) = parse_ability("X\nfirst\nKey: v\nsecond").unwrap();
        assert_eq!(rec.description.as_deref(), Some("second"));
    }

    #[test]
    fn parse_ability_name_only_still_makes_a_record() {
        let (name, rec) = parse_ability("Nano Boost").unwrap();
        assert_eq!(name, "Nano Boost");
        assert_eq!(rec, AbilityRecord::default());
    }

    #[test]
    fn parse_ability_sanitizes_and_splits_first_colon() {
        let (_, rec) = parse_ability("Dash\nDuration\u{a0}: 1:30\n\n  \nRange: 15\u{2009}m").unwrap();
        assert_eq!(rec.attributes, map! { "Duration" => "1:30", "Range" => "15m" });
        assert_eq!(rec.description, None);
    }

    #[test]
    fn parse_ability_description_key_is_not_an_attribute() {
        let (_, rec) = parse_ability("Guard\ndescription: Raises a shield\nHealth: 600").unwrap();
        assert_eq!(rec.description.as_deref(), Some("Raises a shield"));
        assert_eq!(rec.attributes, map! { "Health" => "600" });

        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json.matches("\"description\"").count(), 1);
        let back: AbilityRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn parse_ability_later_key_overwrites() {
        let (_, rec) = parse_ability("Shot\nDamage: 1\nDamage: 2").unwrap();
        assert_eq!(rec.attributes, map! { "Damage" => "2" });
    }

    #[test]
    fn parse_ability_empty_name_is_parse_error() {
        for block in ["", "\nCooldown: 8s", "\u{a0}  \nx"] {
            let err = parse_ability(block).unwrap_err();
            assert_eq!(err.kind(), "ParseError", "{block:?}");
        }
    }

    #[test]
    fn wrapper_finder_skips_exactly_one_decoy() {
        let doc = Document::parse(concat!(
            "<html><body>",
            "<div id=\"bio\"><p>Age: 1</p></div>",
            "<div id=\"decoy\"><div class=\"wpb_wrapper\"><span>x</span></div></div>",
            "<hr>",
            "<div id=\"real\"><div class=\"wpb_wrapper vc_column\"><div><p>A</p></div></div></div>",
            "</body></html>",
        ));
        let bio = by_id(&doc, "bio");
        let decoy = by_id(&doc, "decoy");
        let real = by_id(&doc, "real");
        assert_eq!(real, decoy + 5);

        assert_eq!(find_ability_wrapper(&doc, bio).unwrap(), real);
    }

    #[test]
    fn wrapper_finder_needs_two_holders() {
        let doc = Document::parse(concat!(
            "<div id=\"bio\"><p>Age: 1</p></div>",
            "<div><div class=\"wpb_wrapper\"><p>only one</p></div></div>",
            "<div><div class=\"other\"></div></div>",
        ));
        let bio = by_id(&doc, "bio");
        let err = find_ability_wrapper(&doc, bio).unwrap_err();
        assert!(matches!(err, ScrapeError::RegionNotFound(Region::AbilityWrapper)));
    }

    #[test]
    fn wrapper_class_must_come_first() {
        let doc = Document::parse(concat!(
            "<div id=\"bio\"></div>",
            "<div><div class=\"wpb_wrapper\"></div></div>",
            "<div><div class=\"vc_column wpb_wrapper\"></div></div>",
        ));
        let bio = by_id(&doc, "bio");
        assert!(find_ability_wrapper(&doc, bio).is_err());
    }

    #[test]
    fn boxes_and_extract() {
        let doc = Document::parse(concat!(
            "<div id=\"bio\"></div>",
            "<div><div class=\"wpb_wrapper\"></div></div>",
            "<div><div class=\"wpb_wrapper\">",
            "<div>Biotic Rifle\nDamage: 70\nHeals allies</div>",
            "<div>   </div>",
            "<div>Deflect\nCooldown: 8s\nPrimary fire\nDamage: 50\nSecondary fire\nDamage: 120</div>",
            "</div></div>",
        ));
        let bio = by_id(&doc, "bio");
        let wrapper = find_ability_wrapper(&doc, bio).unwrap();
        let boxes = ability_boxes(&doc, wrapper);
        assert_eq!(boxes.len(), 2);
        assert!(boxes[0].starts_with("Biotic Rifle"));

        let abilities = extract(&doc, bio).unwrap();
        let names: Vec<&str> = abilities.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Biotic Rifle", "Deflect", "Primary fire", "Secondary fire"]);
        assert_eq!(abilities["Biotic Rifle"].description.as_deref(), Some("Heals allies"));
        assert_eq!(abilities["Secondary fire"].attributes, map! { "Damage" => "120" });
    }
}
