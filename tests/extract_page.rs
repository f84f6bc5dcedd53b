// tests/extract_page.rs
use hero_scrape::core::Document;
use hero_scrape::specs::{abilities, hero};
use hero_scrape::store;
use hero_scrape::{Dataset, Region, ScrapeError};

const GENJI: &str = include_str!("fixtures/Genji.html");

#[test]
fn full_page_extracts_every_region() {
    let doc = Document::parse(GENJI);
    let rec = hero::extract(&doc).unwrap();

    assert_eq!(rec.hero_type, "Damage");
    assert_eq!((rec.health, rec.armor, rec.shield), (200, 0, 0));

    assert_eq!(rec.bio.len(), 5);
    assert_eq!(rec.bio["Real Name"], "Genji Shimada");
    assert_eq!(rec.bio["Age"], "35");
    assert_eq!(rec.bio["Base of Operations"], "Shambali Monastery, Nepal");
    assert_eq!(rec.bio["Affiliation"], "Shimada Clan(formerly)");

    let names: Vec<&str> = rec.abilities.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["Deflect", "Dragonblade", "Primary fire", "Secondary fire", "Shuriken", "Swift Strike"]
    );

    let shuriken = &rec.abilities["Shuriken"];
    assert_eq!(shuriken.description, None);
    assert_eq!(shuriken.attributes["Ammo"], "24");
    assert_eq!(shuriken.attributes["Reload"], "1.5s");

    let primary = &rec.abilities["Primary fire"];
    assert_eq!(primary.description.as_deref(), Some("Throws three shuriken in a line."));
    assert_eq!(primary.attributes["Damage"], "28 per shuriken");

    let secondary = &rec.abilities["Secondary fire"];
    assert_eq!(secondary.description.as_deref(), Some("Throws three shuriken in a fan."));

    let blade = &rec.abilities["Dragonblade"];
    assert_eq!(blade.attributes["Ultimate charge"], "1680 points");
    assert_eq!(blade.attributes["Duration"], "6s");
    assert_eq!(
        blade.description.as_deref(),
        Some("Genjis katana is unsheathed for a short time.")
    );
}

#[test]
fn ability_boxes_come_in_document_order() {
    let doc = Document::parse(GENJI);
    let (bio, _) = hero::locate_bio(&doc).unwrap();
    let wrapper = abilities::find_ability_wrapper(&doc, bio).unwrap();

    let boxes = abilities::ability_boxes(&doc, wrapper);
    let firsts: Vec<&str> = boxes.iter().map(|b| b.lines().next().unwrap()).collect();
    assert_eq!(firsts, vec!["Shuriken", "Swift Strike", "Deflect", "Dragonblade"]);

    let blocks: Vec<String> = boxes.iter().flat_map(|b| abilities::segment(b)).collect();
    assert_eq!(blocks.len(), 6);
    assert_eq!(blocks[0], "Shuriken\nAmmo: 24\nReload: 1.5s");
}

#[test]
fn extraction_is_idempotent() {
    let first = hero::extract(&Document::parse(GENJI)).unwrap();
    let second = hero::extract(&Document::parse(GENJI)).unwrap();
    assert_eq!(first, second);

    let mut a = Dataset::new();
    a.insert("Genji".into(), first);
    let mut b = Dataset::new();
    b.insert("Genji".into(), second);
    assert_eq!(store::to_json(&a).unwrap(), store::to_json(&b).unwrap());
}

#[test]
fn json_shape_matches_output_contract() {
    let rec = hero::extract(&Document::parse(GENJI)).unwrap();
    let v = serde_json::to_value(&rec).unwrap();

    assert!(v["health"].is_u64());
    assert!(v["type"].is_string());
    assert!(v["bio"].is_object());
    assert_eq!(v["abilities"]["Deflect"]["Cooldown"], "8s");
    assert_eq!(v["abilities"]["Deflect"]["description"], "Reflects incoming projectiles.");
    assert!(v["abilities"]["Shuriken"].get("description").is_none());
}

#[test]
fn layout_drift_is_reported_not_guessed() {
    let no_type = GENJI.replace("font-size: 18px;", "font-size: 20px;");
    let err = hero::extract(&Document::parse(&no_type)).unwrap_err();
    assert!(matches!(err, ScrapeError::RegionNotFound(Region::Type)));

    let no_stats = GENJI.replace("vc_label_units", "vc_label_value");
    let err = hero::extract(&Document::parse(&no_stats)).unwrap_err();
    assert_eq!(err.kind(), "ParseError");

    // decoy present, real ability row gone
    let cut = GENJI.rfind("<div class=\"vc_row").unwrap();
    let truncated = format!("{}</body></html>", &GENJI[..cut]);
    let err = hero::extract(&Document::parse(&truncated)).unwrap_err();
    assert!(matches!(err, ScrapeError::RegionNotFound(Region::AbilityWrapper)));
}

#[test]
fn bio_heading_fallback_on_full_page() {
    // Drop the style marker; the "Bio" heading path must land on the same block.
    let page = GENJI
        .replace("<h3><strong>Bio</strong></h3>\n<div style=\"line-height: 20px;\">",
                 "<h3><strong>Bio</strong></h3>\n<div class=\"bio-outer\">\n<div class=\"bio\">")
        .replace("Shimada Clan&nbsp;(formerly)</p>\n</div>", "Shimada Clan&nbsp;(formerly)</p>\n</div></div>");
    assert_ne!(page, GENJI);

    let doc = Document::parse(&page);
    let (node, bio) = hero::locate_bio(&doc).unwrap();
    assert!(doc.element(node).unwrap().has_class("bio"));
    assert_eq!(bio["Occupation"], "Adventurer");
}
