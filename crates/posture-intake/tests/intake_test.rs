use posture_core::errors::IntakeError;
use posture_core::models::Category;
use posture_core::traits::IAssetStore;
use posture_intake::{CrownRule, Intake, KeywordClassifier, KeywordRule};
use posture_store::AssetStore;

use proptest::prelude::*;

const SAMPLE_INVENTORY: &str = "\
HR 員工個資 SQL Database
林總經理的 iPad Pro
Cisco Catalyst 9200 核心交換器
AWS EC2 生產環境主機
外部廠商 VPN 帳號清單
Synology NAS 機房備份機
CrowdStrike Falcon (EDR)
";

fn classify(line: &str) -> (Category, bool) {
    let c = KeywordClassifier::default().classify(line);
    (c.category, c.is_crown_jewel)
}

// ── Default rules ─────────────────────────────────────────────────────────

#[test]
fn data_keywords_are_always_crown() {
    assert_eq!(classify("HR 員工個資 SQL Database"), (Category::Data, true));
    assert_eq!(classify("Customer DB replica"), (Category::Data, true));
}

#[test]
fn user_keywords_are_never_crown() {
    assert_eq!(classify("外部廠商 VPN 帳號清單"), (Category::User, false));
    assert_eq!(classify("Domain Admin accounts 核心"), (Category::User, false));
}

#[test]
fn network_crown_requires_core_marker() {
    assert_eq!(classify("Cisco Catalyst 9200 核心交換器"), (Category::Network, true));
    assert_eq!(classify("Guest WiFi"), (Category::Network, false));
}

#[test]
fn application_crown_requires_production_marker() {
    assert_eq!(classify("AWS EC2 生產環境主機"), (Category::Application, true));
    assert_eq!(classify("Slack workspace"), (Category::Application, false));
}

#[test]
fn unmatched_lines_fall_back_to_device() {
    let c = KeywordClassifier::default().classify("CrowdStrike Falcon (EDR)");
    assert_eq!(c.category, Category::Device);
    assert!(!c.is_crown_jewel);
    assert_eq!(c.rule_index, None);
}

#[test]
fn device_crown_markers() {
    assert_eq!(classify("Synology NAS 機房備份機"), (Category::Device, true));
    assert_eq!(classify("總經理 筆電"), (Category::Device, true));
}

#[test]
fn earlier_rule_wins_on_overlap() {
    // "database" (Data) and "admin" (User) both hit; Data is listed first.
    let c = KeywordClassifier::default().classify("database admin console");
    assert_eq!(c.category, Category::Data);
    assert_eq!(c.rule_index, Some(0));
}

#[test]
fn substring_match_is_naive() {
    // "iPad" contains "ad", which the User rule claims.
    assert_eq!(classify("林總經理的 iPad Pro"), (Category::User, false));
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify("ORACLE DATABASE"), classify("oracle database"));
}

#[test]
fn default_rules_are_ordered_by_priority() {
    let categories: Vec<Category> = KeywordClassifier::default()
        .rules()
        .iter()
        .map(|r| r.category)
        .collect();
    assert_eq!(
        categories,
        vec![Category::Data, Category::User, Category::Network, Category::Application]
    );
}

#[test]
fn intake_uses_supplied_classifier() {
    let classifier = KeywordClassifier::new(
        vec![KeywordRule::new(Category::Data, &["ledger"], CrownRule::Always)],
        KeywordRule::new(Category::Device, &[], CrownRule::Never),
    );
    let intake = Intake::new(classifier.clone());
    assert_eq!(intake.classifier(), &classifier);

    let proposed = intake.propose("General Ledger\nPrinter");
    assert_eq!(proposed[0].category, Category::Data);
    assert!(proposed[0].is_crown_jewel);
    assert_eq!(proposed[1].category, Category::Device);
}

#[test]
fn custom_rules_replace_defaults() {
    let classifier = KeywordClassifier::new(
        vec![KeywordRule::new(Category::Network, &["Firewall"], CrownRule::Always)],
        KeywordRule::new(Category::Application, &[], CrownRule::Never),
    );
    let fw = classifier.classify("edge firewall");
    assert_eq!((fw.category, fw.is_crown_jewel), (Category::Network, true));
    let other = classifier.classify("SQL server");
    assert_eq!((other.category, other.is_crown_jewel), (Category::Application, false));
}

// ── Import ────────────────────────────────────────────────────────────────

#[test]
fn import_sample_inventory() {
    let mut store = AssetStore::new();
    let summary = Intake::default().import_text(&mut store, SAMPLE_INVENTORY).unwrap();

    assert_eq!(summary.proposed.len(), 7);
    assert_eq!(summary.inserted.len(), 7);
    assert!(summary.skipped.is_empty());
    assert_eq!(store.asset_count(), 7);

    let nas = store.get_asset("Synology NAS 機房備份機").unwrap();
    assert_eq!(nas.category, Category::Device);
    assert!(nas.is_crown_jewel);
    assert_eq!(store.list_assets()[0].name, "HR 員工個資 SQL Database");
}

#[test]
fn import_trims_and_skips_blank_lines() {
    let mut store = AssetStore::new();
    let summary = Intake::default()
        .import_text(&mut store, "\n   Guest WiFi   \n\n\t\nSlack\n")
        .unwrap();
    assert_eq!(summary.inserted, vec!["Guest WiFi".to_string(), "Slack".to_string()]);
}

#[test]
fn duplicate_lines_keep_first_occurrence() {
    let mut store = AssetStore::new();
    let summary = Intake::default()
        .import_text(&mut store, "Guest WiFi\nSlack\nGuest WiFi\n")
        .unwrap();
    assert_eq!(summary.proposed.len(), 3);
    assert_eq!(summary.inserted.len(), 2);
    assert_eq!(summary.skipped, vec!["Guest WiFi".to_string()]);
}

#[test]
fn existing_assets_are_kept() {
    let mut store = AssetStore::new();
    store.add_asset("Guest WiFi", Category::Device, true).unwrap();

    let summary = Intake::default()
        .import_text(&mut store, "Guest WiFi\nSlack")
        .unwrap();
    assert_eq!(summary.skipped, vec!["Guest WiFi".to_string()]);

    let wifi = store.get_asset("Guest WiFi").unwrap();
    assert_eq!(wifi.category, Category::Device);
    assert!(wifi.is_crown_jewel);
}

#[test]
fn empty_input_is_rejected() {
    let mut store = AssetStore::new();
    let err = Intake::default().import_text(&mut store, "  \n\n ").unwrap_err();
    assert_eq!(err, IntakeError::EmptyInput);
    assert!(store.is_empty());
}

#[test]
fn propose_does_not_touch_store() {
    let proposed = Intake::default().propose(SAMPLE_INVENTORY);
    assert_eq!(proposed.len(), 7);
    assert_eq!(proposed[2].category, Category::Network);
}

#[test]
fn summary_serializes() {
    let mut store = AssetStore::new();
    let summary = Intake::default().import_text(&mut store, "Slack").unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["inserted"][0], "Slack");
    assert_eq!(json["proposed"][0]["category"], "application");
}

proptest! {
    #[test]
    fn every_line_gets_a_category(line in "[a-zA-Z0-9 ]{1,40}") {
        let c = KeywordClassifier::default().classify(&line);
        prop_assert!(Category::ALL.contains(&c.category));
        if c.category == Category::User {
            prop_assert!(!c.is_crown_jewel);
        }
        if c.category == Category::Data {
            prop_assert!(c.is_crown_jewel);
        }
    }

    #[test]
    fn import_inserts_unique_trimmed_lines(lines in prop::collection::vec("[a-z]{1,6}", 1..20)) {
        let mut store = AssetStore::new();
        let raw = lines.join("\n");
        let summary = Intake::default().import_text(&mut store, &raw).unwrap();
        let mut unique: Vec<&String> = Vec::new();
        for l in &lines {
            if !unique.contains(&l) {
                unique.push(l);
            }
        }
        prop_assert_eq!(summary.inserted.len(), unique.len());
        prop_assert_eq!(summary.inserted.len() + summary.skipped.len(), lines.len());
    }
}
