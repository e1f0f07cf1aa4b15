use posture_core::config::RecommendationConfig;
use posture_core::models::{CellAddress, Category, CellStatus, Function};
use posture_core::traits::IVendorCatalog;
use posture_risk::{RecommendationDeriver, RecommendationReport, RiskEngine, VendorCatalog};
use posture_store::AssetStore;

fn flagged_store() -> AssetStore {
    let mut store = AssetStore::new();
    store.add_asset("Core switch", Category::Network, true).unwrap();
    store.add_asset("ERP", Category::Application, false).unwrap();
    store.add_asset("Laptop", Category::Device, false).unwrap();
    store.set_score("Core switch", Function::Identify, 2).unwrap();
    store.set_score("ERP", Function::Detect, 1).unwrap();
    store.set_score("Laptop", Function::Identify, 2).unwrap();
    store.set_score("Laptop", Function::Protect, 4).unwrap();
    store
}

// --- Catalog ---

#[test]
fn builtin_catalog_covers_every_cell() {
    let catalog = VendorCatalog::builtin();
    assert_eq!(catalog.len(), 25);
    for cell in CellAddress::grid() {
        assert!(!catalog.vendors(cell).is_empty(), "no vendors for {cell}");
    }
    let device_identify =
        catalog.vendors(CellAddress::new(Category::Device, Function::Identify));
    assert_eq!(device_identify.len(), 6);
    assert_eq!(device_identify[0], "一休資訊");
}

#[test]
fn catalog_loads_from_json() {
    let json = test_fixtures::load_fixture_text("catalogs/vendor_catalog.json");
    let catalog = VendorCatalog::from_json(&json).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.vendors(CellAddress::new(Category::Device, Function::Respond)),
        ["Golf".to_string(), "Hotel".to_string()]
    );
    assert!(catalog
        .vendors(CellAddress::new(Category::User, Function::Recover))
        .is_empty());
}

#[test]
fn malformed_catalog_is_rejected() {
    assert!(VendorCatalog::from_json("{ not json").is_err());
    let unknown_category = r#"[{"category":"cloud","function":"identify","vendors":[]}]"#;
    assert!(VendorCatalog::from_json(unknown_category).is_err());
}

// --- derive ---

#[test]
fn derive_lists_flagged_cells_in_grid_order() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let catalog = VendorCatalog::builtin();
    let recs = RecommendationDeriver::default().derive(&map, Some(&catalog));

    let cells: Vec<(Category, Function, CellStatus)> = recs
        .iter()
        .map(|r| (r.category, r.function, r.status))
        .collect();
    assert_eq!(
        cells,
        vec![
            (Category::Device, Function::Identify, CellStatus::Tier2),
            (Category::Application, Function::Detect, CellStatus::Tier1),
            (Category::Network, Function::Identify, CellStatus::CrownRisk),
        ]
    );
}

#[test]
fn preview_is_capped_and_marks_truncation() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let catalog = VendorCatalog::builtin();
    let deriver = RecommendationDeriver::default();
    let recs = deriver.derive(&map, Some(&catalog));

    // Device/Identify has six vendors; default preview is four.
    let device = &recs[0];
    assert_eq!(device.vendor_preview.len(), 4);
    assert!(device.truncated);
    assert_eq!(
        device.vendor_summary(deriver.config()),
        "一休資訊, 台達電子, 思邦科技, 瑞恩資訊..."
    );

    // Application/Detect has two vendors: shown in full.
    let app = &recs[1];
    assert_eq!(app.vendor_preview, vec!["安碁資訊", "鼎原科技"]);
    assert!(!app.truncated);
}

#[test]
fn preview_limit_follows_config() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let catalog = VendorCatalog::builtin();
    let deriver = RecommendationDeriver::new(RecommendationConfig {
        preview_limit: 6,
        ..Default::default()
    });
    let recs = deriver.derive(&map, Some(&catalog));
    assert_eq!(recs[0].vendor_preview.len(), 6);
    assert!(!recs[0].truncated);
}

#[test]
fn missing_catalog_yields_empty_previews() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let deriver = RecommendationDeriver::default();

    let recs = deriver.derive(&map, None);
    assert_eq!(recs.len(), 3);
    for rec in &recs {
        assert!(rec.vendor_preview.is_empty());
        assert!(!rec.truncated);
        assert_eq!(rec.vendor_summary(deriver.config()), "No matching vendors");
    }

    let empty = VendorCatalog::empty();
    assert_eq!(deriver.derive(&map, Some(&empty)), recs);
}

#[test]
fn labels_follow_status() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let recs = RecommendationDeriver::default().derive(&map, None);
    assert!(recs[0].label.contains("Tier 2"));
    assert!(recs[1].label.contains("Tier 1"));
    assert!(recs[2].label.contains("Crown risk"));
    assert!(recs.iter().all(|r| !r.diagnosis.is_empty()));
}

// --- report ---

#[test]
fn report_on_empty_store_is_no_data() {
    let store = AssetStore::new();
    let map = RiskEngine::heat_map(&store);
    let report = RecommendationDeriver::default().report(&store, &map, None);
    assert_eq!(report, RecommendationReport::NoData);
    assert!(report.recommendations().is_empty());
}

#[test]
fn report_without_flags_is_healthy() {
    let mut store = AssetStore::new();
    store.add_asset("NAS", Category::Device, true).unwrap();
    store.set_score("NAS", Function::Protect, 3).unwrap();
    let map = RiskEngine::heat_map(&store);
    let report = RecommendationDeriver::default().report(&store, &map, None);
    assert_eq!(report, RecommendationReport::Healthy);
}

#[test]
fn unscored_inventory_is_healthy_not_no_data() {
    let mut store = AssetStore::new();
    store.add_asset("NAS", Category::Device, false).unwrap();
    let map = RiskEngine::heat_map(&store);
    let report = RecommendationDeriver::default().report(&store, &map, None);
    assert_eq!(report, RecommendationReport::Healthy);
}

#[test]
fn report_with_flags_lists_findings() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let catalog = VendorCatalog::builtin();
    let report = RecommendationDeriver::default().report(&store, &map, Some(&catalog));
    assert_eq!(report.recommendations().len(), 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"], "findings");
    assert_eq!(json["recommendations"][2]["status"], "crown_risk");
}

// --- lookup link ---

#[test]
fn findings_carry_default_lookup_url() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let deriver = RecommendationDeriver::default();
    let recs = deriver.derive(&map, None);
    let expected = "https://secpaas.org.tw/W_SecDocProduct";
    assert!(recs.iter().all(|r| r.lookup_url.as_deref() == Some(expected)));
    assert_eq!(deriver.lookup_url(), Some(expected));
}

#[test]
fn empty_lookup_url_disables_link() {
    let store = flagged_store();
    let map = RiskEngine::heat_map(&store);
    let deriver = RecommendationDeriver::new(RecommendationConfig {
        lookup_url: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(deriver.lookup_url(), None);
    assert!(deriver.derive(&map, None).iter().all(|r| r.lookup_url.is_none()));
}

#[test]
fn healthy_outcome_still_offers_lookup_url() {
    let mut store = AssetStore::new();
    store.add_asset("NAS", Category::Device, false).unwrap();
    store.set_score("NAS", Function::Detect, 4).unwrap();
    let map = RiskEngine::heat_map(&store);
    let deriver = RecommendationDeriver::default();
    assert_eq!(deriver.report(&store, &map, None), RecommendationReport::Healthy);
    assert!(deriver.lookup_url().is_some());
}
