//! Test fixture loader for Posture golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use posture_core::models::{Asset, Category, CellStatus, Function};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(read) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = read
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

// --- Golden scenario types ---

/// A raw score as recorded by the UI; may be out of range on purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreInput {
    pub asset_name: String,
    pub function: Function,
    pub tier: u8,
}

/// Expected status of one cell.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCell {
    pub category: Category,
    pub function: Function,
    pub status: CellStatus,
}

/// One golden scenario: an inventory, its scores, and the expected cells.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub scores: Vec<ScoreInput>,
    pub expected: Vec<ExpectedCell>,
    /// Expected flagged cells in grid order, when the scenario checks them.
    #[serde(default)]
    pub expected_flagged: Option<Vec<(Category, Function)>>,
}

/// Load every golden scenario under `golden/`.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .iter()
        .flat_map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            load_fixture::<Vec<GoldenScenario>>(&format!("golden/{name}"))
        })
        .collect()
}
