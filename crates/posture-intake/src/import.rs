//! Bulk text import into an AssetStore.

use serde::{Deserialize, Serialize};
use tracing::info;

use posture_core::errors::IntakeError;
use posture_core::models::Asset;
use posture_observability::intake_span;
use posture_store::AssetStore;

use crate::classifier::KeywordClassifier;

/// What an import proposed and what actually landed in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// One classified asset per input line, in input order.
    pub proposed: Vec<Asset>,
    /// Names added to the store.
    pub inserted: Vec<String>,
    /// Names dropped as duplicates of an existing or earlier line.
    pub skipped: Vec<String>,
}

/// Line-oriented importer backed by a keyword classifier.
#[derive(Debug, Clone, Default)]
pub struct Intake {
    classifier: KeywordClassifier,
}

impl Intake {
    pub fn new(classifier: KeywordClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    /// Classify each trimmed, non-empty line without touching any store.
    pub fn propose(&self, raw: &str) -> Vec<Asset> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let c = self.classifier.classify(line);
                Asset::new(line, c.category, c.is_crown_jewel)
            })
            .collect()
    }

    /// Classify and insert. Existing assets and the first of any repeated
    /// line win; later duplicates are skipped.
    pub fn import_text(
        &self,
        store: &mut AssetStore,
        raw: &str,
    ) -> Result<ImportSummary, IntakeError> {
        let proposed = self.propose(raw);
        if proposed.is_empty() {
            return Err(IntakeError::EmptyInput);
        }
        let _span = intake_span!(proposed.len()).entered();

        let batch = store.add_assets(proposed.iter().cloned());
        let summary = ImportSummary {
            proposed,
            inserted: batch.inserted,
            skipped: batch.skipped.into_iter().map(|(name, _)| name).collect(),
        };

        info!(
            inserted = summary.inserted.len(),
            skipped = summary.skipped.len(),
            "inventory imported"
        );
        Ok(summary)
    }
}
