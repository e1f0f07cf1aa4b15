use posture_core::errors::StoreError;

/// Outcome of inserting several assets at once. Each asset is inserted or
/// skipped independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchInsert {
    /// Names inserted, in input order.
    pub inserted: Vec<String>,
    /// Names rejected, with the reason, in input order.
    pub skipped: Vec<(String, StoreError)>,
}

impl BatchInsert {
    pub fn inserted_count(&self) -> usize {
        self.inserted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
