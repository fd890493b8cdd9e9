//! Content registries for the portfolio galleries.
//!
//! A registry is a static, in-memory list of content records with read-only
//! query helpers. Records are embedded at build time and never change during
//! a session; every query is a pure read over the original insertion order.

pub mod data;
pub mod record;

pub use record::{ContentKind, ContentRecord, VideoDetails};

/// Static list of content records with lookup helpers
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<ContentRecord>,
}

impl Registry {
    /// Create a registry over a fixed set of records
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    /// The built-in graphics project registry
    pub fn graphics() -> Self {
        Self::new(data::graphics_projects())
    }

    /// The built-in video project registry
    pub fn videos() -> Self {
        Self::new(data::video_projects())
    }

    /// All records, insertion order preserved
    pub fn all(&self) -> &[ContentRecord] {
        &self.records
    }

    /// First record whose id equals `id` exactly. No partial matching.
    pub fn by_id(&self, id: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in `category`, matched exactly (case-sensitive),
    /// preserving insertion order. Empty when none match.
    pub fn by_category(&self, category: &str) -> Vec<&ContentRecord> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }

    /// All records except the one matching `exclude_id`, truncated to the
    /// first `limit` in insertion order. No randomization or ranking.
    pub fn related(&self, exclude_id: &str, limit: usize) -> Vec<&ContentRecord> {
        self.records
            .iter()
            .filter(|record| record.id != exclude_id)
            .take(limit)
            .collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
