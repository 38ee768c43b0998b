//! Store configuration.

/// Storage key the board record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "project-dashboard-data";

/// Options controlling how a `BoardStore` loads and saves its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key of the single persisted record.
    pub storage_key: String,
    /// Load the sample seed when storage holds no usable record. When false an
    /// empty board is loaded instead.
    pub seed_when_empty: bool,
}

impl StoreConfig {
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_when_empty: true,
        }
    }
}
