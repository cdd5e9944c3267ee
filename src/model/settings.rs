use serde::{Deserialize, Serialize};

use crate::model::status::{Status, StatusRegistry};

/// Read-only settings snapshot consumed at toggle/explain time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Substring (usually a `#tag`) a line must contain to be treated as a
    /// task for done-date and recurrence purposes. Empty = no filter.
    #[serde(default)]
    pub global_filter: String,
    /// Query source conceptually prepended to every query block.
    #[serde(default)]
    pub global_query: String,
    /// Extra statuses registered on top of the built-in set.
    #[serde(default)]
    pub statuses: Vec<StatusEntry>,
}

/// One custom status in the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    pub symbol: char,
    pub name: String,
    pub next_status_symbol: char,
    #[serde(default)]
    pub is_done: bool,
}

impl Settings {
    /// Whether a task line passes the global filter.
    pub fn matches_global_filter(&self, line: &str) -> bool {
        self.global_filter.is_empty() || line.contains(&self.global_filter)
    }

    /// Build the status registry: defaults plus any configured statuses.
    pub fn status_registry(&self) -> StatusRegistry {
        let mut registry = StatusRegistry::default();
        for entry in &self.statuses {
            registry.add(Status::new(
                entry.symbol,
                &entry.name,
                entry.next_status_symbol,
                entry.is_done,
            ));
        }
        registry
    }
}
