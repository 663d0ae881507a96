use serde::{Deserialize, Serialize};
use std::fmt;

/// Client tax identifier. Uniqueness is enforced by the owning cabinet,
/// not by the record itself.
pub type TaxId = i64;

/// A single client entry.
///
/// `name` and `tax_id` are fixed at construction. `visit_count` starts at
/// zero and only moves through [`ClientRecord::record_visit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    name: String,
    tax_id: TaxId,
    visit_count: u64,
}

impl ClientRecord {
    pub fn new(name: impl Into<String>, tax_id: TaxId) -> Self {
        Self {
            name: name.into(),
            tax_id,
            visit_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> TaxId {
        self.tax_id
    }

    pub fn visit_count(&self) -> u64 {
        self.visit_count
    }

    /// Count one more visit.
    pub fn record_visit(&mut self) {
        self.visit_count = self.visit_count.saturating_add(1);
    }

    /// Render as `"<name> / <tax_id> / <visit_count>"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Copy out the name and visit counter.
    pub fn info(&self) -> ClientInfo {
        ClientInfo {
            name: self.name.clone(),
            visit_count: self.visit_count,
        }
    }
}

impl fmt::Display for ClientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.name, self.tax_id, self.visit_count)
    }
}

/// Name and visit counter of a client, returned by value from lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub visit_count: u64,
}

impl ClientInfo {
    /// The `("", 0)` value handed out when a lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.visit_count == 0
    }
}
