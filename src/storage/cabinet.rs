use crate::config::{CabinetConfig, GrowthPolicy};
use crate::core::{CabinetError, ClientInfo, ClientRecord, Result, TaxId};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabinet of client records keyed by tax id.
///
/// Records are stored by value and owned exclusively by the cabinet. Every
/// stored record has a distinct tax id. Lookups are linear scans and the
/// storage order is not stable: removal moves the last record into the
/// freed slot.
///
/// # Examples
///
/// ```
/// use cabinet::Cabinet;
///
/// let mut cabinet = Cabinet::new();
/// cabinet.insert("Joao", 111).unwrap();
/// cabinet.insert("Maria", 222).unwrap();
/// cabinet.record_visit(111).unwrap();
///
/// assert_eq!(cabinet.listing(), "Joao / 111 / 1\nMaria / 222 / 0\n");
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<ClientRecord>", into = "Vec<ClientRecord>")]
pub struct Cabinet {
    config: CabinetConfig,
    records: Vec<ClientRecord>,
}

impl Cabinet {
    pub fn new() -> Self {
        Self::with_config(CabinetConfig::default())
    }

    pub fn with_config(config: CabinetConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Build a cabinet from existing records, failing on the first repeated
    /// tax id.
    pub fn try_from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientRecord>,
    {
        let mut cabinet = Self::new();
        for record in records {
            cabinet.push_unique(record)?;
        }
        Ok(cabinet)
    }

    pub fn config(&self) -> &CabinetConfig {
        &self.config
    }

    /// Add a new client with zero visits.
    ///
    /// Fails with [`CabinetError::DuplicateKey`] when the tax id is already
    /// stored; the cabinet is left untouched in that case.
    pub fn insert(&mut self, name: impl Into<String>, tax_id: TaxId) -> Result<()> {
        let name = name.into();
        if self.config.reject_empty_names && name.trim().is_empty() {
            debug!("Rejected client {} with empty name", tax_id);
            return Err(CabinetError::InvalidRecord(format!(
                "Client with tax id {} has an empty name",
                tax_id
            )));
        }

        self.push_unique(ClientRecord::new(name, tax_id))
    }

    /// Remove the client with this tax id.
    ///
    /// The last record takes the freed slot, so storage order changes.
    pub fn remove(&mut self, tax_id: TaxId) -> Result<()> {
        let Some(index) = self.position(tax_id) else {
            debug!("Remove: client {} not found", tax_id);
            return Err(CabinetError::NotFound(tax_id));
        };

        let removed = self.records.swap_remove(index);
        self.fit_storage();
        debug!("Removed client {} ({} left)", removed, self.records.len());
        Ok(())
    }

    /// Register a visit for this client and return the new visit count.
    pub fn record_visit(&mut self, tax_id: TaxId) -> Result<u64> {
        match self.records.iter_mut().find(|r| r.tax_id() == tax_id) {
            Some(record) => {
                record.record_visit();
                debug!("Visit recorded: {}", record);
                Ok(record.visit_count())
            }
            None => {
                debug!("Visit: client {} not found", tax_id);
                Err(CabinetError::NotFound(tax_id))
            }
        }
    }

    /// Name and visit count of a client, or `None` when absent.
    pub fn lookup(&self, tax_id: TaxId) -> Option<ClientInfo> {
        self.get(tax_id).map(ClientRecord::info)
    }

    /// Name and visit count of a client, or the empty `("", 0)` value when
    /// absent.
    pub fn lookup_or_empty(&self, tax_id: TaxId) -> ClientInfo {
        self.lookup(tax_id).unwrap_or_default()
    }

    pub fn get(&self, tax_id: TaxId) -> Option<&ClientRecord> {
        self.records.iter().find(|r| r.tax_id() == tax_id)
    }

    pub fn contains(&self, tax_id: TaxId) -> bool {
        self.position(tax_id).is_some()
    }

    /// Drop every record and release storage. Calling it on an empty
    /// cabinet does nothing.
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        match self.config.growth {
            GrowthPolicy::Exact => self.records = Vec::new(),
            GrowthPolicy::Amortized => self.records.clear(),
        }
        if dropped > 0 {
            debug!("Cleared {} clients", dropped);
        }
    }

    /// One `describe()` line per record, each terminated by `\n`, in
    /// current storage order. Empty cabinet gives an empty string.
    pub fn listing(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of stored records (same as [`Cabinet::len`]).
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocated slots. Equal to `len()` under [`GrowthPolicy::Exact`].
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClientRecord> {
        self.records.iter()
    }

    /// Serialize the records as a JSON array, in storage order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Rebuild a cabinet from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ClientRecord> = serde_json::from_str(json)?;
        Self::try_from_records(records)
    }

    fn position(&self, tax_id: TaxId) -> Option<usize> {
        self.records.iter().position(|r| r.tax_id() == tax_id)
    }

    fn push_unique(&mut self, record: ClientRecord) -> Result<()> {
        if self.contains(record.tax_id()) {
            debug!("Insert: duplicate tax id {}", record.tax_id());
            return Err(CabinetError::DuplicateKey(record.tax_id()));
        }

        if self.config.growth == GrowthPolicy::Exact {
            self.records.reserve_exact(1);
        }
        debug!("Inserted client {}", record);
        self.records.push(record);
        Ok(())
    }

    fn fit_storage(&mut self) {
        if self.config.growth == GrowthPolicy::Exact {
            self.records.shrink_to_fit();
        }
    }
}

impl Default for Cabinet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Cabinet {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            records: self.records.clone(),
        }
    }

    /// Release everything this cabinet owns, then copy the source.
    fn clone_from(&mut self, source: &Self) {
        self.records = Vec::new();
        self.config = source.config.clone();
        self.records = source.records.clone();
        debug!("Cabinet assigned from copy of {} clients", self.records.len());
    }
}

impl PartialEq for Cabinet {
    /// Same records in the same storage order.
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Cabinet {}

impl fmt::Display for Cabinet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Cabinet {
    type Item = &'a ClientRecord;
    type IntoIter = std::slice::Iter<'a, ClientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<ClientRecord>> for Cabinet {
    type Error = CabinetError;

    fn try_from(records: Vec<ClientRecord>) -> Result<Self> {
        Self::try_from_records(records)
    }
}

impl From<Cabinet> for Vec<ClientRecord> {
    fn from(cabinet: Cabinet) -> Self {
        cabinet.records
    }
}
