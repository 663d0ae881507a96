use super::record::TaxId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CabinetError {
    #[error("Client with tax id {0} already exists")]
    DuplicateKey(TaxId),

    #[error("Client with tax id {0} not found")]
    NotFound(TaxId),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CabinetError {
    /// True for the two key-presence outcomes (duplicate / absent).
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::DuplicateKey(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CabinetError>;

impl From<serde_json::Error> for CabinetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
