//! Everything needed to work with a cabinet, for glob import.

pub use crate::config::{CabinetConfig, GrowthPolicy};
pub use crate::core::{CabinetError, ClientInfo, ClientRecord, Result, TaxId};
pub use crate::storage::Cabinet;
pub use crate::text::TextBuffer;
