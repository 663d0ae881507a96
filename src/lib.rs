// ============================================================================
// Cabinet Library
// ============================================================================
//
// In-memory client records keyed by a unique tax id, plus an owned text
// buffer. Both are plain values: cloning yields an independent copy and
// nothing is shared between instances.
//
// ============================================================================

pub mod config;
pub mod core;
pub mod prelude;
pub mod storage;
pub mod text;

// Re-export main types for convenience
pub use crate::config::{CabinetConfig, GrowthPolicy};
pub use crate::core::{CabinetError, ClientInfo, ClientRecord, Result, TaxId};
pub use crate::storage::Cabinet;
pub use crate::text::TextBuffer;
