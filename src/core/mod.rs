pub mod error;
pub mod record;

pub use error::{CabinetError, Result};
pub use record::{ClientInfo, ClientRecord, TaxId};
