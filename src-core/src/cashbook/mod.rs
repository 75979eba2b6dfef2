//! Cash-book table: transaction rows, month keys and the spreadsheet loader.

mod cashbook_loader;
mod cashbook_model;
mod errors;
mod month_key;

pub use cashbook_loader::{load, load_with_mapping, ColumnMapping};
pub use cashbook_model::{Cashbook, Transaction};
pub use errors::LoadError;
pub use month_key::MonthKey;
