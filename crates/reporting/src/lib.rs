//! Reporting module (balance derivation over the movement ledger).
//!
//! Balances are not stored anywhere; they are derived on demand by folding
//! the ledger. The report is therefore disposable and always consistent with
//! the events that exist right now.

pub mod report;

pub use report::{StockRow, stock_report};
