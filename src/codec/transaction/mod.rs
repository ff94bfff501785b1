// Transaction payload assembly and finalization.

pub mod builder;
pub mod types;

pub use builder::TransactionBuilder;
pub use types::{GasPricing, PendingTransaction, Signature, Transaction};
