// Canonical encoding, hashing, and payload assembly.

pub mod abi;
pub mod crypto;
pub mod rlp;
pub mod transaction;

#[cfg(test)]
mod tests;

pub use transaction::{GasPricing, PendingTransaction, Signature, Transaction, TransactionBuilder};
