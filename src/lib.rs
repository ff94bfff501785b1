//! Primitives for building, hashing, and classifying transactions on
//! Ethereum and EVM compatible blockchains.
//!
//! The codec assembles the canonical byte payloads that get signed and
//! broadcast, in both the legacy and the EIP-1559 gas pricing schemes, and
//! derives the content hash that identifies a transaction. On the read side,
//! the decorator classifies decoded transactions into their semantic effect
//! on an owned account, and a small JSON-RPC layer backs read-only token
//! balance queries.

#[macro_use]
extern crate serde_derive;

pub mod codec;
pub mod constants;
pub mod decorations;
pub mod errors;
pub mod rpc;

pub use codec::transaction::{
    GasPricing, PendingTransaction, Signature, Transaction, TransactionBuilder,
};
pub use decorations::{DecodedCall, EthereumDecorator, TransactionDecoration};
pub use errors::{EvmError, EvmResult};
pub use rpc::{Erc1155Provider, RpcSource};
