use alloy_primitives::{Address, Bytes, TxKind, B256, U256};

/// Gas pricing scheme for a transaction.
///
/// Exactly one scheme applies per transaction; the active variant determines
/// the canonical encoding shape and which fee fields survive into the
/// finalized record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasPricing {
    Legacy {
        gas_price: u128,
    },
    Eip1559 {
        max_fee_per_gas: u128,
        max_priority_fee_per_gas: u128,
    },
}

impl GasPricing {
    /// The scheme's primary fee field: the fixed gas price for legacy
    /// transactions, the fee ceiling for EIP-1559 ones.
    pub fn max_fee(&self) -> u128 {
        match self {
            GasPricing::Legacy { gas_price } => *gas_price,
            GasPricing::Eip1559 { max_fee_per_gas, .. } => *max_fee_per_gas,
        }
    }
}

/// A transaction request awaiting signature.
///
/// `TxKind::Create` leaves the recipient slot empty, which marks a contract
/// creation transaction on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransaction {
    pub nonce: u64,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub data: Bytes,
    pub gas_pricing: GasPricing,
}

/// An ECDSA signature over a signing payload. All three components travel
/// together; a partially populated signature is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

/// A signed transaction as recorded by the wallet.
///
/// `is_failed` starts out false and is only ever flipped by the external
/// chain-state reconciliation, never here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: B256,
    pub timestamp: u64,
    pub is_failed: bool,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub input: Bytes,
    pub nonce: u64,
    pub gas_price: u128,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub gas_limit: u64,
}
