use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::{Address, B256};

use super::types::{GasPricing, PendingTransaction, Signature, Transaction};
use crate::codec::crypto::content_hash;
use crate::codec::rlp::{self, Item};
use crate::constants::EIP1559_TX_TYPE_ID;

/// Assembles canonical transaction payloads and finalized records for one
/// chain and one owning account, both fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct TransactionBuilder {
    chain_id: u64,
    address: Address,
}

impl TransactionBuilder {
    pub fn new(chain_id: u64, address: Address) -> Self {
        Self { chain_id, address }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Canonical byte payload for the given transaction.
    ///
    /// Without a signature this is the payload whose content hash the signer
    /// signs; with one it is the broadcastable form. The two calls differ
    /// only in the three appended signature fields.
    pub fn signing_payload(
        &self,
        tx: &PendingTransaction,
        signature: Option<&Signature>,
    ) -> Vec<u8> {
        Self::encode(tx, signature, self.chain_id)
    }

    /// Content hash of the unsigned payload, the digest handed to the signer.
    pub fn signing_hash(&self, tx: &PendingTransaction) -> B256 {
        content_hash(&self.signing_payload(tx, None))
    }

    /// Chain-parameterized form of [`Self::signing_payload`] for callers
    /// without a builder instance.
    ///
    /// The legacy sequence carries no chain identifier; replay protection
    /// for that scheme, if any, travels in the signature's `v` component and
    /// is the signer's responsibility. The EIP-1559 sequence leads with the
    /// chain identifier and carries an empty access-list placeholder.
    pub fn encode(tx: &PendingTransaction, signature: Option<&Signature>, chain_id: u64) -> Vec<u8> {
        let mut items: Vec<Item> = match tx.gas_pricing {
            GasPricing::Legacy { gas_price } => vec![
                tx.nonce.into(),
                gas_price.into(),
                tx.gas_limit.into(),
                tx.to.into(),
                tx.value.into(),
                tx.data.as_ref().into(),
            ],
            GasPricing::Eip1559 { max_fee_per_gas, max_priority_fee_per_gas } => vec![
                chain_id.into(),
                tx.nonce.into(),
                max_priority_fee_per_gas.into(),
                max_fee_per_gas.into(),
                tx.gas_limit.into(),
                tx.to.into(),
                tx.value.into(),
                tx.data.as_ref().into(),
                Item::List(Vec::new()),
            ],
        };

        if let Some(signature) = signature {
            items.push(signature.v.into());
            items.push(signature.r.into());
            items.push(signature.s.into());
        }

        let encoded = rlp::encode_list(&items);
        match tx.gas_pricing {
            GasPricing::Legacy { .. } => encoded,
            GasPricing::Eip1559 { .. } => {
                let mut out = Vec::with_capacity(encoded.len() + 1);
                out.push(EIP1559_TX_TYPE_ID);
                out.extend_from_slice(&encoded);
                out
            }
        }
    }

    /// Produces the finalized record for a signed transaction.
    ///
    /// The hash is the content hash of the signed payload and is independent
    /// of wall-clock time; only `timestamp` captures the moment of
    /// finalization.
    pub fn finalize(&self, tx: &PendingTransaction, signature: &Signature) -> Transaction {
        let hash = content_hash(&self.signing_payload(tx, Some(signature)));

        let (max_fee_per_gas, max_priority_fee_per_gas) = match tx.gas_pricing {
            GasPricing::Eip1559 { max_fee_per_gas, max_priority_fee_per_gas } => {
                (Some(max_fee_per_gas), Some(max_priority_fee_per_gas))
            }
            GasPricing::Legacy { .. } => (None, None),
        };

        Transaction {
            hash,
            timestamp: unix_timestamp(),
            is_failed: false,
            from: self.address,
            to: tx.to.to().copied(),
            value: tx.value,
            input: tx.data.clone(),
            nonce: tx.nonce,
            gas_price: tx.gas_pricing.max_fee(),
            max_fee_per_gas,
            max_priority_fee_per_gas,
            gas_limit: tx.gas_limit,
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}
