//! Semantic classification of decoded transactions against an owned account.

use alloy_primitives::{Address, U256};

/// Decoded method call attached to a transaction by the external ABI layer.
///
/// Classification only cares whether the call data was empty; everything
/// else is opaque beyond its selector and is left to other decorator
/// instances in the wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedCall {
    /// No call data beyond the bare value transfer.
    Empty,
    /// Any other decoded method, identified by its four-byte selector.
    Method { selector: [u8; 4] },
}

/// Internal call observed while executing a transaction. Produced by the
/// external trace decoder; accepted here only to mirror the decorator
/// interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternalTransaction {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// Event emitted by a contract during a transaction. Produced by the
/// external log decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractEventInstance {
    pub contract_address: Address,
}

/// Semantic effect of a transaction on the owned account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionDecoration {
    ContractCreation,
    Outgoing { to: Address, value: U256, sent_to_self: bool },
    Incoming { from: Address, value: U256 },
}

/// Classifies plain value transfers and contract creations for one owned
/// account. Stateless apart from that account; safe to share across tasks.
#[derive(Clone, Copy, Debug)]
pub struct EthereumDecorator {
    address: Address,
}

impl EthereumDecorator {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// First matching rule wins. Transactions carrying a non-empty decoded
    /// method are left for other decorator instances to classify.
    pub fn decoration(
        &self,
        from: Option<Address>,
        to: Option<Address>,
        value: Option<U256>,
        contract_method: Option<&DecodedCall>,
        _internal_transactions: &[InternalTransaction],
        _event_instances: &[ContractEventInstance],
    ) -> Option<TransactionDecoration> {
        let (from, value) = match (from, value) {
            (Some(from), Some(value)) => (from, value),
            _ => return None,
        };

        let Some(to) = to else {
            return Some(TransactionDecoration::ContractCreation);
        };

        match contract_method {
            None | Some(DecodedCall::Empty) => {}
            Some(DecodedCall::Method { .. }) => return None,
        }

        if from == self.address {
            return Some(TransactionDecoration::Outgoing {
                to,
                value,
                sent_to_self: to == self.address,
            });
        }

        if to == self.address {
            return Some(TransactionDecoration::Incoming { from, value });
        }

        None
    }
}
