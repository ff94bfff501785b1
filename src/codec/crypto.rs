use alloy_primitives::{keccak256, B256};

/// Keccak-256 digest of a canonical transaction payload.
///
/// The digest doubles as the transaction identifier once a signature is
/// included in the payload.
pub fn content_hash(payload: &[u8]) -> B256 {
    keccak256(payload)
}
