//! Call-data encoding facade over the alloy ABI stack.
//!
//! Callers hand over a human-readable method signature and an ordered
//! argument list; the result is selector-prefixed call data suitable as a
//! transaction's `data` field. Argument decoding lives elsewhere.

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::Function;

use crate::errors::CodecError;

/// Encodes a contract call against a signature such as
/// `balanceOf(address,uint256)`. Type and arity mismatches between the
/// signature and the supplied arguments are rejected.
pub fn encode_function_call(
    signature: &str,
    args: &[DynSolValue],
) -> Result<Vec<u8>, CodecError> {
    let function = Function::parse(signature).map_err(|e| CodecError::InvalidSignature {
        signature: signature.to_string(),
        reason: e.to_string(),
    })?;
    function.abi_encode_input(args).map_err(|e| CodecError::AbiEncoding(e.to_string()))
}

/// Four-byte selector of a method signature.
pub fn method_selector(signature: &str) -> Result<[u8; 4], CodecError> {
    let function = Function::parse(signature).map_err(|e| CodecError::InvalidSignature {
        signature: signature.to_string(),
        reason: e.to_string(),
    })?;
    Ok(function.selector().into())
}
