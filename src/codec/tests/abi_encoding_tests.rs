use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{address, U256};

use crate::codec::abi::{encode_function_call, method_selector};
use crate::constants::ERC1155_BALANCE_OF_SIGNATURE;
use crate::errors::CodecError;

#[test]
fn balance_of_selector_is_stable() {
    assert_eq!(
        method_selector(ERC1155_BALANCE_OF_SIGNATURE).unwrap(),
        [0x00, 0xfd, 0xd5, 0x8e]
    );
}

#[test]
fn balance_of_call_data_layout() {
    let owner = address!("d3e8763675e4c425df46cc3b5c0f6cbdac396046");
    let call_data = encode_function_call(
        ERC1155_BALANCE_OF_SIGNATURE,
        &[DynSolValue::Address(owner), DynSolValue::Uint(U256::from(5), 256)],
    )
    .unwrap();

    // selector plus two 32-byte words
    assert_eq!(call_data.len(), 4 + 64);
    assert_eq!(&call_data[..4], &[0x00, 0xfd, 0xd5, 0x8e]);
    // address argument is left-padded into its word
    assert_eq!(&call_data[4..16], &[0u8; 12]);
    assert_eq!(&call_data[16..36], owner.as_slice());
    // token id occupies the final word
    assert_eq!(call_data[4 + 63], 5);
}

#[test]
fn malformed_signatures_are_rejected() {
    let result = method_selector("balanceOf(address,");
    assert!(matches!(result, Err(CodecError::InvalidSignature { .. })));
}

#[test]
fn argument_arity_mismatches_are_rejected() {
    let owner = address!("d3e8763675e4c425df46cc3b5c0f6cbdac396046");
    let result =
        encode_function_call(ERC1155_BALANCE_OF_SIGNATURE, &[DynSolValue::Address(owner)]);
    assert!(matches!(result, Err(CodecError::AbiEncoding(_))));
}
