/// EIP-2718 type id prefixed to the canonical EIP-1559 payload.
pub const EIP1559_TX_TYPE_ID: u8 = 0x02;

/// Method signature behind the token balance provider.
pub const ERC1155_BALANCE_OF_SIGNATURE: &str = "balanceOf(address,uint256)";

/// Block parameter used for read-only contract calls.
pub const DEFAULT_BLOCK_PARAMETER: &str = "latest";
