//! Provider construction and the token balance query built on top of it.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{hex, Address, U256};
use serde_json::{json, Value as JsonValue};

use super::HttpRpcClient;
use crate::codec::abi::encode_function_call;
use crate::constants::{DEFAULT_BLOCK_PARAMETER, ERC1155_BALANCE_OF_SIGNATURE};
use crate::errors::{EvmResult, ProviderError, RpcError};

/// Network endpoint configuration. Selected once at provider construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RpcSource {
    Http { urls: Vec<String>, auth: Option<String> },
    WebSocket { url: String },
}

impl RpcSource {
    pub fn http(url: &str) -> Self {
        RpcSource::Http { urls: vec![url.to_string()], auth: None }
    }
}

/// Read-only ERC-1155 balance queries over JSON-RPC.
#[derive(Clone, Debug)]
pub struct Erc1155Provider {
    client: HttpRpcClient,
}

impl Erc1155Provider {
    /// Builds a provider for the configured source. Only the HTTP transport
    /// is implemented; a streaming source fails here, once, rather than on
    /// every call.
    pub fn new(source: RpcSource) -> Result<Self, ProviderError> {
        match source {
            RpcSource::Http { urls, auth } => {
                let url = urls.first().ok_or(ProviderError::MissingEndpoint)?;
                let client = HttpRpcClient::new(url, auth)?;
                Ok(Self { client })
            }
            RpcSource::WebSocket { .. } => Err(ProviderError::UnsupportedTransport("web socket")),
        }
    }

    /// Token balance of `owner` for `token_id` on the given contract.
    pub async fn balance_of(
        &self,
        contract_address: Address,
        token_id: U256,
        owner: Address,
    ) -> EvmResult<U256> {
        let call_data = encode_function_call(
            ERC1155_BALANCE_OF_SIGNATURE,
            &[DynSolValue::Address(owner), DynSolValue::Uint(token_id, 256)],
        )?;

        let params = json!([
            {
                "to": contract_address,
                "data": hex::encode_prefixed(&call_data),
            },
            DEFAULT_BLOCK_PARAMETER,
        ]);

        let result = self.client.call("eth_call", params).await?;
        Ok(parse_word_result(&result)?)
    }
}

/// Parses the leading 32-byte word of returned call data as an unsigned
/// integer. Anything that is not hex-encoded non-empty data is rejected.
fn parse_word_result(result: &JsonValue) -> Result<U256, RpcError> {
    let invalid = || RpcError::InvalidResult { value: result.to_string() };
    let hex_string = result.as_str().ok_or_else(invalid)?;
    let bytes = hex::decode(hex_string).map_err(|_| invalid())?;
    if bytes.is_empty() {
        return Err(invalid());
    }
    let word = &bytes[..bytes.len().min(32)];
    Ok(U256::from_be_slice(word))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn http_source_constructs_a_provider() {
        let provider = Erc1155Provider::new(RpcSource::http("http://127.0.0.1:8545"));
        assert!(provider.is_ok());
    }

    #[test]
    fn websocket_source_is_rejected_at_construction() {
        let source = RpcSource::WebSocket { url: "ws://127.0.0.1:8546".to_string() };
        assert!(matches!(
            Erc1155Provider::new(source),
            Err(ProviderError::UnsupportedTransport(_))
        ));
    }

    #[test]
    fn empty_endpoint_list_is_rejected() {
        let source = RpcSource::Http { urls: Vec::new(), auth: None };
        assert!(matches!(Erc1155Provider::new(source), Err(ProviderError::MissingEndpoint)));
    }

    #[test]
    fn parses_a_full_word_result() {
        let result = json!(format!("0x{}", "00".repeat(31) + "2a"));
        assert_eq!(parse_word_result(&result).unwrap(), U256::from(42));
    }

    #[test]
    fn longer_results_only_read_the_first_word() {
        let padded = format!("0x{}{}", "00".repeat(31) + "07", "ff".repeat(32));
        assert_eq!(parse_word_result(&json!(padded)).unwrap(), U256::from(7));
    }

    #[test]
    fn empty_or_malformed_data_is_invalid() {
        assert!(matches!(
            parse_word_result(&json!("0x")),
            Err(RpcError::InvalidResult { .. })
        ));
        assert!(matches!(
            parse_word_result(&json!("0xzz")),
            Err(RpcError::InvalidResult { .. })
        ));
        assert!(matches!(
            parse_word_result(&json!(null)),
            Err(RpcError::InvalidResult { .. })
        ));
    }
}
