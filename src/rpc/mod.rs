//! Minimal JSON-RPC transport.
//!
//! One request, one typed response, no retries. Result parsing is kept
//! separate from the transport so the integer case can be tested without a
//! node behind it.

pub mod provider;

use reqwest::{Client, Url};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::errors::RpcError;

pub use provider::{Erc1155Provider, RpcSource};

#[derive(Clone, Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    pub params: JsonValue,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: JsonValue) -> Self {
        Self { jsonrpc: "2.0", id: 1, method: method.to_string(), params }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<JsonValue>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Parses a single-integer RPC result: a hexadecimal string with an
/// optional `0x` prefix.
pub fn parse_int_result(result: &JsonValue) -> Result<u128, RpcError> {
    let invalid = || RpcError::InvalidResult { value: result.to_string() };
    let hex_string = result.as_str().ok_or_else(invalid)?;
    let digits = hex_string.strip_prefix("0x").unwrap_or(hex_string);
    u128::from_str_radix(digits, 16).map_err(|_| invalid())
}

/// HTTP JSON-RPC client over a single endpoint, with optional bearer auth.
#[derive(Clone, Debug)]
pub struct HttpRpcClient {
    pub url: Url,
    auth: Option<String>,
    client: Client,
}

impl HttpRpcClient {
    pub fn new(url: &str, auth: Option<String>) -> Result<Self, RpcError> {
        let url = Url::parse(url)
            .map_err(|e| RpcError::Transport(format!("invalid rpc url {url}: {e}")))?;
        Ok(Self { url, auth, client: Client::new() })
    }

    /// Issues one call and returns the raw result value. Node-side errors
    /// and transport failures surface as typed errors to the caller.
    pub async fn call(&self, method: &str, params: JsonValue) -> Result<JsonValue, RpcError> {
        let request = JsonRpcRequest::new(method, params);
        debug!(method, url = %self.url, "sending json-rpc request");

        let mut builder = self.client.post(self.url.clone()).json(&request);
        if let Some(token) = &self.auth {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| RpcError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(method, status = status.as_u16(), "json-rpc endpoint rejected the request");
            return Err(RpcError::StatusCode(status.as_u16()));
        }

        let response: JsonRpcResponse =
            response.json().await.map_err(|e| RpcError::Transport(e.to_string()))?;
        if let Some(error) = response.error {
            warn!(method, code = error.code, message = %error.message, "json-rpc node error");
            return Err(RpcError::Node { code: error.code, message: error.message });
        }
        response.result.ok_or(RpcError::InvalidResult { value: JsonValue::Null.to_string() })
    }

    /// Issues one call whose result is a single hex-encoded integer.
    pub async fn call_int(&self, method: &str, params: JsonValue) -> Result<u128, RpcError> {
        let result = self.call(method, params).await?;
        parse_int_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_prefixed_hex_integer() {
        assert_eq!(parse_int_result(&json!("0x2a")).unwrap(), 42);
    }

    #[test]
    fn parses_bare_hex_integer() {
        assert_eq!(parse_int_result(&json!("ff")).unwrap(), 255);
    }

    #[test]
    fn rejects_non_hex_strings() {
        assert!(matches!(
            parse_int_result(&json!("zz")),
            Err(RpcError::InvalidResult { .. })
        ));
        assert!(matches!(
            parse_int_result(&json!("not-hex")),
            Err(RpcError::InvalidResult { .. })
        ));
        assert!(matches!(
            parse_int_result(&json!("0x")),
            Err(RpcError::InvalidResult { .. })
        ));
    }

    #[test]
    fn rejects_non_string_results() {
        assert!(matches!(
            parse_int_result(&json!(42)),
            Err(RpcError::InvalidResult { .. })
        ));
        assert!(matches!(
            parse_int_result(&json!({ "nested": true })),
            Err(RpcError::InvalidResult { .. })
        ));
    }

    #[test]
    fn request_envelope_serializes_to_json_rpc_shape() {
        let request = JsonRpcRequest::new("eth_blockNumber", json!([]));
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["method"], "eth_blockNumber");
        assert!(encoded["params"].as_array().unwrap().is_empty());
    }

    #[test]
    fn response_envelope_carries_node_errors() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#;
        let response: JsonRpcResponse = serde_json::from_str(raw).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "method not found");
    }

    #[test]
    fn rejects_invalid_endpoint_urls() {
        assert!(matches!(
            HttpRpcClient::new("not a url", None),
            Err(RpcError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_a_transport_error() {
        let client = HttpRpcClient::new("http://127.0.0.1:1/", None).unwrap();
        let result = client.call_int("eth_blockNumber", json!([])).await;
        assert!(matches!(result, Err(RpcError::Transport(_))));
    }
}
