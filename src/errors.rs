use thiserror::Error;

/// Malformed canonical encoding detected by the RLP decoder.
///
/// The encoder itself is total and cannot fail; every variant here is a
/// decoder-side rejection and is always recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RlpError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("declared length exceeds remaining input")]
    LengthMismatch,
    #[error("non-minimal length prefix")]
    NonCanonicalLength,
    #[error("integer field has leading zero bytes")]
    NonCanonicalInteger,
    #[error("{remaining} trailing bytes after decoded item")]
    TrailingBytes { remaining: usize },
    #[error("length or integer does not fit the target type")]
    Overflow,
    #[error("expected a byte string, found a list")]
    UnexpectedList,
}

/// Serialization failures surfaced by the codec layer.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Rlp(#[from] RlpError),
    #[error("invalid method signature `{signature}`: {reason}")]
    InvalidSignature { signature: String, reason: String },
    #[error("abi encoding failed: {0}")]
    AbiEncoding(String),
}

/// Failures surfaced by the JSON-RPC transport. No retries happen at this
/// layer; every error is returned to the immediate caller.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid result: {value}")]
    InvalidResult { value: String },
    #[error("error status code {0}")]
    StatusCode(u16),
    #[error("node error (code {code}): {message}")]
    Node { code: i64, message: String },
    #[error("transport error: {0}")]
    Transport(String),
}

/// Construction-time provider configuration errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} transport is not supported")]
    UnsupportedTransport(&'static str),
    #[error("no rpc endpoint configured")]
    MissingEndpoint,
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

#[derive(Debug, Error)]
pub enum EvmError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<RlpError> for EvmError {
    fn from(err: RlpError) -> Self {
        EvmError::Codec(CodecError::Rlp(err))
    }
}

pub type EvmResult<T> = Result<T, EvmError>;
