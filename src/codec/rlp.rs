//! Recursive length-prefixed encoding for transaction payloads.
//!
//! Items are byte strings or nested lists. Unsigned integers enter the item
//! space through the `From` conversions below, as their minimal big-endian
//! byte form (zero becomes the empty string). Encoding is total and
//! deterministic; the decoder rejects every input that is not the unique
//! canonical encoding of some item.

use alloy_primitives::{Address, TxKind, U256};

use crate::errors::RlpError;

const STRING_OFFSET: u8 = 0x80;
const LIST_OFFSET: u8 = 0xc0;
const SHORT_PAYLOAD_MAX: usize = 55;

/// A single encodable item: a raw byte string or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Bytes(Vec<u8>),
    List(Vec<Item>),
}

impl Item {
    /// Minimal big-endian byte form of an unsigned integer.
    pub fn uint(value: U256) -> Self {
        Item::Bytes(value.to_be_bytes_trimmed_vec())
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Item::Bytes(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }

    /// Reads a decoded byte string back as an unsigned integer, rejecting
    /// non-minimal forms.
    pub fn as_uint(&self) -> Result<U256, RlpError> {
        let bytes = match self {
            Item::Bytes(bytes) => bytes,
            Item::List(_) => return Err(RlpError::UnexpectedList),
        };
        if bytes.first() == Some(&0) {
            return Err(RlpError::NonCanonicalInteger);
        }
        if bytes.len() > 32 {
            return Err(RlpError::Overflow);
        }
        Ok(U256::from_be_slice(bytes))
    }
}

impl From<&[u8]> for Item {
    fn from(bytes: &[u8]) -> Self {
        Item::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Item {
    fn from(bytes: Vec<u8>) -> Self {
        Item::Bytes(bytes)
    }
}

impl From<u64> for Item {
    fn from(value: u64) -> Self {
        Item::uint(U256::from(value))
    }
}

impl From<u128> for Item {
    fn from(value: u128) -> Self {
        Item::uint(U256::from(value))
    }
}

impl From<U256> for Item {
    fn from(value: U256) -> Self {
        Item::uint(value)
    }
}

impl From<Address> for Item {
    fn from(address: Address) -> Self {
        Item::Bytes(address.as_slice().to_vec())
    }
}

impl From<TxKind> for Item {
    fn from(kind: TxKind) -> Self {
        match kind {
            TxKind::Call(address) => address.into(),
            TxKind::Create => Item::Bytes(Vec::new()),
        }
    }
}

/// Encodes a single item. Total for any well-formed item.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(item, &mut out);
    out
}

/// Encodes an ordered sequence of items as a top-level list.
pub fn encode_list(items: &[Item]) -> Vec<u8> {
    let mut payload = Vec::new();
    for item in items {
        encode_into(item, &mut payload);
    }
    let mut out = Vec::with_capacity(payload.len() + 9);
    encode_length(payload.len(), LIST_OFFSET, &mut out);
    out.extend_from_slice(&payload);
    out
}

fn encode_into(item: &Item, out: &mut Vec<u8>) {
    match item {
        Item::Bytes(bytes) => {
            if bytes.len() == 1 && bytes[0] < STRING_OFFSET {
                out.push(bytes[0]);
            } else {
                encode_length(bytes.len(), STRING_OFFSET, out);
                out.extend_from_slice(bytes);
            }
        }
        Item::List(items) => {
            let mut payload = Vec::new();
            for item in items {
                encode_into(item, &mut payload);
            }
            encode_length(payload.len(), LIST_OFFSET, out);
            out.extend_from_slice(&payload);
        }
    }
}

fn encode_length(len: usize, offset: u8, out: &mut Vec<u8>) {
    if len <= SHORT_PAYLOAD_MAX {
        out.push(offset + len as u8);
    } else {
        let be = (len as u64).to_be_bytes();
        let first = be.iter().position(|b| *b != 0).unwrap_or(be.len() - 1);
        let len_bytes = &be[first..];
        out.push(offset + SHORT_PAYLOAD_MAX as u8 + len_bytes.len() as u8);
        out.extend_from_slice(len_bytes);
    }
}

/// Decodes a single item, rejecting trailing bytes and every non-canonical
/// length form.
pub fn decode(input: &[u8]) -> Result<Item, RlpError> {
    let (item, rest) = decode_item(input)?;
    if !rest.is_empty() {
        return Err(RlpError::TrailingBytes { remaining: rest.len() });
    }
    Ok(item)
}

fn decode_item(input: &[u8]) -> Result<(Item, &[u8]), RlpError> {
    let (&prefix, rest) = input.split_first().ok_or(RlpError::UnexpectedEof)?;
    match prefix {
        0x00..=0x7f => Ok((Item::Bytes(vec![prefix]), rest)),
        0x80..=0xb7 => {
            let len = (prefix - STRING_OFFSET) as usize;
            let (payload, rest) = split_payload(rest, len)?;
            if len == 1 && payload[0] < STRING_OFFSET {
                return Err(RlpError::NonCanonicalLength);
            }
            Ok((Item::Bytes(payload.to_vec()), rest))
        }
        0xb8..=0xbf => {
            let (len, rest) = decode_long_length(rest, (prefix - 0xb7) as usize)?;
            let (payload, rest) = split_payload(rest, len)?;
            Ok((Item::Bytes(payload.to_vec()), rest))
        }
        0xc0..=0xf7 => {
            let len = (prefix - LIST_OFFSET) as usize;
            let (payload, rest) = split_payload(rest, len)?;
            Ok((Item::List(decode_list_payload(payload)?), rest))
        }
        0xf8..=0xff => {
            let (len, rest) = decode_long_length(rest, (prefix - 0xf7) as usize)?;
            let (payload, rest) = split_payload(rest, len)?;
            Ok((Item::List(decode_list_payload(payload)?), rest))
        }
    }
}

fn split_payload(input: &[u8], len: usize) -> Result<(&[u8], &[u8]), RlpError> {
    if input.len() < len {
        return Err(RlpError::LengthMismatch);
    }
    Ok(input.split_at(len))
}

fn decode_long_length(input: &[u8], len_of_len: usize) -> Result<(usize, &[u8]), RlpError> {
    if input.len() < len_of_len {
        return Err(RlpError::UnexpectedEof);
    }
    if len_of_len > std::mem::size_of::<usize>() {
        return Err(RlpError::Overflow);
    }
    let (len_bytes, rest) = input.split_at(len_of_len);
    if len_bytes[0] == 0 {
        return Err(RlpError::NonCanonicalLength);
    }
    let mut len = 0usize;
    for &byte in len_bytes {
        len = (len << 8) | byte as usize;
    }
    if len <= SHORT_PAYLOAD_MAX {
        return Err(RlpError::NonCanonicalLength);
    }
    Ok((len, rest))
}

fn decode_list_payload(mut payload: &[u8]) -> Result<Vec<Item>, RlpError> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        let (item, rest) = decode_item(payload)?;
        payload = rest;
        items.push(item);
    }
    Ok(items)
}
