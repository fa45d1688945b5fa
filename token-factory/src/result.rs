//! Decoding of remote execution results.
//!
//! The remote factory returns borsh-encoded records as the success value of
//! its lock and metadata calls. There is no tag in the payload: the handler
//! that consumed the proof decides which record to expect. Both decoders
//! refuse trailing bytes, so a payload of the other kind almost never parses.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::address_codec::RAW_ADDRESS_LEN;
use crate::error::ContractError;

/// Result of locking tokens in the remote factory
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct LockResult {
    pub remote_token_id: String,
    pub amount: u128,
    pub recipient: [u8; RAW_ADDRESS_LEN],
}

/// Result of reading token metadata in the remote factory
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataResult {
    pub remote_token_id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub source_block_height: u64,
}

pub fn decode_lock_result(payload: &[u8]) -> Result<LockResult, ContractError> {
    decode(payload, "lock result")
}

pub fn decode_metadata_result(payload: &[u8]) -> Result<MetadataResult, ContractError> {
    decode(payload, "metadata result")
}

fn decode<T: BorshDeserialize>(payload: &[u8], kind: &str) -> Result<T, ContractError> {
    // try_from_slice fails when bytes remain after the last field
    T::try_from_slice(payload).map_err(|e| ContractError::DecodeError {
        reason: format!("{}: {}", kind, e),
    })
}
