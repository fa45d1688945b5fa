//! Raw Address Encoding
//!
//! Lock results carry the deposit recipient as a raw 20-byte account, the
//! format both EVM chains and Cosmos chains use underneath. On this chain the
//! raw bytes are bech32-encoded with the configured prefix to obtain the
//! recipient's address.
//!
//! ```text
//! | hrp | "1" | base32(raw 20 bytes) | checksum (6 chars) |
//! ```

use bech32::{ToBase32, Variant};
use cosmwasm_std::{Addr, Api, StdError, StdResult};

/// Length of a raw account address
pub const RAW_ADDRESS_LEN: usize = 20;

/// Resolve a raw 20-byte recipient to a validated local address
pub fn raw_to_local_addr(
    api: &dyn Api,
    raw: &[u8; RAW_ADDRESS_LEN],
    hrp: &str,
) -> StdResult<Addr> {
    let encoded = encode_bech32_address(raw, hrp)?;
    api.addr_validate(&encoded)
}

/// Encode raw 20 bytes to a bech32 address with given prefix
///
/// Only lowercase alphanumeric prefixes are accepted.
pub fn encode_bech32_address(bytes: &[u8; RAW_ADDRESS_LEN], hrp: &str) -> StdResult<String> {
    if hrp.is_empty() || !hrp.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
        return Err(StdError::generic_err(format!("Invalid bech32 prefix: {:?}", hrp)));
    }

    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
}

/// Format raw bytes as a 0x-prefixed hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
