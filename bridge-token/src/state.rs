use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:bridge-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote token identifier this token represents
pub const REMOTE_TOKEN_ID: Item<String> = Item::new("remote_token_id");

/// Remote block height of the last applied metadata (0 = never set)
pub const LAST_UPDATED_HEIGHT: Item<u64> = Item::new("last_updated_height");
