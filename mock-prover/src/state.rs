use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:mock-prover";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Highest remote block height the prover treats as final
pub const FINALIZED_HEIGHT: Item<u64> = Item::new("finalized_height");
