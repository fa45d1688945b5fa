//! Token Factory Contract - Bridged Token Management for CosmWasm
//!
//! This contract is the local half of a two-chain token bridge. Every remote
//! token gets exactly one local bridge token, created by this factory, which
//! alone may mint, burn and update metadata on it.
//!
//! # Deposit Flow (Remote Lock -> Local Mint)
//! 1. User locks tokens with the remote factory
//! 2. Anyone submits the execution proof with `Deposit`
//! 3. The prover verifies the proof; the lock result is decoded
//! 4. The managed token mints the amount to the recipient
//!
//! # Withdraw Flow (Local Burn -> Remote Release)
//! 1. Holder calls `Withdraw` with a remote recipient
//! 2. Tokens are burned and a `withdraw` event is emitted
//! 3. The remote chain releases funds after proving the event
//!
//! # Security
//! - Proofs must come from the linked remote factory and report success
//! - Each proof receipt is consumed at most once
//! - Metadata updates are monotonic in source block height
//! - Pause halts deposits, withdrawals and metadata syncs

pub mod access;
pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod proof;
mod query;
pub mod registry;
pub mod result;
pub mod state;

pub use crate::error::ContractError;
pub use crate::result::{LockResult, MetadataResult};
