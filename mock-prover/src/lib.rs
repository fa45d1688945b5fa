//! Mock Prover - stand-in for a light-client prover in tests and devnets.
//!
//! A proof is the JSON encoding of the `ExecutionOutcome` it proves. The
//! prover only answers for heights at or below its finalized height, which
//! the admin advances.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
