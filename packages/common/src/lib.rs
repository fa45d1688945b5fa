//! Common - Shared Types for the Token Bridge Contracts
//!
//! This package provides the message and response types that cross contract
//! boundaries: the prover query interface consumed by the factory, and the
//! subset of bridge token messages the factory sends to the tokens it manages.

pub mod prover;
pub mod token;

pub use prover::{ExecutionOutcome, ExecutionStatus, ProverQueryMsg};
pub use token::{
    BridgeTokenExecuteMsg, BridgeTokenInstantiateMsg, BridgeTokenQueryMsg, MetadataResponse,
};
