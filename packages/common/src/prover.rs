//! Prover interface.
//!
//! The prover is an external contract that checks an execution proof against
//! the remote chain's finalized headers and returns the execution outcome it
//! proves. The factory never looks inside the proof bytes.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// Final status of a remote execution.
#[cw_serde]
pub enum ExecutionStatus {
    /// The status is not known to the prover
    Unknown,
    /// The remote call failed
    Failure,
    /// The remote call succeeded and returned a value (the outcome payload)
    SuccessValue(Binary),
    /// The remote call succeeded by scheduling another receipt
    SuccessReceiptId(Binary),
}

/// Execution outcome proven by the prover.
#[cw_serde]
pub struct ExecutionOutcome {
    /// Identifier of the receipt that produced this outcome (32 bytes)
    pub receipt_id: Binary,
    /// Remote account that executed the receipt
    pub executor_id: String,
    /// Remote block height the proof was checked against
    pub block_height: u64,
    /// Final status of the execution
    pub status: ExecutionStatus,
}

/// Query interface every prover contract must answer.
#[cw_serde]
#[derive(QueryResponses)]
pub enum ProverQueryMsg {
    /// Verify `proof` against the finalized block at `block_height`.
    /// Errors when the proof is rejected.
    #[returns(ExecutionOutcome)]
    ProveOutcome { proof: Binary, block_height: u64 },
}
