//! Proof intake.
//!
//! Every proof-driven handler starts here: the prover checks the proof, this
//! module checks that the proven outcome is a successful execution by the
//! linked remote factory, and the receipt is marked consumed so the same
//! outcome cannot be applied twice.

use cosmwasm_std::{Binary, Deps, Storage};

use common::{ExecutionOutcome, ExecutionStatus, ProverQueryMsg};

use crate::address_codec::encode_hex;
use crate::error::ContractError;
use crate::state::{Config, USED_PROOFS};

/// A proven, successful remote execution
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedOutcome {
    pub receipt_id: Binary,
    pub payload: Binary,
}

/// Verify a proof through the prover and extract the success payload.
///
/// Performs no writes.
pub fn verify_and_extract(
    deps: Deps,
    config: &Config,
    proof: Binary,
    block_height: u64,
) -> Result<VerifiedOutcome, ContractError> {
    if block_height < config.min_block_acceptance_height {
        return Err(ContractError::ProofInvalid {
            reason: format!(
                "block {} is below the minimum acceptance height {}",
                block_height, config.min_block_acceptance_height
            ),
        });
    }

    let outcome: ExecutionOutcome = deps
        .querier
        .query_wasm_smart(
            &config.prover,
            &ProverQueryMsg::ProveOutcome {
                proof,
                block_height,
            },
        )
        .map_err(|e| ContractError::ProofInvalid {
            reason: e.to_string(),
        })?;

    check_outcome(config, outcome)
}

/// Check a proven outcome against the linked remote factory.
pub fn check_outcome(
    config: &Config,
    outcome: ExecutionOutcome,
) -> Result<VerifiedOutcome, ContractError> {
    if outcome.executor_id != config.remote_factory {
        return Err(ContractError::ProofInvalid {
            reason: format!(
                "outcome executed by {}, expected {}",
                outcome.executor_id, config.remote_factory
            ),
        });
    }

    match outcome.status {
        ExecutionStatus::SuccessValue(payload) => Ok(VerifiedOutcome {
            receipt_id: outcome.receipt_id,
            payload,
        }),
        ExecutionStatus::Failure => Err(ContractError::ProofInvalid {
            reason: "remote execution failed".to_string(),
        }),
        ExecutionStatus::Unknown => Err(ContractError::ProofInvalid {
            reason: "remote execution status unknown".to_string(),
        }),
        ExecutionStatus::SuccessReceiptId(_) => Err(ContractError::ProofInvalid {
            reason: "remote execution returned no value".to_string(),
        }),
    }
}

/// Record a receipt as consumed, failing if it already was.
pub fn consume_proof(storage: &mut dyn Storage, receipt_id: &Binary) -> Result<(), ContractError> {
    if USED_PROOFS.has(storage, receipt_id.as_slice()) {
        return Err(ContractError::ProofAlreadyUsed {
            receipt_id: encode_hex(receipt_id),
        });
    }
    USED_PROOFS.save(storage, receipt_id.as_slice(), &true)?;
    Ok(())
}
