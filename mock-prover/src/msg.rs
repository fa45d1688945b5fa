use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use common::ExecutionOutcome;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who can advance the finalized height
    pub admin: String,
    /// Initial finalized height
    pub finalized_height: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: mark blocks up to `height` as final
    SetFinalizedHeight { height: u64 },
}

/// Same wire shape as `common::ProverQueryMsg`, plus local inspection queries.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Verify `proof` against the finalized block at `block_height`.
    #[returns(ExecutionOutcome)]
    ProveOutcome { proof: Binary, block_height: u64 },
    /// Returns the current finalized height
    #[returns(FinalizedHeightResponse)]
    FinalizedHeight {},
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
}

#[cw_serde]
pub struct FinalizedHeightResponse {
    pub height: u64,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}
