use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use common::ExecutionOutcome;

use crate::error::ContractError;
use crate::msg::{AdminResponse, ExecuteMsg, FinalizedHeightResponse, InstantiateMsg, QueryMsg};
use crate::state::{ADMIN, CONTRACT_NAME, CONTRACT_VERSION, FINALIZED_HEIGHT};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    FINALIZED_HEIGHT.save(deps.storage, &msg.finalized_height)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("finalized_height", msg.finalized_height.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetFinalizedHeight { height } => {
            execute_set_finalized_height(deps, info, height)
        }
    }
}

fn execute_set_finalized_height(
    deps: DepsMut,
    info: MessageInfo,
    height: u64,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let current = FINALIZED_HEIGHT.load(deps.storage)?;
    if height < current {
        return Err(ContractError::HeightRegression {
            current,
            got: height,
        });
    }
    FINALIZED_HEIGHT.save(deps.storage, &height)?;

    Ok(Response::new()
        .add_attribute("action", "set_finalized_height")
        .add_attribute("height", height.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ProveOutcome {
            proof,
            block_height,
        } => to_json_binary(&query_prove_outcome(deps, proof, block_height)?),
        QueryMsg::FinalizedHeight {} => to_json_binary(&query_finalized_height(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
    }
}

fn query_prove_outcome(
    deps: Deps,
    proof: Binary,
    block_height: u64,
) -> StdResult<ExecutionOutcome> {
    let finalized = FINALIZED_HEIGHT.load(deps.storage)?;
    if block_height > finalized {
        return Err(StdError::generic_err(format!(
            "block {} is not final (finalized height {})",
            block_height, finalized
        )));
    }

    let outcome: ExecutionOutcome = from_json(&proof)
        .map_err(|e| StdError::generic_err(format!("malformed proof: {}", e)))?;
    if outcome.block_height != block_height {
        return Err(StdError::generic_err(format!(
            "proof is for block {}, not {}",
            outcome.block_height, block_height
        )));
    }

    Ok(outcome)
}

fn query_finalized_height(deps: Deps) -> StdResult<FinalizedHeightResponse> {
    let height = FINALIZED_HEIGHT.load(deps.storage)?;
    Ok(FinalizedHeightResponse { height })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse {
        admin: admin.to_string(),
    })
}
