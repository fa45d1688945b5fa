//! Bridge Token - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_mint, execute_send, execute_transfer, query_balance, query_minter, query_token_info,
};
use cw20_base::state::{MinterData, TokenInfo, BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MetadataResponse, QueryMsg};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, LAST_UPDATED_HEIGHT, REMOTE_TOKEN_ID};

// ============================================================================
// Instantiate
// ============================================================================

/// The sender becomes the sole minter. Display metadata starts empty and is
/// filled in by the first metadata sync.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token_info = TokenInfo {
        name: String::new(),
        symbol: String::new(),
        decimals: 0,
        total_supply: Uint128::zero(),
        mint: Some(MinterData {
            minter: info.sender.clone(),
            cap: None,
        }),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;
    REMOTE_TOKEN_ID.save(deps.storage, &msg.remote_token_id)?;
    LAST_UPDATED_HEIGHT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("remote_token_id", msg.remote_token_id)
        .add_attribute("minter", info.sender))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),

        ExecuteMsg::Mint { recipient, amount } => {
            Ok(execute_mint(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::BridgeBurn { owner, amount } => {
            execute_bridge_burn(deps, info, owner, amount)
        }
        ExecuteMsg::SetMetadata {
            name,
            symbol,
            decimals,
            block_height,
        } => execute_set_metadata(deps, info, name, symbol, decimals, block_height),
    }
}

fn ensure_minter(deps: &DepsMut, info: &MessageInfo) -> Result<TokenInfo, ContractError> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    match &token_info.mint {
        Some(mint) if mint.minter == info.sender => Ok(token_info),
        _ => Err(ContractError::Unauthorized),
    }
}

/// Burn from `owner` on behalf of the minter.
fn execute_bridge_burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut token_info = ensure_minter(&deps, &info)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let owner = deps.api.addr_validate(&owner)?;
    let balance = BALANCES
        .may_load(deps.storage, &owner)?
        .unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }

    BALANCES.save(deps.storage, &owner, &(balance - amount))?;
    token_info.total_supply = token_info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "bridge_burn")
        .add_attribute("from", owner)
        .add_attribute("amount", amount))
}

fn execute_set_metadata(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    symbol: String,
    decimals: u8,
    block_height: u64,
) -> Result<Response, ContractError> {
    let mut token_info = ensure_minter(&deps, &info)?;

    let last_updated = LAST_UPDATED_HEIGHT.load(deps.storage)?;
    if block_height < last_updated {
        return Err(ContractError::StaleMetadata {
            got: block_height,
            last_updated,
        });
    }

    token_info.name = name;
    token_info.symbol = symbol;
    token_info.decimals = decimals;
    TOKEN_INFO.save(deps.storage, &token_info)?;
    LAST_UPDATED_HEIGHT.save(deps.storage, &block_height)?;

    Ok(Response::new()
        .add_attribute("action", "set_metadata")
        .add_attribute("name", token_info.name)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("decimals", decimals.to_string())
        .add_attribute("block_height", block_height.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Metadata {} => to_json_binary(&query_metadata(deps)?),
    }
}

fn query_metadata(deps: Deps) -> StdResult<MetadataResponse> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    Ok(MetadataResponse {
        remote_token_id: REMOTE_TOKEN_ID.load(deps.storage)?,
        name: token_info.name,
        symbol: token_info.symbol,
        decimals: token_info.decimals,
        last_updated_height: LAST_UPDATED_HEIGHT.load(deps.storage)?,
    })
}
