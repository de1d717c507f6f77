#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use seamoon::helpers::{asset_balance, asset_transfer_msg};
use seamoon::math::linear_vested;
use seamoon::types::AssetInfo;
use seamoon::vesting_wallet::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::error::ContractError;
use crate::query::{query_config, query_releasable, query_released, query_vested_amount};
use crate::state::{CONFIG, RELEASED};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vesting-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        beneficiary: deps.api.addr_validate(&msg.beneficiary)?,
        start: msg.start,
        duration: msg.duration,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("config", format!("{:?}", config))
        .add_attribute("contract_address", env.contract.address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Release { asset } => release(deps, env, info, asset),
    }
}

/// Transfer the vested-but-unreleased portion of `asset` to the beneficiary.
/// The schedule covers everything ever deposited (current balance + released),
/// so deposits made after `start` vest retroactively for time already elapsed.
fn release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    //Strict check: nobody may release on the beneficiary's behalf
    if info.sender != config.beneficiary {
        return Err(ContractError::Unauthorized {});
    }

    let released = RELEASED
        .may_load(deps.storage, asset.to_string())?
        .unwrap_or_else(Uint128::zero);
    let balance = asset_balance(deps.querier, env.contract.address.clone(), asset.clone())?;
    let total_received = balance + released;

    let vested = linear_vested(
        total_received,
        env.block.time.seconds(),
        config.start,
        config.duration,
    );
    let releasable = vested.saturating_sub(released);

    let mut res = Response::new();

    //A zero-releasable call still succeeds, it just transfers nothing
    if !releasable.is_zero() {
        RELEASED.save(deps.storage, asset.to_string(), &(released + releasable))?;
        res = res.add_message(asset_transfer_msg(
            asset.clone(),
            config.beneficiary,
            releasable,
        )?);
    }

    Ok(res.add_attributes(vec![
        attr("method", "release"),
        attr("asset", asset.to_string()),
        attr("amount", releasable),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Released { asset } => to_binary(&query_released(deps, asset)?),
        QueryMsg::Releasable { asset } => to_binary(&query_releasable(deps, env, asset)?),
        QueryMsg::VestedAmount { asset } => to_binary(&query_vested_amount(deps, env, asset)?),
    }
}
