use cosmwasm_std::{Deps, Env, StdResult, Uint128};

use seamoon::helpers::asset_balance;
use seamoon::math::linear_vested;
use seamoon::types::AssetInfo;
use seamoon::vesting_wallet::Config;

use crate::state::{CONFIG, RELEASED};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_released(deps: Deps, asset: AssetInfo) -> StdResult<Uint128> {
    Ok(RELEASED
        .may_load(deps.storage, asset.to_string())?
        .unwrap_or_else(Uint128::zero))
}

/// Schedule applied to everything ever received of `asset`
pub fn query_vested_amount(deps: Deps, env: Env, asset: AssetInfo) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;

    let released = RELEASED
        .may_load(deps.storage, asset.to_string())?
        .unwrap_or_else(Uint128::zero);
    let balance = asset_balance(deps.querier, env.contract.address.clone(), asset)?;

    Ok(linear_vested(
        balance + released,
        env.block.time.seconds(),
        config.start,
        config.duration,
    ))
}

pub fn query_releasable(deps: Deps, env: Env, asset: AssetInfo) -> StdResult<Uint128> {
    let released = RELEASED
        .may_load(deps.storage, asset.to_string())?
        .unwrap_or_else(Uint128::zero);
    let vested = query_vested_amount(deps, env, asset)?;

    Ok(vested.saturating_sub(released))
}
