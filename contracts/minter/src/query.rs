use cosmwasm_std::{Deps, Env, StdResult, Uint128};

use seamoon::math::linear_vested;
use seamoon::minter::Config;

use crate::state::{CONFIG, MINTED_AMOUNT};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

/// Unlocked-but-unminted headroom at the current block time.
/// Pure function of time and the immutable schedule, independent of the
/// token controller's authorization state. Never negative.
pub fn query_mintable_amount(deps: Deps, env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let minted = MINTED_AMOUNT.load(deps.storage)?;

    let unlocked = linear_vested(
        config.cap_amount,
        env.block.time.seconds(),
        config.mint_start,
        config.minting_duration,
    );

    Ok(unlocked.saturating_sub(minted))
}

pub fn query_minted_amount(deps: Deps) -> StdResult<Uint128> {
    MINTED_AMOUNT.load(deps.storage)
}
