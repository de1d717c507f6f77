use cw_storage_plus::{Item, Map};

use cosmwasm_std::Uint128;
use seamoon::vesting_wallet::Config;

pub const CONFIG: Item<Config> = Item::new("config");
/// Cumulative released per asset, keyed by denom or cw20 address
pub const RELEASED: Map<String, Uint128> = Map::new("released");
