use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use seamoon::minter::Config;

/// Scratch state for the wallet-instantiation reply. Execution is fully
/// serialized, so a single pending slot is enough.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PendingMint {
    pub beneficiary: Addr,
    pub amount: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const MINTED_AMOUNT: Item<Uint128> = Item::new("minted_amount");
pub const PENDING_MINT: Item<PendingMint> = Item::new("pending_mint");
pub const OWNERSHIP_TRANSFER: Item<Addr> = Item::new("ownership_transfer");
