use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    /// Contract owner, defaults to the sender
    pub owner: Option<String>,
    /// Token controller the minter mints through
    pub token_contract: String,
    /// Code id used to instantiate a vesting wallet per mint
    pub vesting_wallet_code_id: u64,
    /// Lifetime minting budget, must be non-zero
    pub cap_amount: Uint128,
    /// Timestamp (seconds) the unlock schedule begins at, must be non-zero
    pub mint_start: u64,
    /// Length of the linear unlock window in seconds, 0 unlocks the full cap at mint_start
    pub minting_duration: u64,
    /// Seconds added to each mint's block time to get that wallet's vesting start
    pub locking_duration: u64,
    /// Length of each wallet's release window in seconds
    pub vesting_duration: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint `amount` into a freshly instantiated vesting wallet for `beneficiary`.
    /// Owner only.
    Mint {
        beneficiary: String,
        amount: Uint128,
    },
    /// The schedule parameters are immutable, only ownership can change
    UpdateConfig {
        owner: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    /// Returns Uint128: time-unlocked budget minus what was already minted
    MintableAmount {},
    /// Returns Uint128: running total minted so far
    MintedAmount {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub token_contract: Addr,
    pub vesting_wallet_code_id: u64,
    pub cap_amount: Uint128,
    pub mint_start: u64,
    pub minting_duration: u64,
    pub locking_duration: u64,
    pub vesting_duration: u64,
}
