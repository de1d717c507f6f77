//Minimal surface of the token controller the minting side relies on.
//The controller itself lives outside this workspace; it owns the supply cap
//and the authorized-minter set, and rejects mints from revoked addresses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    pub denom: String,
    pub max_supply: Option<Uint128>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint `amount` to `mint_to_address`. Fails unless the sender is an
    /// authorized minter and the controller's own max supply allows it.
    Mint {
        amount: Uint128,
        mint_to_address: String,
    },
    /// Grant minting authority. Admin only.
    AddMinter { minter: String },
    /// Revoke minting authority. Admin only. Revocation is observable to a
    /// minter contract only through its own mint calls starting to fail.
    RemoveMinter { minter: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    TokenInfo {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct TokenInfoResponse {
    pub denom: String,
    pub current_supply: Uint128,
    pub max_supply: Option<Uint128>,
}
