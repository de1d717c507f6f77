use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

use crate::types::AssetInfo;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    /// The only address allowed to trigger releases, and the only recipient
    pub beneficiary: String,
    /// Timestamp (seconds) the release schedule begins at
    pub start: u64,
    /// Length of the release window in seconds, 0 releases everything at start
    pub duration: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Transfer whatever the schedule has freed up for `asset` to the
    /// beneficiary. Beneficiary only. A zero-releasable call is a no-op
    /// that still succeeds.
    Release { asset: AssetInfo },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    /// Returns Uint128: cumulative amount already released for `asset`
    Released { asset: AssetInfo },
    /// Returns Uint128: amount a release call would transfer right now
    Releasable { asset: AssetInfo },
    /// Returns Uint128: schedule applied to everything ever received of `asset`
    VestedAmount { asset: AssetInfo },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub beneficiary: Addr,
    pub start: u64,
    pub duration: u64,
}
