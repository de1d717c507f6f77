use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{
    coin, to_binary, Addr, BankMsg, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::minter::ExecuteMsg as MinterExecuteMsg;
use crate::types::AssetInfo;
use crate::vesting_wallet::ExecuteMsg as VestingWalletExecuteMsg;

/// MinterContract is a wrapper around Addr that provides a lot of helpers
/// for working with this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MinterContract(pub Addr);

impl MinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<MinterExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

/// VestingWalletContract is a wrapper around Addr that provides a lot of helpers
/// for working with this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingWalletContract(pub Addr);

impl VestingWalletContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<VestingWalletExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

/// Returns `account`'s balance of `asset`, native or cw20
pub fn asset_balance(
    querier: QuerierWrapper,
    account: Addr,
    asset: AssetInfo,
) -> StdResult<Uint128> {
    match asset {
        AssetInfo::NativeToken { denom } => Ok(querier.query_balance(account, denom)?.amount),
        AssetInfo::Token { address } => {
            let res: BalanceResponse = querier.query_wasm_smart(
                address,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )?;
            Ok(res.balance)
        }
    }
}

/// Creates the transfer msg for `amount` of `asset` to `recipient`
pub fn asset_transfer_msg(
    asset: AssetInfo,
    recipient: Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    match asset {
        AssetInfo::NativeToken { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![coin(amount.u128(), denom)],
        })),
        AssetInfo::Token { address } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        })),
    }
}
