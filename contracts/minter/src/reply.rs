use cosmwasm_std::{
    attr, to_binary, CosmosMsg, DepsMut, Env, Reply, Response, StdError, WasmMsg,
};

use seamoon::token::ExecuteMsg as TokenExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, PENDING_MINT};

/// Called after the vesting wallet instantiation to mint into the new wallet.
/// A failure of the attached token mint aborts the whole call, wallet included.
pub fn handle_wallet_instantiate_reply(
    deps: DepsMut,
    _env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    match msg.result.into_result() {
        Ok(result) => {
            let config = CONFIG.load(deps.storage)?;
            let pending = PENDING_MINT.load(deps.storage)?;
            PENDING_MINT.remove(deps.storage);

            //Get the wallet's address from the instantiate events.
            //Key naming differs between chains and test frameworks.
            let contract_address = result
                .events
                .iter()
                .flat_map(|event| event.attributes.iter())
                .find(|attribute| {
                    attribute.key == "_contract_address"
                        || attribute.key == "_contract_addr"
                        || attribute.key == "contract_address"
                })
                .map(|attribute| attribute.value.clone())
                .ok_or_else(|| StdError::generic_err("unable to find instantiate event"))?;

            let valid_address = deps.api.addr_validate(&contract_address)?;

            //Mint into the new wallet
            let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.token_contract.to_string(),
                msg: to_binary(&TokenExecuteMsg::Mint {
                    amount: pending.amount,
                    mint_to_address: valid_address.to_string(),
                })?,
                funds: vec![],
            });

            Ok(Response::new().add_message(mint_msg).add_attributes(vec![
                attr("method", "mint"),
                attr("vesting_wallet", valid_address),
                attr("amount", pending.amount),
            ]))
        }
        Err(err) => Err(StdError::GenericErr { msg: err }.into()),
    }
}
