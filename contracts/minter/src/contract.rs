#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
    SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use seamoon::math::linear_vested;
use seamoon::minter::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};
use seamoon::vesting_wallet::InstantiateMsg as WalletInstantiateMsg;

use crate::error::ContractError;
use crate::query::{query_config, query_mintable_amount, query_minted_amount};
use crate::reply::handle_wallet_instantiate_reply;
use crate::state::{PendingMint, CONFIG, MINTED_AMOUNT, OWNERSHIP_TRANSFER, PENDING_MINT};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

//Reply IDs
pub const WALLET_INSTANTIATE_REPLY_ID: u64 = 1u64;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.cap_amount.is_zero() {
        return Err(ContractError::ZeroCapAmount {});
    }
    if msg.mint_start == 0u64 {
        return Err(ContractError::ZeroMintStart {});
    }

    let mut config = Config {
        owner: info.sender,
        token_contract: deps.api.addr_validate(&msg.token_contract)?,
        vesting_wallet_code_id: msg.vesting_wallet_code_id,
        cap_amount: msg.cap_amount,
        mint_start: msg.mint_start,
        minting_duration: msg.minting_duration,
        locking_duration: msg.locking_duration,
        vesting_duration: msg.vesting_duration,
    };

    //Set Optionals
    if let Some(address) = msg.owner {
        config.owner = deps.api.addr_validate(&address)?;
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    MINTED_AMOUNT.save(deps.storage, &Uint128::zero())?;

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
        ExecuteMsg::Mint {
            beneficiary,
            amount,
        } => mint(deps, env, info, beneficiary, amount),
        ExecuteMsg::UpdateConfig { owner } => update_config(deps, info, owner),
    }
}

/// Mint `amount` into a newly instantiated vesting wallet for `beneficiary`.
/// The wallet address only exists once the instantiation submsg replies, so
/// the token-side mint is attached there.
fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    //Assert Authority
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let valid_beneficiary = deps.api.addr_validate(&beneficiary)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroMintAmount {});
    }

    let current_time = env.block.time.seconds();
    if current_time < config.mint_start {
        return Err(ContractError::MintNotStarted {});
    }

    //A too-large request is rejected, never clamped
    let minted = MINTED_AMOUNT.load(deps.storage)?;
    let unlocked = linear_vested(
        config.cap_amount,
        current_time,
        config.mint_start,
        config.minting_duration,
    );
    let mintable = unlocked.saturating_sub(minted);
    if amount > mintable {
        return Err(ContractError::ExceedsMintable {
            requested: amount,
            mintable,
        });
    }

    //The token controller can still reject the mint from the reply, which
    //rolls this back alongside the wallet instantiation
    MINTED_AMOUNT.save(deps.storage, &(minted + amount))?;
    PENDING_MINT.save(
        deps.storage,
        &PendingMint {
            beneficiary: valid_beneficiary.clone(),
            amount,
        },
    )?;

    //Instantiate the wallet, locked for locking_duration then vesting linearly
    let wallet_instantiation = CosmosMsg::Wasm(WasmMsg::Instantiate {
        admin: None,
        code_id: config.vesting_wallet_code_id,
        msg: to_binary(&WalletInstantiateMsg {
            beneficiary: valid_beneficiary.to_string(),
            start: current_time + config.locking_duration,
            duration: config.vesting_duration,
        })?,
        funds: vec![],
        label: String::from("vesting_wallet"),
    });
    let sub_msg = SubMsg::reply_on_success(wallet_instantiation, WALLET_INSTANTIATE_REPLY_ID);

    Ok(Response::new().add_submessage(sub_msg).add_attributes(vec![
        attr("method", "mint"),
        attr("beneficiary", valid_beneficiary),
        attr("amount", amount),
    ]))
}

/// Update contract configuration.
/// The schedule is immutable, so this only handles the 2-step ownership transfer.
fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    //Assert Authority
    if info.sender != config.owner {
        //Check if ownership transfer is in progress & transfer if so
        if Some(info.sender.clone()) == OWNERSHIP_TRANSFER.may_load(deps.storage)? {
            config.owner = info.sender;
        } else {
            return Err(ContractError::Unauthorized {});
        }
    }

    let mut attrs = vec![attr("method", "update_config")];

    if let Some(owner) = owner {
        let valid_addr = deps.api.addr_validate(&owner)?;

        //Set owner transfer state
        OWNERSHIP_TRANSFER.save(deps.storage, &valid_addr)?;
        attrs.push(attr("owner_transfer", valid_addr));
    };

    CONFIG.save(deps.storage, &config)?;
    attrs.push(attr("updated_config", format!("{:?}", config)));

    Ok(Response::new().add_attributes(attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        WALLET_INSTANTIATE_REPLY_ID => handle_wallet_instantiate_reply(deps, env, msg),
        id => Err(ContractError::CustomError {
            val: format!("invalid reply id: {}", id),
        }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::MintableAmount {} => to_binary(&query_mintable_amount(deps, env)?),
        QueryMsg::MintedAmount {} => to_binary(&query_minted_amount(deps)?),
    }
}
