#[cfg(test)]
mod tests {

    use seamoon::types::AssetInfo;
    use seamoon::vesting_wallet::{ExecuteMsg, InstantiateMsg, QueryMsg};

    use cosmwasm_std::{
        coin, coins, to_binary, Addr, Binary, Empty, Response, StdError, StdResult, Timestamp,
        Uint128,
    };
    use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
    use cw_multi_test::{App, AppBuilder, BankKeeper, Contract, ContractWrapper, Executor};
    use cw_storage_plus::Map;
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    const BENEFICIARY: &str = "beneficiary";
    const DENOM: &str = "usmp";

    const DURATION: u64 = 400u64;

    //Vesting Wallet contract
    pub fn vesting_wallet_contract() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        );
        Box::new(contract)
    }

    //Mock Cw20 token, just enough surface for the wallet: Transfer and Balance
    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
    pub struct MockCw20InstantiateMsg {
        pub initial_balances: Vec<Cw20Coin>,
    }

    const CW20_BALANCES: Map<String, Uint128> = Map::new("mock_cw20_balances");

    pub fn cw20_contract() -> Box<dyn Contract<Empty>> {
        let contract = ContractWrapper::new(
            |deps, _, info, msg: Cw20ExecuteMsg| -> StdResult<Response> {
                match msg {
                    Cw20ExecuteMsg::Transfer { recipient, amount } => {
                        let sender_balance = CW20_BALANCES
                            .may_load(deps.storage, info.sender.to_string())?
                            .unwrap_or_else(Uint128::zero);
                        let new_balance = sender_balance.checked_sub(amount)?;
                        CW20_BALANCES.save(deps.storage, info.sender.to_string(), &new_balance)?;

                        let recipient_balance = CW20_BALANCES
                            .may_load(deps.storage, recipient.clone())?
                            .unwrap_or_else(Uint128::zero);
                        CW20_BALANCES.save(
                            deps.storage,
                            recipient,
                            &(recipient_balance + amount),
                        )?;

                        Ok(Response::new())
                    }
                    _ => Err(StdError::generic_err("unsupported execute")),
                }
            },
            |deps, _, _, msg: MockCw20InstantiateMsg| -> StdResult<Response> {
                for balance in msg.initial_balances {
                    CW20_BALANCES.save(deps.storage, balance.address, &balance.amount)?;
                }
                Ok(Response::default())
            },
            |deps, _, msg: Cw20QueryMsg| -> StdResult<Binary> {
                match msg {
                    Cw20QueryMsg::Balance { address } => to_binary(&BalanceResponse {
                        balance: CW20_BALANCES
                            .may_load(deps.storage, address)?
                            .unwrap_or_else(Uint128::zero),
                    }),
                    _ => Err(StdError::generic_err("unsupported query")),
                }
            },
        );
        Box::new(contract)
    }

    fn mock_app() -> App {
        AppBuilder::new().build(|router, _, storage| {
            let bank = BankKeeper::new();

            bank.init_balance(
                storage,
                &Addr::unchecked("coin_god"),
                vec![coin(1_000_000u128, DENOM)],
            )
            .unwrap();

            router.bank = bank;
        })
    }

    fn instantiate_wallet(app: &mut App, start: u64, duration: u64) -> Addr {
        let wallet_id = app.store_code(vesting_wallet_contract());

        app.instantiate_contract(
            wallet_id,
            Addr::unchecked("minter"),
            &InstantiateMsg {
                beneficiary: String::from(BENEFICIARY),
                start,
                duration,
            },
            &[],
            "test",
            None,
        )
        .unwrap()
    }

    fn set_time(app: &mut App, seconds: u64) {
        app.update_block(|block_info| {
            block_info.height += 1;
            block_info.time = Timestamp::from_seconds(seconds);
        });
    }

    fn native_asset() -> AssetInfo {
        AssetInfo::NativeToken {
            denom: String::from(DENOM),
        }
    }

    #[test]
    fn native_release_end_to_end() {
        let mut app = mock_app();
        let start = app.block_info().time.seconds() + 100;
        let wallet = instantiate_wallet(&mut app, start, DURATION);

        //Fund the wallet
        app.send_tokens(
            Addr::unchecked("coin_god"),
            wallet.clone(),
            &coins(1_000u128, DENOM),
        )
        .unwrap();

        //Anyone who isn't the beneficiary is turned away
        app.execute_contract(
            Addr::unchecked("intruder"),
            wallet.clone(),
            &ExecuteMsg::Release {
                asset: native_asset(),
            },
            &[],
        )
        .unwrap_err();

        //Before start: succeeds, pays nothing
        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet.clone(),
            &ExecuteMsg::Release {
                asset: native_asset(),
            },
            &[],
        )
        .unwrap();
        let balance = app.wrap().query_balance(BENEFICIARY, DENOM).unwrap();
        assert_eq!(balance.amount, Uint128::zero());

        //Halfway
        set_time(&mut app, start + DURATION / 2);
        let releasable: Uint128 = app
            .wrap()
            .query_wasm_smart(
                wallet.clone(),
                &QueryMsg::Releasable {
                    asset: native_asset(),
                },
            )
            .unwrap();
        assert_eq!(releasable, Uint128::new(500u128));

        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet.clone(),
            &ExecuteMsg::Release {
                asset: native_asset(),
            },
            &[],
        )
        .unwrap();
        let balance = app.wrap().query_balance(BENEFICIARY, DENOM).unwrap();
        assert_eq!(balance.amount, Uint128::new(500u128));

        //Past the end
        set_time(&mut app, start + DURATION + 1);
        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet.clone(),
            &ExecuteMsg::Release {
                asset: native_asset(),
            },
            &[],
        )
        .unwrap();
        let balance = app.wrap().query_balance(BENEFICIARY, DENOM).unwrap();
        assert_eq!(balance.amount, Uint128::new(1_000u128));

        let released: Uint128 = app
            .wrap()
            .query_wasm_smart(
                wallet,
                &QueryMsg::Released {
                    asset: native_asset(),
                },
            )
            .unwrap();
        assert_eq!(released, Uint128::new(1_000u128));
    }

    #[test]
    fn cw20_release_end_to_end() {
        let mut app = mock_app();
        let start = app.block_info().time.seconds() + 100;
        let wallet = instantiate_wallet(&mut app, start, DURATION);

        //Seed the cw20 with the wallet's allocation
        let cw20_id = app.store_code(cw20_contract());
        let cw20_addr = app
            .instantiate_contract(
                cw20_id,
                Addr::unchecked("minter"),
                &MockCw20InstantiateMsg {
                    initial_balances: vec![Cw20Coin {
                        address: wallet.to_string(),
                        amount: Uint128::new(1_000u128),
                    }],
                },
                &[],
                "test",
                None,
            )
            .unwrap();
        let asset = AssetInfo::Token {
            address: cw20_addr.clone(),
        };

        set_time(&mut app, start + DURATION / 2);
        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet.clone(),
            &ExecuteMsg::Release {
                asset: asset.clone(),
            },
            &[],
        )
        .unwrap();

        let res: BalanceResponse = app
            .wrap()
            .query_wasm_smart(
                cw20_addr.clone(),
                &Cw20QueryMsg::Balance {
                    address: String::from(BENEFICIARY),
                },
            )
            .unwrap();
        assert_eq!(res.balance, Uint128::new(500u128));

        //Cw20 and native ledgers don't interfere
        let released: Uint128 = app
            .wrap()
            .query_wasm_smart(
                wallet.clone(),
                &QueryMsg::Released {
                    asset: native_asset(),
                },
            )
            .unwrap();
        assert_eq!(released, Uint128::zero());

        set_time(&mut app, start + DURATION);
        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet,
            &ExecuteMsg::Release { asset },
            &[],
        )
        .unwrap();
        let res: BalanceResponse = app
            .wrap()
            .query_wasm_smart(
                cw20_addr,
                &Cw20QueryMsg::Balance {
                    address: String::from(BENEFICIARY),
                },
            )
            .unwrap();
        assert_eq!(res.balance, Uint128::new(1_000u128));
    }

    #[test]
    fn zero_duration_wallet_pays_out_at_start() {
        let mut app = mock_app();
        let start = app.block_info().time.seconds() + 100;
        let wallet = instantiate_wallet(&mut app, start, 0u64);

        app.send_tokens(
            Addr::unchecked("coin_god"),
            wallet.clone(),
            &coins(1_000u128, DENOM),
        )
        .unwrap();

        set_time(&mut app, start);
        app.execute_contract(
            Addr::unchecked(BENEFICIARY),
            wallet,
            &ExecuteMsg::Release {
                asset: native_asset(),
            },
            &[],
        )
        .unwrap();
        let balance = app.wrap().query_balance(BENEFICIARY, DENOM).unwrap();
        assert_eq!(balance.amount, Uint128::new(1_000u128));
    }
}
