use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Cap amount is zero")]
    ZeroCapAmount {},

    #[error("Mint start is zero")]
    ZeroMintStart {},

    #[error("Mint amount is zero")]
    ZeroMintAmount {},

    #[error("Mint is not started")]
    MintNotStarted {},

    #[error("Minting amount is greater than mintable: requested {requested:?}, mintable {mintable:?}")]
    ExceedsMintable {
        requested: Uint128,
        mintable: Uint128,
    },

    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}
