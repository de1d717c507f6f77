pub mod helpers;
pub mod math;
pub mod minter;
pub mod token;
pub mod types;
pub mod vesting_wallet;
