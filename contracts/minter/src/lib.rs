pub mod contract;
mod error;
pub mod query;
pub mod reply;
pub mod state;

pub use crate::error::ContractError;
