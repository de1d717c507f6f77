pub mod contract;
mod error;
pub mod query;
pub mod state;

pub use crate::error::ContractError;

#[cfg(test)]
#[allow(unused_variables)]
pub mod testing;
