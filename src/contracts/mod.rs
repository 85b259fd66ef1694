//! Work contracts: templates, offer generation and the accepted-contract lifecycle.

pub mod data;
pub mod generation;
pub mod logic;
pub mod types;

pub use data::default_contract_templates;
pub use generation::{generate_contracts, ContractRequest};
pub use logic::{accept_contract, complete_contract, ContractError, Wallet};
pub use types::{Contract, ContractReward, ContractTemplate, Difficulty, Objective, ObjectiveKind};
