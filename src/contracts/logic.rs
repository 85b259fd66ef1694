//! Accepted-contract lifecycle: accept, progress, complete, pay out.

use super::types::{Contract, ContractReward, ObjectiveKind};
use crate::core::balance::ContractBalance;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("cannot hold more than {cap} active contracts")]
    ActiveLimitReached { cap: usize },
    #[error("contract {0} is already active")]
    AlreadyActive(String),
    #[error("contract {0} is not active")]
    NotFound(String),
    #[error("contract {0} still has open objectives")]
    NotComplete(String),
}

/// The balances a contract reward pays into.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: i64,
    pub cash: i64,
    pub reputation: f64,
    pub tech_debt: f64,
}

/// Adds `offer` to the active list, refusing duplicates and anything past
/// `balance.max_active`.
pub fn accept_contract(
    active: &[Contract],
    offer: &Contract,
    balance: &ContractBalance,
) -> Result<Vec<Contract>, ContractError> {
    if active.iter().any(|c| c.id == offer.id) {
        return Err(ContractError::AlreadyActive(offer.id.clone()));
    }
    let cap = balance.max_active;
    if active.len() >= cap {
        return Err(ContractError::ActiveLimitReached { cap });
    }
    let mut next = active.to_vec();
    next.push(offer.clone());
    Ok(next)
}

/// Advances every objective of `kind`, saturating at its target.
pub fn record_progress(contract: &Contract, kind: ObjectiveKind, amount: u32) -> Contract {
    let mut next = contract.clone();
    for objective in next.objectives.iter_mut().filter(|o| o.kind == kind) {
        objective.current = objective.current.saturating_add(amount).min(objective.target);
    }
    next
}

pub fn is_complete(contract: &Contract) -> bool {
    contract.objectives.iter().all(|o| o.is_met())
}

/// Removes a finished contract from the active list and hands back its reward.
pub fn complete_contract(
    active: &[Contract],
    contract_id: &str,
) -> Result<(Vec<Contract>, ContractReward), ContractError> {
    let contract = active
        .iter()
        .find(|c| c.id == contract_id)
        .ok_or_else(|| ContractError::NotFound(contract_id.to_string()))?;
    if !is_complete(contract) {
        return Err(ContractError::NotComplete(contract_id.to_string()));
    }
    let reward = contract.reward;
    let remaining = active
        .iter()
        .filter(|c| c.id != contract_id)
        .cloned()
        .collect();
    tracing::debug!(contract = contract_id, coins = reward.coins, "contract completed");
    Ok((remaining, reward))
}

/// Pays a reward into a wallet. Reputation stays within 0..=100 and tech debt
/// never drops below zero.
pub fn apply_reward(wallet: Wallet, reward: &ContractReward) -> Wallet {
    Wallet {
        coins: wallet.coins.saturating_add(reward.coins),
        cash: wallet.cash.saturating_add(reward.cash.unwrap_or(0)),
        reputation: (wallet.reputation + reward.reputation_delta.unwrap_or(0) as f64)
            .clamp(0.0, 100.0),
        tech_debt: (wallet.tech_debt + reward.tech_debt_delta.unwrap_or(0) as f64).max(0.0),
    }
}
