//! Contract offer generation.
//!
//! Offers are sampled from the template catalog with weights that react to
//! the player's stage, reputation and tech debt, then patched so that a
//! debt-ridden company always sees a debt contract and a reputable one always
//! sees a hard contract.

use super::types::{
    Contract, ContractReward, ContractTemplate, Difficulty, IntRange, Objective, ObjectiveKind,
};
use crate::core::balance::{BalanceConfig, ContractBalance};
use crate::core::numeric::{clamp_pct, finite_or};
use crate::core::rng::{derive_seed, hash_seed, random_int, SeedRng};
use crate::core::sampler::weighted_sample_without_replacement;
use crate::core::stage::CareerStage;

/// Parameters of one offer refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRequest {
    pub stage: CareerStage,
    pub reputation: f64,
    pub tech_debt: f64,
    pub seed: String,
    /// Desired number of offers; `None` uses the configured default and
    /// negative values are floored to zero.
    pub count: Option<i64>,
}

impl ContractRequest {
    pub fn new(stage: CareerStage, reputation: f64, tech_debt: f64, seed: impl Into<String>) -> Self {
        Self {
            stage,
            reputation,
            tech_debt,
            seed: seed.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    fn normalized_count(&self, balance: &ContractBalance) -> usize {
        match self.count {
            None => balance.default_count,
            Some(n) => usize::try_from(n.max(0)).unwrap_or(0).min(balance.max_count),
        }
    }
}

/// Sampling weight of a template for the given stage, reputation and debt.
pub fn contract_weight(
    template: &ContractTemplate,
    stage: CareerStage,
    reputation: f64,
    tech_debt: f64,
    balance: &ContractBalance,
) -> f64 {
    let mut weight = template.stage_weights.for_stage(stage);
    if template.is_hard() {
        weight *= 1.0 + reputation * balance.hard_weight_per_reputation;
    }
    if template.is_debt_type() {
        weight *= 1.0 + tech_debt * balance.debt_weight_per_point;
    }
    if template.is_purchase_type() {
        weight /= 1.0 + tech_debt * balance.purchase_penalty_per_point;
    }
    if template.has_tag("refactor") || template.has_tag("optimization") {
        weight *= 1.0 + tech_debt * balance.refactor_tag_weight_per_point;
    }
    weight
}

/// Generates contract offers.
///
/// Deterministic in the request. A zero count yields no offers; otherwise the
/// fixed fallback contract is returned when no template can be offered at
/// this stage. The debt and hard guarantees only draw from templates with a
/// positive weight at the stage.
pub fn generate_contracts(
    templates: &[ContractTemplate],
    request: &ContractRequest,
    config: &BalanceConfig,
) -> Vec<Contract> {
    let balance = &config.contracts;
    let stage = request.stage.as_str();
    let reputation = finite_or(request.reputation, 0.0).max(0.0);
    let tech_debt = finite_or(request.tech_debt, 0.0).max(0.0);
    let count = request.normalized_count(balance);
    if count == 0 {
        return Vec::new();
    }

    let weights: Vec<f64> = templates
        .iter()
        .map(|t| contract_weight(t, request.stage, reputation, tech_debt, balance))
        .collect();
    if !weights.iter().any(|w| w.is_finite() && *w > 0.0) {
        tracing::debug!(stage, "no contract template available, offering fallback");
        return vec![fallback_contract(&request.seed, request.stage)];
    }

    let mut chosen = sample_slots(&weights, count, &request.seed, stage);

    let debt_required = tech_debt >= balance.debt_bias_threshold;
    if debt_required {
        ensure_debt_contract(templates, &weights, &mut chosen, &request.seed, stage);
    }
    if reputation >= balance.hard_bias_reputation_threshold {
        ensure_hard_contract(templates, &weights, &mut chosen, debt_required, &request.seed, stage);
    }

    chosen
        .iter()
        .enumerate()
        .map(|(index, &template_idx)| {
            instantiate(
                &templates[template_idx],
                request.stage,
                index,
                &request.seed,
                reputation,
                tech_debt,
                balance,
            )
        })
        .collect()
}

/// Weighted sampling without replacement; each exhausted pool starts a new
/// round with its own stream, so repeats only appear once all are used.
fn sample_slots(weights: &[f64], count: usize, seed: &str, stage: &str) -> Vec<usize> {
    let mut chosen = Vec::with_capacity(count);
    let mut round = 0u32;
    while chosen.len() < count {
        let round_str = round.to_string();
        let mut rng = SeedRng::derived(seed, &[stage, "sample", &round_str]);
        let picked = weighted_sample_without_replacement(&mut rng, weights, count - chosen.len());
        if picked.is_empty() {
            break;
        }
        chosen.extend(picked);
        round += 1;
    }
    chosen
}

/// Indices of templates matching `pred` that are offerable at this stage.
fn pool_of(
    templates: &[ContractTemplate],
    weights: &[f64],
    pred: impl Fn(&ContractTemplate) -> bool,
) -> Vec<usize> {
    (0..templates.len())
        .filter(|&i| weights[i] > 0.0 && pred(&templates[i]))
        .collect()
}

/// Picks from a pool with a hash of a dedicated sub-seed, not the sampling stream.
fn hash_pick(pool: &[usize], seed: &str, stage: &str, purpose: &str) -> usize {
    let hash = hash_seed(&derive_seed(seed, &[stage, purpose]));
    pool[hash as usize % pool.len()]
}

fn ensure_debt_contract(
    templates: &[ContractTemplate],
    weights: &[f64],
    chosen: &mut [usize],
    seed: &str,
    stage: &str,
) {
    if chosen.iter().any(|&i| templates[i].is_debt_type()) {
        return;
    }
    let pool = pool_of(templates, weights, ContractTemplate::is_debt_type);
    let Some(last) = chosen.last_mut() else {
        return;
    };
    if pool.is_empty() {
        return;
    }
    let pick = hash_pick(&pool, seed, stage, "debt-fix");
    tracing::debug!(stage, template = %templates[pick].id, "forcing a debt contract into the last slot");
    *last = pick;
}

fn ensure_hard_contract(
    templates: &[ContractTemplate],
    weights: &[f64],
    chosen: &mut [usize],
    debt_required: bool,
    seed: &str,
    stage: &str,
) {
    if chosen.is_empty() || chosen.iter().any(|&i| templates[i].is_hard()) {
        return;
    }
    let hard = pool_of(templates, weights, ContractTemplate::is_hard);
    if hard.is_empty() {
        return;
    }
    let hard_debt: Vec<usize> = hard
        .iter()
        .copied()
        .filter(|&i| templates[i].is_debt_type())
        .collect();
    let pool = if debt_required && !hard_debt.is_empty() {
        hard_debt
    } else {
        hard
    };
    let pick = hash_pick(&pool, seed, stage, "hard-fix");

    // Never overwrite the only debt contract with a non-debt one.
    let debt_slots = chosen.iter().filter(|&&i| templates[i].is_debt_type()).count();
    let replaceable = |slot: usize| {
        !debt_required
            || templates[pick].is_debt_type()
            || !templates[chosen[slot]].is_debt_type()
            || debt_slots > 1
    };
    let slot = (0..chosen.len()).rev().find(|&slot| replaceable(slot));
    match slot {
        Some(slot) => {
            tracing::debug!(stage, slot, template = %templates[pick].id, "forcing a hard contract");
            chosen[slot] = pick;
        }
        None => {
            tracing::debug!(stage, "no slot free for a hard contract without losing debt coverage");
        }
    }
}

fn roll(rng: &mut SeedRng, range: IntRange) -> i64 {
    random_int(rng, range.min, range.max)
}

fn instantiate(
    template: &ContractTemplate,
    stage: CareerStage,
    index: usize,
    seed: &str,
    reputation: f64,
    tech_debt: f64,
    balance: &ContractBalance,
) -> Contract {
    let index_str = index.to_string();
    let instance_seed = derive_seed(seed, &[stage.as_str(), &template.id, &index_str]);

    let mut objective_rng = SeedRng::derived(&instance_seed, &["objectives"]);
    let objectives = template
        .objectives
        .iter()
        .map(|spec| Objective {
            kind: spec.kind,
            target: u32::try_from(roll(&mut objective_rng, spec.target).max(1)).unwrap_or(1),
            current: 0,
        })
        .collect();

    let bonus = clamp_pct(reputation * balance.reward_bonus_per_reputation, balance.reward_bonus_cap);
    let penalty = clamp_pct(tech_debt * balance.reward_penalty_per_debt, balance.reward_penalty_cap);
    let multiplier = 1.0 + bonus - penalty;
    let scale = |amount: i64| ((amount as f64 * multiplier).round() as i64).max(0);

    let mut reward_rng = SeedRng::derived(&instance_seed, &["reward"]);
    let spec = &template.reward;
    let coins = scale(roll(&mut reward_rng, spec.coins));
    let cash = spec.cash.map(|r| scale(roll(&mut reward_rng, r)));
    let reputation_delta = spec.reputation_delta.map(|r| roll(&mut reward_rng, r));
    let tech_debt_delta = spec.tech_debt_delta.map(|r| roll(&mut reward_rng, r));

    Contract {
        id: format!("{}-{:08x}", template.id, hash_seed(&instance_seed)),
        template_id: template.id.clone(),
        title: template.title.clone(),
        description: template.description.clone(),
        difficulty: template.difficulty,
        objectives,
        reward: ContractReward {
            coins,
            cash,
            reputation_delta,
            tech_debt_delta,
        },
        seed: instance_seed,
    }
}

/// Offered when the catalog has nothing for this stage.
pub fn fallback_contract(seed: &str, stage: CareerStage) -> Contract {
    Contract {
        id: "fallback-maintenance".to_string(),
        template_id: "fallback-maintenance".to_string(),
        title: "Routine maintenance".to_string(),
        description: "Keep the lights on for an existing client.".to_string(),
        difficulty: Difficulty::Easy,
        objectives: vec![Objective {
            kind: ObjectiveKind::CompleteScenarios,
            target: 1,
            current: 0,
        }],
        reward: ContractReward {
            coins: 50,
            ..Default::default()
        },
        seed: derive_seed(seed, &[stage.as_str(), "fallback"]),
    }
}
