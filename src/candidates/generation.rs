//! Candidate pool generation.
//!
//! Each candidate draws from its own stream `seed:{index}`, so growing or
//! shrinking the pool never changes the candidates already in it.

use super::data::{FIRST_NAMES, LAST_NAMES, SUMMARY_TEMPLATES};
use super::types::Candidate;
use crate::company::tick::salary_for;
use crate::company::traits::{scale_traits_to_caps, trait_catalog};
use crate::company::types::EmployeeRole;
use crate::core::balance::{BalanceConfig, CandidateBalance, TickBalance};
use crate::core::numeric::finite_or;
use crate::core::rng::{derive_seed, hash_seed, pick, random_int, shuffle, unit, SeedRng};
use crate::core::stage::CareerStage;

/// Parameters of one pool refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRequest {
    pub stage: CareerStage,
    pub reputation: f64,
    pub tech_debt: f64,
    /// Flat quality bonus from purchased perks.
    pub buff_bonus: f64,
    pub seed: String,
    /// Desired pool size; `None` uses the configured default and negative
    /// values are floored to zero.
    pub count: Option<i64>,
}

impl CandidateRequest {
    pub fn new(stage: CareerStage, reputation: f64, tech_debt: f64, seed: impl Into<String>) -> Self {
        Self {
            stage,
            reputation,
            tech_debt,
            buff_bonus: 0.0,
            seed: seed.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_buff_bonus(mut self, bonus: f64) -> Self {
        self.buff_bonus = bonus;
        self
    }

    fn normalized_count(&self, balance: &CandidateBalance) -> usize {
        match self.count {
            None => balance.default_count,
            Some(n) => usize::try_from(n.max(0)).unwrap_or(0).min(balance.max_count),
        }
    }
}

/// Salary a candidate asks for. Pure in role and quality.
pub fn expected_salary(role: EmployeeRole, quality: f64, tick: &TickBalance, balance: &CandidateBalance) -> i64 {
    let base = salary_for(role, tick) as f64;
    let factor = 1.0 + (finite_or(quality, 50.0) - 50.0) * balance.salary_quality_slope;
    (base * factor).round().max(0.0) as i64
}

/// Generates the candidate pool for a refresh.
pub fn generate_candidates(request: &CandidateRequest, config: &BalanceConfig) -> Vec<Candidate> {
    let count = request.normalized_count(&config.candidates);
    (0..count)
        .map(|index| generate_candidate(request, index, config))
        .collect()
}

fn generate_candidate(request: &CandidateRequest, index: usize, config: &BalanceConfig) -> Candidate {
    let balance = &config.candidates;
    let seed = derive_seed(&request.seed, &[&index.to_string()]);
    let mut rng = SeedRng::from_seed(&seed);

    let jitter = random_int(&mut rng, balance.jitter_min, balance.jitter_max) as f64;
    let reputation = finite_or(request.reputation, 0.0).max(0.0);
    let tech_debt = finite_or(request.tech_debt, 0.0).max(0.0);
    let rep_bonus = (reputation * balance.reputation_bonus_per_point).min(balance.reputation_bonus_cap);
    let debt_penalty = (tech_debt * balance.debt_penalty_per_point).min(balance.debt_penalty_cap);
    let quality = (balance.base_quality(request.stage) + jitter + rep_bonus - debt_penalty
        + finite_or(request.buff_bonus, 0.0))
    .clamp(0.0, 100.0);

    let downgrade_roll = unit(&mut rng);
    let role = role_for(quality, request.stage, downgrade_roll, balance);

    let mut pool = trait_catalog();
    shuffle(&mut rng, &mut pool);
    let max_traits = balance.max_traits.min(pool.len());
    let min_traits = balance.min_traits.min(max_traits);
    let trait_count = random_int(&mut rng, min_traits as i64, max_traits as i64) as usize;
    pool.truncate(trait_count);
    scale_traits_to_caps(&mut pool, &config.traits);

    let first = pick(&mut rng, FIRST_NAMES).copied().unwrap_or("Alex");
    let last = pick(&mut rng, LAST_NAMES).copied().unwrap_or("Smith");
    let summary = pick(&mut rng, SUMMARY_TEMPLATES)
        .copied()
        .unwrap_or("{role} engineer.")
        .replace("{role}", &role.name().to_lowercase());

    let expected_salary = expected_salary(role, quality, &config.tick, balance);
    tracing::debug!(
        candidate = index,
        quality,
        role = role.name(),
        traits = pool.len(),
        "candidate generated"
    );

    Candidate {
        id: format!("cand-{index}-{:08x}", hash_seed(&seed)),
        name: format!("{first} {last}"),
        summary,
        quality,
        role,
        traits: pool,
        expected_salary,
        seed,
    }
}

/// Role tier from quality, with stage-dependent downgrades of senior rolls.
/// Interns never roll senior.
fn role_for(quality: f64, stage: CareerStage, roll: f64, balance: &CandidateBalance) -> EmployeeRole {
    let tier = if quality >= balance.senior_quality_threshold {
        EmployeeRole::Senior
    } else if quality >= balance.middle_quality_threshold {
        EmployeeRole::Middle
    } else {
        EmployeeRole::Junior
    };
    if tier != EmployeeRole::Senior {
        return tier;
    }
    let downgrade = match stage {
        CareerStage::Intern => true,
        CareerStage::Junior => roll < balance.junior_senior_downgrade_chance,
        CareerStage::Middle => roll < balance.middle_senior_downgrade_chance,
        CareerStage::Senior => false,
    };
    if downgrade {
        EmployeeRole::Middle
    } else {
        tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stage: CareerStage) -> CandidateRequest {
        CandidateRequest::new(stage, 20.0, 5.0, "pool")
    }

    #[test]
    fn test_default_pool_size() {
        let config = BalanceConfig::default();
        assert_eq!(generate_candidates(&request(CareerStage::Junior), &config).len(), 3);
    }

    #[test]
    fn test_count_is_clamped() {
        let config = BalanceConfig::default();
        let none = generate_candidates(&request(CareerStage::Junior).with_count(-2), &config);
        assert!(none.is_empty());
        let many = generate_candidates(&request(CareerStage::Junior).with_count(500), &config);
        assert_eq!(many.len(), config.candidates.max_count);
    }

    #[test]
    fn test_same_request_same_pool() {
        let config = BalanceConfig::default();
        let a = generate_candidates(&request(CareerStage::Middle), &config);
        let b = generate_candidates(&request(CareerStage::Middle), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_is_stable_when_pool_grows() {
        let config = BalanceConfig::default();
        let small = generate_candidates(&request(CareerStage::Middle).with_count(2), &config);
        let large = generate_candidates(&request(CareerStage::Middle).with_count(6), &config);
        assert_eq!(small[..], large[..2]);
    }

    #[test]
    fn test_interns_never_senior() {
        let config = BalanceConfig::default();
        let req = request(CareerStage::Intern)
            .with_count(12)
            .with_buff_bonus(80.0);
        for candidate in generate_candidates(&req, &config) {
            assert_ne!(candidate.role, EmployeeRole::Senior);
        }
    }

    #[test]
    fn test_quality_and_traits_within_bounds() {
        let config = BalanceConfig::default();
        for stage in CareerStage::ALL {
            let req = CandidateRequest::new(stage, 100.0, 100.0, "bounds").with_count(12);
            for c in generate_candidates(&req, &config) {
                assert!((0.0..=100.0).contains(&c.quality));
                let n = c.traits.len();
                assert!(n >= config.candidates.min_traits && n <= config.candidates.max_traits);
                let cash: f64 = c.traits.iter().map(|t| t.effects.cash_income_bonus_pct).sum();
                assert!(cash.abs() <= config.traits.cash_income_bonus_pct + 1e-9);
                let debt: f64 = c.traits.iter().map(|t| t.effects.tech_debt_delta_per_tick).sum();
                assert!(debt.abs() <= config.traits.tech_debt_per_tick + 1e-9);
            }
        }
    }

    #[test]
    fn test_role_thresholds() {
        let balance = CandidateBalance::default();
        assert_eq!(role_for(80.0, CareerStage::Senior, 0.0, &balance), EmployeeRole::Senior);
        assert_eq!(role_for(60.0, CareerStage::Senior, 0.0, &balance), EmployeeRole::Middle);
        assert_eq!(role_for(40.0, CareerStage::Senior, 0.0, &balance), EmployeeRole::Junior);
        assert_eq!(role_for(80.0, CareerStage::Intern, 0.99, &balance), EmployeeRole::Middle);
        assert_eq!(role_for(80.0, CareerStage::Junior, 0.1, &balance), EmployeeRole::Middle);
        assert_eq!(role_for(80.0, CareerStage::Junior, 0.9, &balance), EmployeeRole::Senior);
    }

    #[test]
    fn test_expected_salary_tracks_quality() {
        let config = BalanceConfig::default();
        let tick = &config.tick;
        let balance = &config.candidates;
        assert_eq!(expected_salary(EmployeeRole::Middle, 50.0, tick, balance), 70);
        assert_eq!(expected_salary(EmployeeRole::Senior, 70.0, tick, balance), 121);
        assert!(
            expected_salary(EmployeeRole::Junior, 30.0, tick, balance)
                < expected_salary(EmployeeRole::Junior, 60.0, tick, balance)
        );
    }

    #[test]
    fn test_summary_names_role() {
        let config = BalanceConfig::default();
        for c in generate_candidates(&request(CareerStage::Senior).with_count(5), &config) {
            assert!(c.summary.contains(&c.role.name().to_lowercase()), "{}", c.summary);
            assert!(c.id.starts_with("cand-"));
        }
    }
}
