//! Integration tests for candidate pools and hiring.

use careersim::candidates::{generate_candidates, hire_candidate, CandidateRequest, HireError};
use careersim::company::{Company, EmployeeRole};
use careersim::{BalanceConfig, CareerStage};

#[test]
fn test_stage_raises_average_quality() {
    let config = BalanceConfig::default();
    let average = |stage| {
        let pool = generate_candidates(
            &CandidateRequest::new(stage, 0.0, 0.0, "avg").with_count(12),
            &config,
        );
        pool.iter().map(|c| c.quality).sum::<f64>() / pool.len() as f64
    };
    assert!(average(CareerStage::Senior) > average(CareerStage::Intern));
}

#[test]
fn test_intern_pool_has_no_seniors() {
    let config = BalanceConfig::default();
    for seed in ["a", "b", "c", "d"] {
        let request = CandidateRequest::new(CareerStage::Intern, 100.0, 0.0, seed)
            .with_count(12)
            .with_buff_bonus(60.0);
        assert!(generate_candidates(&request, &config)
            .iter()
            .all(|c| c.role != EmployeeRole::Senior));
    }
}

#[test]
fn test_debt_lowers_quality() {
    let config = BalanceConfig::default();
    let clean = generate_candidates(&CandidateRequest::new(CareerStage::Middle, 0.0, 0.0, "q"), &config);
    let messy = generate_candidates(&CandidateRequest::new(CareerStage::Middle, 0.0, 50.0, "q"), &config);
    for (a, b) in clean.iter().zip(&messy) {
        assert!(b.quality <= a.quality);
    }
}

#[test]
fn test_hiring_stops_at_team_cap() {
    let config = BalanceConfig::default();
    let pool = generate_candidates(
        &CandidateRequest::new(CareerStage::Senior, 50.0, 0.0, "cap").with_count(12),
        &config,
    );
    let mut company = Company::new(0);
    let mut refused = None;
    for (n, candidate) in pool.iter().enumerate() {
        match hire_candidate(&company, candidate, &format!("e{n}"), &config.candidates) {
            Ok(next) => company = next,
            Err(e) => {
                refused = Some(e);
                break;
            }
        }
    }
    assert_eq!(company.employees.len(), config.candidates.max_employees);
    assert_eq!(refused, Some(HireError::TeamFull { max: 8 }));
}
