//! Closing an open incident with one of its three decisions.

use super::types::{DecisionId, Resolution};
use crate::company::tick::adjust_morale;
use crate::company::types::Company;
use crate::core::balance::BalanceConfig;
use crate::core::clock::synthetic_time;
use crate::core::numeric::finite_or;

/// State after a decision has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentResolution {
    pub company: Company,
    pub reputation: f64,
    pub tech_debt: f64,
}

/// Applies `decision` to the company's open incident and archives it.
///
/// Returns `None` when nothing is open. Morale effects hit every employee;
/// reputation and tech debt stay within their configured maximums.
pub fn resolve_incident(
    company: &Company,
    reputation: f64,
    tech_debt: f64,
    decision: DecisionId,
    tick_index: u64,
    config: &BalanceConfig,
) -> Option<IncidentResolution> {
    let mut incident = company.active_incident.clone()?;
    let effects = incident.decision(decision)?.effects;

    let mut next = company.clone();
    next.active_incident = None;
    next.cash = next.cash.saturating_add(effects.cash);
    adjust_morale(&mut next, finite_or(effects.morale, 0.0));

    let reputation = (finite_or(reputation, 0.0) + finite_or(effects.reputation, 0.0))
        .clamp(0.0, config.tick.max_reputation);
    let tech_debt = (finite_or(tech_debt, 0.0) + finite_or(effects.tech_debt, 0.0))
        .clamp(0.0, config.tick.max_tech_debt);

    incident.resolution = Some(Resolution {
        decision,
        resolved_at: synthetic_time(tick_index, config.tick.tick_duration_secs),
        resolved_tick: tick_index,
    });
    tracing::debug!(
        incident = %incident.instance_id,
        decision = decision.as_str(),
        cash = effects.cash,
        "incident resolved"
    );

    next.incidents_history.push(incident);
    let limit = config.incidents.history_limit;
    if next.incidents_history.len() > limit {
        let excess = next.incidents_history.len() - limit;
        next.incidents_history.drain(..excess);
    }

    Some(IncidentResolution {
        company: next,
        reputation,
        tech_debt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::types::{Assignment, Employee, EmployeeRole};
    use crate::core::stage::CareerStage;
    use crate::incidents::data::default_incident_templates;
    use crate::incidents::generation::generate_incident;

    fn company_with_incident(config: &BalanceConfig) -> Company {
        let templates = default_incident_templates();
        let mut company = Company::new(1_000);
        company.employees.push(Employee {
            id: "e1".to_string(),
            name: "Ada".to_string(),
            role: EmployeeRole::Middle,
            quality: 60.0,
            morale: 50.0,
            traits: Vec::new(),
            assignment: Assignment::Unassigned,
            salary: 70,
        });
        company.active_incident = Some(generate_incident(
            &templates[..1],
            CareerStage::Middle,
            0.0,
            "res",
            4,
            config,
        ));
        company
    }

    #[test]
    fn test_no_open_incident_is_none() {
        let config = BalanceConfig::default();
        let company = Company::new(100);
        assert!(resolve_incident(&company, 10.0, 10.0, DecisionId::A, 1, &config).is_none());
    }

    #[test]
    fn test_resolution_applies_effects_and_archives() {
        let config = BalanceConfig::default();
        let company = company_with_incident(&config);
        // prod-db-down, decision b: cash -150, reputation -2, morale -4
        let out = resolve_incident(&company, 10.0, 5.0, DecisionId::B, 7, &config).unwrap();

        assert!(out.company.active_incident.is_none());
        assert_eq!(out.company.cash, 850);
        assert_eq!(out.reputation, 8.0);
        assert_eq!(out.tech_debt, 5.0);
        assert_eq!(out.company.employees[0].morale, 46.0);

        let archived = &out.company.incidents_history[0];
        let resolution = archived.resolution.as_ref().unwrap();
        assert_eq!(resolution.decision, DecisionId::B);
        assert_eq!(resolution.resolved_tick, 7);
        assert_eq!(
            resolution.resolved_at,
            synthetic_time(7, config.tick.tick_duration_secs)
        );
    }

    #[test]
    fn test_reputation_never_negative() {
        let config = BalanceConfig::default();
        let company = company_with_incident(&config);
        let out = resolve_incident(&company, 1.0, 0.0, DecisionId::B, 7, &config).unwrap();
        assert_eq!(out.reputation, 0.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut config = BalanceConfig::default();
        config.incidents.history_limit = 2;
        let mut company = company_with_incident(&config);
        for tick in 0..4 {
            let out = resolve_incident(&company, 50.0, 0.0, DecisionId::A, tick, &config).unwrap();
            company = out.company;
            company.active_incident = company_with_incident(&config).active_incident;
        }
        assert_eq!(company.incidents_history.len(), 2);
        let ticks: Vec<u64> = company
            .incidents_history
            .iter()
            .filter_map(|i| i.resolution.as_ref().map(|r| r.resolved_tick))
            .collect();
        assert_eq!(ticks, vec![2, 3]);
    }
}
