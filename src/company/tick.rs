//! The company tick: one discrete advance of company time.
//!
//! [`simulate_tick`] takes a snapshot of the company and the surrounding
//! progress state and returns a new snapshot plus a [`TickOutcome`] describing
//! what happened, so the host can persist it and render the ledger without
//! the core ever touching its storage.

use super::traits::{assignment_modifiers, employee_trait_effects, AssignmentModifiers};
use super::types::{
    BuffTotals, Company, EmployeeRole, LedgerBalances, LedgerDeltas, LedgerEntry, TickReason,
    TraitEffects,
};
use crate::core::balance::{BalanceConfig, TickBalance};
use crate::core::clock::synthetic_time;
use crate::core::numeric::{clamp_pct, finite_or};
use crate::core::rng::{derive_seed, hash_seed, unit, SeedRng};
use crate::core::stage::CareerStage;
use crate::incidents::generation::generate_incident;
use crate::incidents::types::{ActiveIncident, IncidentTemplate};

/// Everything a tick reads. Nothing here is mutated.
#[derive(Debug, Clone)]
pub struct TickInput<'a> {
    pub reason: TickReason,
    pub company: &'a Company,
    pub reputation: f64,
    pub tech_debt: f64,
    pub buffs: BuffTotals,
    pub stage: CareerStage,
    /// Base seed of the session.
    pub seed: &'a str,
    /// Must strictly increase per company; reusing one replays that tick.
    pub tick_index: u64,
    pub incident_templates: &'a [IncidentTemplate],
}

/// The incident roll of a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentResult {
    pub happened: bool,
    /// Chance after mitigation and clamping, for display.
    pub chance: f64,
    pub roll: f64,
    pub cost: i64,
    pub reputation_delta: f64,
    pub morale_delta: f64,
    /// Newly opened incident, if the roll hit and none was already open.
    pub incident: Option<ActiveIncident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub company: Company,
    pub reputation: f64,
    pub tech_debt: f64,
    pub income: i64,
    pub salaries: i64,
    pub cash_delta: i64,
    /// Total cash bonus after capping.
    pub cash_bonus_pct: f64,
    /// Total incident reduction after capping.
    pub incident_reduce_pct: f64,
    pub incident: IncidentResult,
    /// The tick ended with negative cash and the crisis penalty applied.
    pub crisis: bool,
    pub ledger_entry: LedgerEntry,
    /// The index the host must pass to the next tick of this company.
    pub next_tick_index: u64,
}

/// Per-tick salary of a role.
pub fn salary_for(role: EmployeeRole, tick: &TickBalance) -> i64 {
    match role {
        EmployeeRole::Junior => tick.salary_junior,
        EmployeeRole::Middle => tick.salary_middle,
        EmployeeRole::Senior => tick.salary_senior,
    }
}

/// Per-tick incident probability after mitigation.
///
/// `incident_reduce_pct` is capped before use and the result always lands in
/// `[0, max_chance]`.
pub fn incident_chance(tech_debt: f64, incident_reduce_pct: f64, config: &BalanceConfig) -> f64 {
    let incidents = &config.incidents;
    let reduce = clamp_pct(incident_reduce_pct, config.tick.incident_reduce_cap_pct);
    let debt = finite_or(tech_debt, 0.0).max(0.0);
    let raw = incidents.base_chance + debt * incidents.chance_per_debt_point - reduce;
    finite_or(raw, 0.0).clamp(0.0, incidents.max_chance())
}

/// Id of the ledger entry for a tick. Always differs between tick indices.
pub fn ledger_entry_id(seed: &str, tick_index: u64, reason: TickReason) -> String {
    let tick = tick_index.to_string();
    let hash = hash_seed(&derive_seed(seed, &["tick", &tick, reason.as_str(), "ledger"]));
    format!("tick-{tick_index}-{hash:08x}")
}

/// Advances the company by one tick.
pub fn simulate_tick(input: &TickInput<'_>, config: &BalanceConfig) -> TickOutcome {
    let tick = &config.tick;
    let tick_str = input.tick_index.to_string();
    let mut rng = SeedRng::derived(input.seed, &["tick", &tick_str, input.reason.as_str()]);

    let mut company = input.company.clone();
    let reputation_before = finite_or(input.reputation, 0.0).clamp(0.0, tick.max_reputation);
    let tech_debt_before = finite_or(input.tech_debt, 0.0).clamp(0.0, tick.max_tech_debt);
    let morale_before = company.average_morale();

    // Traits are capped per employee before they are summed across the team.
    let mut trait_totals = TraitEffects::default();
    let mut assignments = AssignmentModifiers::default();
    let mut employee_income = 0.0;
    for employee in &company.employees {
        let effects = employee_trait_effects(employee, &config.traits);
        let quality_factor = (finite_or(employee.quality, 0.0) / 100.0).clamp(0.0, 1.0);
        employee_income +=
            tick.income_per_employee * quality_factor * (1.0 + effects.productivity_pct).max(0.0);
        trait_totals = trait_totals + effects;
        assignments = assignments + assignment_modifiers(employee.assignment, &config.assignments);
    }

    let cash_bonus_pct = clamp_pct(
        assignments.cash_bonus_pct
            + finite_or(input.buffs.cash_income_bonus_pct, 0.0)
            + trait_totals.cash_income_bonus_pct,
        tick.cash_bonus_cap_pct,
    );
    let incident_reduce_pct = clamp_pct(
        assignments.incident_reduce_pct
            + finite_or(input.buffs.incident_reduce_pct, 0.0)
            + trait_totals.incident_reduce_pct,
        tick.incident_reduce_cap_pct,
    );

    let income = ((tick.base_income + employee_income) * (1.0 + cash_bonus_pct)).round() as i64;
    let salaries: i64 = company
        .employees
        .iter()
        .map(|e| salary_for(e.role, tick))
        .sum();
    let cash_delta = income - salaries;
    let mut cash = (company.cash.saturating_add(cash_delta)).max(0);

    let morale_step = if cash_delta >= 0 {
        tick.morale_step_up
    } else {
        -tick.morale_step_down
    };
    adjust_morale(&mut company, morale_step);

    let tech_debt_drift = trait_totals.tech_debt_delta_per_tick + assignments.tech_debt_delta_per_tick;
    let tech_debt = (tech_debt_before + tech_debt_drift).clamp(0.0, tick.max_tech_debt);
    let mut reputation = reputation_before;

    let mut lines = vec![
        format!("Income: +{income}"),
        format!("Salaries: -{salaries}"),
    ];

    // Incident roll uses the tick's own stream; the incident body uses a sub-stream.
    let chance = incident_chance(tech_debt_before, incident_reduce_pct, config);
    let roll = unit(&mut rng);
    let happened = roll < chance;
    let mut incident = IncidentResult {
        happened,
        chance,
        roll,
        cost: 0,
        reputation_delta: 0.0,
        morale_delta: 0.0,
        incident: None,
    };
    if happened {
        let incidents = &config.incidents;
        cash -= incidents.cost;
        reputation -= incidents.reputation_penalty;
        adjust_morale(&mut company, -incidents.morale_penalty);
        incident.cost = incidents.cost;
        incident.reputation_delta = -incidents.reputation_penalty;
        incident.morale_delta = -incidents.morale_penalty;

        if company.active_incident.is_none() {
            let opened = generate_incident(
                input.incident_templates,
                input.stage,
                tech_debt_before,
                input.seed,
                input.tick_index,
                config,
            );
            lines.push(format!("Incident: {} (-{})", opened.title, incidents.cost));
            company.active_incident = Some(opened.clone());
            incident.incident = Some(opened);
        } else {
            lines.push(format!("Incident: aftershock (-{})", incidents.cost));
        }
    }

    let crisis = cash < 0;
    if crisis {
        reputation -= tick.crisis_reputation_penalty;
        adjust_morale(&mut company, -tick.crisis_morale_penalty);
        lines.push("Crisis: cash fell below zero".to_string());
    }

    reputation = reputation.clamp(0.0, tick.max_reputation);
    company.cash = cash;
    lines.push(format!("Balance: {cash}"));

    let ledger_entry = LedgerEntry {
        id: ledger_entry_id(input.seed, input.tick_index, input.reason),
        tick_index: input.tick_index,
        reason: input.reason,
        timestamp: synthetic_time(input.tick_index, tick.tick_duration_secs),
        lines,
        income,
        salaries,
        deltas: LedgerDeltas {
            cash: cash - input.company.cash,
            reputation: reputation - reputation_before,
            tech_debt: tech_debt - tech_debt_before,
            morale: company.average_morale() - morale_before,
        },
        balances: LedgerBalances {
            cash,
            reputation,
            tech_debt,
        },
    };

    company.ledger.push(ledger_entry.clone());
    if company.ledger.len() > tick.ledger_history_limit {
        let excess = company.ledger.len() - tick.ledger_history_limit;
        company.ledger.drain(..excess);
    }

    tracing::debug!(
        tick_index = input.tick_index,
        reason = input.reason.as_str(),
        income,
        salaries,
        cash,
        incident = happened,
        incident_chance = chance,
        crisis,
        "company tick"
    );

    TickOutcome {
        company,
        reputation,
        tech_debt,
        income,
        salaries,
        cash_delta,
        cash_bonus_pct,
        incident_reduce_pct,
        incident,
        crisis,
        ledger_entry,
        next_tick_index: input.tick_index.saturating_add(1),
    }
}

pub(crate) fn adjust_morale(company: &mut Company, delta: f64) {
    for employee in &mut company.employees {
        employee.morale = (finite_or(employee.morale, 0.0) + delta).clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::types::{Assignment, Employee};

    fn employee(id: &str, role: EmployeeRole, quality: f64) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            role,
            quality,
            morale: 50.0,
            traits: Vec::new(),
            assignment: Assignment::Unassigned,
            salary: 0,
        }
    }

    fn input<'a>(company: &'a Company, tech_debt: f64) -> TickInput<'a> {
        TickInput {
            reason: TickReason::Manual,
            company,
            reputation: 50.0,
            tech_debt,
            buffs: BuffTotals::default(),
            stage: CareerStage::Middle,
            seed: "unit",
            tick_index: 1,
            incident_templates: &[],
        }
    }

    fn no_incidents() -> BalanceConfig {
        let mut config = BalanceConfig::default();
        config.incidents.base_chance = 0.0;
        config.incidents.chance_per_debt_point = 0.0;
        config
    }

    #[test]
    fn test_empty_company_earns_base_income() {
        let company = Company::new(1_000);
        let outcome = simulate_tick(&input(&company, 0.0), &no_incidents());
        assert_eq!(outcome.income, 120);
        assert_eq!(outcome.salaries, 0);
        assert_eq!(outcome.company.cash, 1_120);
        assert!(!outcome.incident.happened);
        assert_eq!(outcome.next_tick_index, 2);
    }

    #[test]
    fn test_income_scales_with_quality() {
        let mut company = Company::new(0);
        company.employees.push(employee("a", EmployeeRole::Junior, 50.0));
        let outcome = simulate_tick(&input(&company, 0.0), &no_incidents());
        // 120 + 90 * 0.5 = 165, salary 40
        assert_eq!(outcome.income, 165);
        assert_eq!(outcome.salaries, 40);
        assert_eq!(outcome.cash_delta, 125);
    }

    #[test]
    fn test_payroll_uses_role_rate_not_quoted_salary() {
        let mut company = Company::new(0);
        let mut senior = employee("s", EmployeeRole::Senior, 70.0);
        senior.salary = 121;
        company.employees.push(senior);
        let outcome = simulate_tick(&input(&company, 0.0), &no_incidents());
        assert_eq!(outcome.salaries, BalanceConfig::default().tick.salary_senior);
    }

    #[test]
    fn test_losing_tick_lowers_morale_and_cash_floors_at_zero() {
        let mut company = Company::new(10);
        for i in 0..4 {
            company
                .employees
                .push(employee(&format!("s{i}"), EmployeeRole::Senior, 0.0));
        }
        let outcome = simulate_tick(&input(&company, 0.0), &no_incidents());
        assert!(outcome.cash_delta < 0);
        assert_eq!(outcome.company.cash, 0);
        assert!(!outcome.crisis);
        for e in &outcome.company.employees {
            assert_eq!(e.morale, 46.0);
        }
    }

    #[test]
    fn test_morale_clamped_at_hundred() {
        let mut company = Company::new(0);
        let mut happy = employee("h", EmployeeRole::Junior, 100.0);
        happy.morale = 99.5;
        company.employees.push(happy);
        let outcome = simulate_tick(&input(&company, 0.0), &no_incidents());
        assert_eq!(outcome.company.employees[0].morale, 100.0);
    }

    #[test]
    fn test_cash_bonus_capped() {
        let company = Company::new(0);
        let mut tick_input = input(&company, 0.0);
        tick_input.buffs.cash_income_bonus_pct = 5.0;
        let config = no_incidents();
        let outcome = simulate_tick(&tick_input, &config);
        assert_eq!(outcome.cash_bonus_pct, config.tick.cash_bonus_cap_pct);
        assert_eq!(outcome.income, 180);
    }

    #[test]
    fn test_incident_chance_bounds() {
        let config = BalanceConfig::default();
        assert_eq!(incident_chance(0.0, 2.0, &config), 0.0);
        assert_eq!(incident_chance(1_000.0, 0.0, &config), config.incidents.max_chance());
        assert!((incident_chance(10.0, 0.0, &config) - 0.18).abs() < 1e-9);
        assert_eq!(incident_chance(f64::NAN, f64::NAN, &config), 0.08);
    }

    #[test]
    fn test_certain_incident_with_crisis() {
        let mut config = BalanceConfig::default();
        config.incidents.base_chance = 1.0;
        let company = Company::new(0);
        let outcome = simulate_tick(&input(&company, 0.0), &config);
        assert!(outcome.incident.happened);
        assert_eq!(outcome.company.cash, 120 - config.incidents.cost);
        assert!(outcome.crisis);
        assert_eq!(
            outcome.reputation,
            50.0 - config.incidents.reputation_penalty - config.tick.crisis_reputation_penalty
        );
        assert!(outcome.company.active_incident.is_some());
    }

    #[test]
    fn test_open_incident_is_not_replaced() {
        let mut config = BalanceConfig::default();
        config.incidents.base_chance = 1.0;
        let mut company = Company::new(5_000);
        let first = simulate_tick(&input(&company, 0.0), &config);
        company = first.company;
        let opened = company.active_incident.clone().unwrap();

        let mut second_input = input(&company, 0.0);
        second_input.tick_index = 2;
        let second = simulate_tick(&second_input, &config);
        assert!(second.incident.happened);
        assert!(second.incident.incident.is_none());
        assert_eq!(second.company.active_incident, Some(opened));
    }

    #[test]
    fn test_ledger_is_bounded() {
        let mut config = no_incidents();
        config.tick.ledger_history_limit = 3;
        let mut company = Company::new(0);
        for i in 1..=5 {
            let mut tick_input = input(&company, 0.0);
            tick_input.tick_index = i;
            company = simulate_tick(&tick_input, &config).company;
        }
        assert_eq!(company.ledger.len(), 3);
        assert_eq!(company.ledger[0].tick_index, 3);
        assert_eq!(company.ledger[2].tick_index, 5);
    }

    #[test]
    fn test_refactoring_pays_down_debt() {
        let mut company = Company::new(0);
        let mut dev = employee("r", EmployeeRole::Middle, 60.0);
        dev.assignment = Assignment::Refactoring;
        company.employees.push(dev);
        let outcome = simulate_tick(&input(&company, 10.0), &no_incidents());
        assert!((outcome.tech_debt - 9.5).abs() < 1e-9);
        assert!((outcome.ledger_entry.deltas.tech_debt + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ledger_id_differs_per_tick() {
        assert_ne!(
            ledger_entry_id("s", 1, TickReason::Scenario),
            ledger_entry_id("s", 2, TickReason::Scenario)
        );
        assert_eq!(
            ledger_entry_id("s", 1, TickReason::Scenario),
            ledger_entry_id("s", 1, TickReason::Scenario)
        );
    }
}
