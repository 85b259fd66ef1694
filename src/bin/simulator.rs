//! Careersim Headless Balance Simulator
//!
//! Runs the company tick loop without any UI, using the same library
//! functions the game host calls, and prints a summary for balance analysis.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --ticks N       Ticks to simulate (default: 30)
//!   --seed S        Base seed (default: demo)
//!   --stage S       intern | junior | middle | senior (default: junior)
//!   --runs N        Number of runs with suffixed seeds (default: 1)
//!   --config FILE   Balance JSON merged over the defaults
//!   --quiet         Only final summary line
//!
//! Set `RUST_LOG=careersim=debug` to see the library's tracing output.

use careersim::achievements::AchievementProgress;
use careersim::candidates::{assign_employee, generate_candidates, hire_candidate, CandidateRequest};
use careersim::company::{simulate_tick, Assignment, BuffTotals, Company, TickInput, TickReason};
use careersim::contracts::{
    accept_contract, default_contract_templates, generate_contracts, ContractRequest,
};
use careersim::core::derive_seed;
use careersim::ending::{resolve_ending, EndingCounters, EndingInput, EndingResult};
use careersim::events::{DomainEvent, DomainEventKind};
use careersim::incidents::{default_incident_templates, resolve_incident, DecisionId};
use careersim::{BalanceConfig, CareerStage};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

const STARTING_CASH: i64 = 1_000;
const STARTING_REPUTATION: f64 = 20.0;
const STARTING_TECH_DEBT: f64 = 10.0;
const INITIAL_HIRES: usize = 2;

struct SimConfig {
    ticks: u64,
    seed: String,
    stage: CareerStage,
    runs: u32,
    balance: BalanceConfig,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 30,
            seed: "demo".to_string(),
            stage: CareerStage::Junior,
            runs: 1,
            balance: BalanceConfig::default(),
            quiet: false,
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<Option<SimConfig>, String> {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                config.ticks = value(args, i, "--ticks")?
                    .parse()
                    .map_err(|_| "--ticks requires a number".to_string())?;
            }
            "--seed" => {
                i += 1;
                config.seed = value(args, i, "--seed")?.to_string();
            }
            "--stage" => {
                i += 1;
                let raw = value(args, i, "--stage")?;
                config.stage =
                    CareerStage::parse(raw).ok_or_else(|| format!("unknown stage: {raw}"))?;
            }
            "--runs" => {
                i += 1;
                config.runs = value(args, i, "--runs")?
                    .parse()
                    .map_err(|_| "--runs requires a number".to_string())?;
            }
            "--config" => {
                i += 1;
                let path = value(args, i, "--config")?;
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {path}: {e}"))?;
                config.balance = BalanceConfig::from_json(&json).map_err(|e| e.to_string())?;
            }
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!(
        "Careersim Headless Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --ticks N       Ticks to simulate (default: 30)\n\
         \x20 --seed S        Base seed (default: demo)\n\
         \x20 --stage S       intern | junior | middle | senior (default: junior)\n\
         \x20 --runs N        Number of runs with suffixed seeds (default: 1)\n\
         \x20 --config FILE   Balance JSON merged over the defaults\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    ticks: u64,
    total_income: i64,
    total_salaries: i64,
    incidents: u32,
    incidents_resolved: u32,
    crises: u32,
    hires: u32,
    achievements_unlocked: usize,
    final_cash: i64,
    final_reputation: f64,
    final_tech_debt: f64,
    final_morale: f64,
    employees: usize,
    active_contracts: usize,
}

fn run_simulation(config: &SimConfig, seed: &str) -> (SimStats, EndingResult) {
    let balance = &config.balance;
    let incident_templates = default_incident_templates();
    let mut stats = SimStats::default();
    let mut progress = AchievementProgress::default();
    let mut company = Company::new(STARTING_CASH);
    let mut reputation = STARTING_REPUTATION;
    let mut tech_debt = STARTING_TECH_DEBT;

    let request = CandidateRequest::new(
        config.stage,
        reputation,
        tech_debt,
        derive_seed(seed, &["candidates"]),
    );
    let pool = generate_candidates(&request, balance);
    for (n, candidate) in pool.iter().take(INITIAL_HIRES).enumerate() {
        let employee_id = format!("e{}", n + 1);
        match hire_candidate(&company, candidate, &employee_id, &balance.candidates) {
            Ok(next) => {
                let assignment = if n == 0 {
                    Assignment::Product
                } else {
                    Assignment::Refactoring
                };
                company = assign_employee(&next, &employee_id, assignment);
                stats.hires += 1;
                let hired = DomainEvent::new(
                    DomainEventKind::EmployeeHired { employee_id },
                    careersim::core::clock::synthetic_epoch(),
                );
                stats.achievements_unlocked += progress.record(&hired).len();
            }
            Err(e) => tracing::warn!(error = %e, "initial hire failed"),
        }
    }

    let contract_request = ContractRequest::new(
        config.stage,
        reputation,
        tech_debt,
        derive_seed(seed, &["contracts"]),
    );
    let offers = generate_contracts(&default_contract_templates(), &contract_request, balance);
    let mut active = Vec::new();
    if let Some(offer) = offers.first() {
        match accept_contract(&active, offer, &balance.contracts) {
            Ok(next) => {
                if !config.quiet && config.runs == 1 {
                    println!("  Accepted contract: {}", offer.title);
                    for objective in &offer.objectives {
                        println!("    - {}", objective.kind.describe(objective.target));
                    }
                }
                active = next;
            }
            Err(e) => tracing::warn!(error = %e, "could not accept the first offer"),
        }
    }

    let mut tick_index = 1;
    for _ in 0..config.ticks {
        let input = TickInput {
            reason: TickReason::Manual,
            company: &company,
            reputation,
            tech_debt,
            buffs: BuffTotals::default(),
            stage: config.stage,
            seed,
            tick_index,
            incident_templates: &incident_templates,
        };
        let outcome = simulate_tick(&input, balance);

        if !config.quiet && config.runs == 1 {
            for line in &outcome.ledger_entry.lines {
                println!("  [{tick_index:>4}] {line}");
            }
        }

        stats.ticks += 1;
        stats.total_income += outcome.income;
        stats.total_salaries += outcome.salaries;
        stats.incidents += u32::from(outcome.incident.happened);
        stats.crises += u32::from(outcome.crisis);

        company = outcome.company;
        reputation = outcome.reputation;
        tech_debt = outcome.tech_debt;

        if let Some(resolved) =
            resolve_incident(&company, reputation, tech_debt, DecisionId::A, tick_index, balance)
        {
            company = resolved.company;
            reputation = resolved.reputation;
            tech_debt = resolved.tech_debt;
            stats.incidents_resolved += 1;
        }

        let ticked = DomainEvent::new(
            DomainEventKind::CompanyTicked {
                tick_index,
                cash: company.cash,
                tech_debt,
            },
            outcome.ledger_entry.timestamp,
        );
        stats.achievements_unlocked += progress.record(&ticked).len();
        tick_index = outcome.next_tick_index;
    }

    stats.final_cash = company.cash;
    stats.final_reputation = reputation;
    stats.final_tech_debt = tech_debt;
    stats.final_morale = company.average_morale();
    stats.employees = company.employees.len();
    stats.active_contracts = active.len();

    let ending = resolve_ending(&EndingInput {
        cash: company.cash,
        reputation,
        tech_debt,
        morale: company.average_morale(),
        company_level: company.level,
        finale_complete: true,
        counters: EndingCounters {
            incidents_resolved: stats.incidents_resolved,
            ..Default::default()
        },
        ..Default::default()
    });
    (stats, ending)
}

fn print_summary(stats: &SimStats, ending: &EndingResult, seed: &str) {
    println!();
    println!("══ Simulation summary (seed={seed}) ══");
    println!("  Ticks:         {}", stats.ticks);
    println!("  Employees:     {} ({} hired)", stats.employees, stats.hires);
    println!("  Income:        {}", stats.total_income);
    println!("  Salaries:      {}", stats.total_salaries);
    println!("  Incidents:     {} ({} resolved)", stats.incidents, stats.incidents_resolved);
    println!("  Crises:        {}", stats.crises);
    println!("  Contracts:     {} active", stats.active_contracts);
    println!("  Achievements:  {}", stats.achievements_unlocked);
    println!("  Cash:          {}", stats.final_cash);
    println!("  Reputation:    {:.1}", stats.final_reputation);
    println!("  Tech debt:     {:.1}", stats.final_tech_debt);
    println!("  Morale:        {:.1}", stats.final_morale);
    println!(
        "  Ending:        {} ({}), score {}",
        ending.title,
        ending.ending.as_str(),
        ending.stats.score
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if !config.quiet {
        eprintln!(
            "Careersim Simulator: {} ticks x {} run(s), seed={}, stage={}",
            config.ticks,
            config.runs,
            config.seed,
            config.stage.as_str(),
        );
    }

    for run in 0..config.runs {
        let seed = if config.runs > 1 {
            derive_seed(&config.seed, &[&run.to_string()])
        } else {
            config.seed.clone()
        };
        let (stats, ending) = run_simulation(&config, &seed);
        if config.quiet {
            println!(
                "seed={seed} cash={} rep={:.1} debt={:.1} ending={} score={}",
                stats.final_cash,
                stats.final_reputation,
                stats.final_tech_debt,
                ending.ending.as_str(),
                ending.stats.score
            );
        } else {
            print_summary(&stats, &ending, &seed);
        }
    }
    ExitCode::SUCCESS
}
