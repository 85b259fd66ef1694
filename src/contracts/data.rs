//! Default contract catalog.

use super::types::{
    ContractTemplate, Difficulty, IntRange, ObjectiveKind, ObjectiveSpec, RewardSpec,
};
use crate::core::stage::StageWeights;

fn objective(kind: ObjectiveKind, min: i64, max: i64) -> ObjectiveSpec {
    ObjectiveSpec {
        kind,
        target: IntRange::new(min, max),
    }
}

fn reward(coins: (i64, i64)) -> RewardSpec {
    RewardSpec {
        coins: IntRange::new(coins.0, coins.1),
        cash: None,
        reputation_delta: None,
        tech_debt_delta: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    stage_weights: StageWeights,
    tags: &[&str],
    objectives: Vec<ObjectiveSpec>,
    reward: RewardSpec,
) -> ContractTemplate {
    ContractTemplate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        stage_weights,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        objectives,
        reward,
    }
}

/// The contract catalog shipped with the game.
pub fn default_contract_templates() -> Vec<ContractTemplate> {
    use Difficulty::{Easy, Hard, Normal};
    use ObjectiveKind::*;

    vec![
        template(
            "landing-page",
            "Landing page for a bakery",
            "A small business needs a simple marketing site.",
            Easy,
            StageWeights::new(1.2, 1.0, 0.5, 0.2),
            &["frontend"],
            vec![objective(CompleteScenarios, 1, 2)],
            reward((40, 70)),
        ),
        template(
            "bugfix-sprint",
            "Bugfix sprint",
            "Burn down a backlog of customer-reported bugs.",
            Easy,
            StageWeights::new(1.0, 1.0, 0.8, 0.5),
            &["maintenance"],
            vec![objective(CompleteScenarios, 2, 3)],
            RewardSpec {
                cash: Some(IntRange::new(100, 200)),
                ..reward((50, 90))
            },
        ),
        template(
            "certification-push",
            "Certification push",
            "The client wants certified engineers on the account.",
            Normal,
            StageWeights::new(0.4, 1.0, 1.0, 0.8),
            &["learning"],
            vec![objective(PassExams, 1, 2)],
            RewardSpec {
                reputation_delta: Some(IntRange::new(1, 3)),
                ..reward((80, 130))
            },
        ),
        template(
            "tooling-upgrade",
            "Tooling upgrade",
            "Buy and roll out better tooling for the team.",
            Normal,
            StageWeights::new(0.3, 0.8, 1.0, 1.0),
            &["tooling"],
            vec![objective(MakePurchases, 1, 3)],
            reward((70, 110)),
        ),
        template(
            "office-expansion",
            "Office expansion",
            "Furnish a new office floor.",
            Normal,
            StageWeights::new(0.0, 0.5, 0.9, 1.0),
            &["operations"],
            vec![objective(MakePurchases, 2, 4), objective(HireEmployees, 1, 1)],
            RewardSpec {
                cash: Some(IntRange::new(200, 400)),
                ..reward((90, 150))
            },
        ),
        template(
            "legacy-cleanup",
            "Legacy cleanup",
            "Untangle a decade-old billing module.",
            Normal,
            StageWeights::new(0.3, 0.8, 1.0, 1.0),
            &["refactor"],
            vec![objective(ReduceTechDebt, 3, 6)],
            RewardSpec {
                tech_debt_delta: Some(IntRange::new(-4, -2)),
                ..reward((80, 120))
            },
        ),
        template(
            "test-coverage",
            "Test coverage drive",
            "Raise coverage before the audit.",
            Easy,
            StageWeights::new(0.6, 1.0, 0.8, 0.5),
            &["quality"],
            vec![objective(ReduceTechDebt, 2, 4), objective(CompleteScenarios, 1, 1)],
            RewardSpec {
                tech_debt_delta: Some(IntRange::new(-2, -1)),
                ..reward((50, 80))
            },
        ),
        template(
            "query-tuning",
            "Query tuning",
            "Slow dashboards are costing the client money.",
            Normal,
            StageWeights::new(0.2, 0.6, 1.0, 0.9),
            &["optimization"],
            vec![objective(CompleteScenarios, 2, 3)],
            RewardSpec {
                cash: Some(IntRange::new(150, 300)),
                ..reward((90, 140))
            },
        ),
        template(
            "hiring-spree",
            "Hiring spree",
            "Staff up a new squad for a client project.",
            Normal,
            StageWeights::new(0.0, 0.4, 0.9, 1.0),
            &["people"],
            vec![objective(HireEmployees, 1, 2)],
            reward((100, 160)),
        ),
        template(
            "platform-migration",
            "Platform migration",
            "Move a monolith onto a new platform without downtime.",
            Hard,
            StageWeights::new(0.0, 0.3, 0.8, 1.2),
            &["refactor", "infrastructure"],
            vec![objective(ReduceTechDebt, 5, 8), objective(PassExams, 1, 1)],
            RewardSpec {
                cash: Some(IntRange::new(500, 900)),
                reputation_delta: Some(IntRange::new(2, 4)),
                tech_debt_delta: Some(IntRange::new(-8, -5)),
                ..reward((180, 260))
            },
        ),
        template(
            "incident-commander",
            "Incident commander",
            "Keep a flaky fintech platform alive through launch week.",
            Hard,
            StageWeights::new(0.0, 0.3, 0.7, 1.1),
            &["ops"],
            vec![objective(ResolveIncidents, 2, 3), objective(CompleteScenarios, 2, 3)],
            RewardSpec {
                cash: Some(IntRange::new(400, 800)),
                reputation_delta: Some(IntRange::new(3, 5)),
                ..reward((160, 240))
            },
        ),
        template(
            "enterprise-rollout",
            "Enterprise rollout",
            "Ship a multi-tenant release for a bank.",
            Hard,
            StageWeights::new(0.0, 0.2, 0.8, 1.3),
            &["product"],
            vec![objective(CompleteScenarios, 3, 5), objective(PassExams, 1, 2)],
            RewardSpec {
                cash: Some(IntRange::new(700, 1_200)),
                reputation_delta: Some(IntRange::new(3, 6)),
                tech_debt_delta: Some(IntRange::new(1, 3)),
                ..reward((220, 320))
            },
        ),
    ]
}
