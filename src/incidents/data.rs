//! Default incident catalog.

use super::types::{DecisionEffects, DecisionId, IncidentDecision, IncidentTemplate, Severity};
use crate::core::stage::StageWeights;

fn decision(id: DecisionId, label: &str, effects: DecisionEffects) -> IncidentDecision {
    IncidentDecision {
        id,
        label: label.to_string(),
        effects,
    }
}

fn effects(cash: i64, reputation: f64, tech_debt: f64, morale: f64) -> DecisionEffects {
    DecisionEffects {
        cash,
        reputation,
        tech_debt,
        morale,
    }
}

fn template(
    id: &str,
    title: &str,
    description: &str,
    severity: Severity,
    tags: &[&str],
    stage_weights: StageWeights,
    decisions: [IncidentDecision; 3],
) -> IncidentTemplate {
    IncidentTemplate {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        stage_weights,
        decisions,
    }
}

/// Synthetic incident used when the catalog is empty.
pub fn fallback_incident_template() -> IncidentTemplate {
    template(
        "minor-outage",
        "Minor outage",
        "A service hiccup needs someone's attention.",
        Severity::Low,
        &["ops"],
        StageWeights::new(1.0, 1.0, 1.0, 1.0),
        [
            decision(DecisionId::A, "Restart and move on", effects(0, 0.0, 1.0, 0.0)),
            decision(DecisionId::B, "Write a postmortem", effects(-50, 1.0, 0.0, -1.0)),
            decision(DecisionId::C, "Ignore it", effects(0, -1.0, 2.0, 0.0)),
        ],
    )
}

/// The incident catalog shipped with the game.
pub fn default_incident_templates() -> Vec<IncidentTemplate> {
    vec![
        template(
            "prod-db-down",
            "Production database down",
            "The primary database stopped accepting writes during peak hours.",
            Severity::Critical,
            &["tech", "ops"],
            StageWeights::new(0.2, 0.6, 1.0, 1.2),
            [
                decision(DecisionId::A, "Fail over to the replica", effects(-400, 0.0, 2.0, -2.0)),
                decision(DecisionId::B, "Roll back last migration", effects(-150, -2.0, 0.0, -4.0)),
                decision(DecisionId::C, "Call the vendor", effects(-900, 1.0, -1.0, 0.0)),
            ],
        ),
        template(
            "flaky-deploys",
            "Flaky deploys",
            "Every third release breaks something unrelated.",
            Severity::Medium,
            &["tech", "debt"],
            StageWeights::new(0.5, 1.0, 1.0, 0.8),
            [
                decision(DecisionId::A, "Freeze features for a sprint", effects(-200, 0.0, -6.0, -3.0)),
                decision(DecisionId::B, "Add more manual QA", effects(-120, 1.0, 1.0, -2.0)),
                decision(DecisionId::C, "Ship anyway", effects(150, -3.0, 4.0, 0.0)),
            ],
        ),
        template(
            "key-client-churn",
            "Key client threatens to churn",
            "Your largest client is unhappy with response times.",
            Severity::High,
            &["business"],
            StageWeights::new(0.1, 0.5, 1.0, 1.2),
            [
                decision(DecisionId::A, "Offer a discount", effects(-500, 2.0, 0.0, 0.0)),
                decision(DecisionId::B, "Assign a dedicated engineer", effects(-200, 1.0, 1.0, -3.0)),
                decision(DecisionId::C, "Let them go", effects(0, -4.0, 0.0, 1.0)),
            ],
        ),
        template(
            "security-leak",
            "Leaked API key",
            "A credential was committed to a public repository.",
            Severity::High,
            &["tech", "security"],
            StageWeights::new(0.3, 0.7, 1.0, 1.0),
            [
                decision(DecisionId::A, "Rotate keys and disclose", effects(-150, 1.0, 0.0, -1.0)),
                decision(DecisionId::B, "Rotate keys quietly", effects(-100, -1.0, 0.0, 0.0)),
                decision(DecisionId::C, "Hope nobody noticed", effects(0, -5.0, 2.0, 0.0)),
            ],
        ),
        template(
            "team-burnout",
            "Team burnout",
            "Several people are running on fumes after a long crunch.",
            Severity::Medium,
            &["people"],
            StageWeights::new(0.4, 0.8, 1.0, 1.0),
            [
                decision(DecisionId::A, "Mandatory recharge days", effects(-250, 0.0, 0.0, 10.0)),
                decision(DecisionId::B, "Team dinner", effects(-80, 0.0, 0.0, 4.0)),
                decision(DecisionId::C, "Push through", effects(100, 0.0, 2.0, -8.0)),
            ],
        ),
        template(
            "legacy-crash",
            "Legacy module crash",
            "A module nobody understands started crashing nightly.",
            Severity::Low,
            &["debt"],
            StageWeights::new(1.0, 1.0, 0.8, 0.6),
            [
                decision(DecisionId::A, "Rewrite it", effects(-300, 0.0, -8.0, -2.0)),
                decision(DecisionId::B, "Add a cron restart", effects(-20, 0.0, 2.0, 0.0)),
                decision(DecisionId::C, "Document the workaround", effects(-60, 0.0, 0.0, 1.0)),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_ids_unique() {
        let templates = default_incident_templates();
        let ids: HashSet<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_every_template_has_decisions_a_b_c() {
        for t in default_incident_templates() {
            let ids: Vec<_> = t.decisions.iter().map(|d| d.id).collect();
            assert_eq!(ids, DecisionId::ALL.to_vec(), "{}", t.id);
        }
    }

    #[test]
    fn test_catalog_has_tech_related_templates() {
        assert!(default_incident_templates().iter().any(|t| t.is_tech_related()));
        assert!(!fallback_incident_template().is_tech_related());
    }
}
