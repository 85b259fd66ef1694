//! Incident rolling.

use super::data::fallback_incident_template;
use super::types::{ActiveIncident, IncidentTemplate};
use crate::core::balance::BalanceConfig;
use crate::core::clock::synthetic_time;
use crate::core::numeric::finite_or;
use crate::core::rng::SeedRng;
use crate::core::sampler::weighted_pick_index;
use crate::core::stage::CareerStage;

/// Sampling weight of a template at the given stage and tech debt.
pub fn incident_weight(
    template: &IncidentTemplate,
    stage: CareerStage,
    tech_debt: f64,
    config: &BalanceConfig,
) -> f64 {
    let base = template.stage_weights.for_stage(stage);
    if template.is_tech_related() {
        let debt = finite_or(tech_debt, 0.0).max(0.0);
        base * (1.0 + debt * config.incidents.tech_tag_debt_multiplier)
    } else {
        base
    }
}

/// Rolls one incident for `tick_index`.
///
/// Draws from its own stream, `seed:tick:{tick_index}:incident`. If every
/// weight is zero the first template is used; an empty catalog yields the
/// built-in fallback incident.
pub fn generate_incident(
    templates: &[IncidentTemplate],
    stage: CareerStage,
    tech_debt: f64,
    seed: &str,
    tick_index: u64,
    config: &BalanceConfig,
) -> ActiveIncident {
    let tick = tick_index.to_string();
    let mut rng = SeedRng::derived(seed, &["tick", &tick, "incident"]);

    let weights: Vec<f64> = templates
        .iter()
        .map(|t| incident_weight(t, stage, tech_debt, config))
        .collect();

    let fallback;
    let template = match weighted_pick_index(&mut rng, &weights) {
        Some(idx) => &templates[idx],
        None => match templates.first() {
            Some(first) => {
                tracing::debug!(tick_index, "no weighted incident template, using first");
                first
            }
            None => {
                tracing::debug!(tick_index, "incident catalog empty, using fallback");
                fallback = fallback_incident_template();
                &fallback
            }
        },
    };

    instantiate(template, tick_index, config)
}

fn instantiate(template: &IncidentTemplate, tick_index: u64, config: &BalanceConfig) -> ActiveIncident {
    ActiveIncident {
        instance_id: format!("{}-{}", template.id, tick_index),
        template_id: template.id.clone(),
        title: template.title.clone(),
        description: template.description.clone(),
        severity: template.severity,
        tags: template.tags.clone(),
        decisions: template.decisions.clone(),
        tick_index,
        created_at: synthetic_time(tick_index, config.tick.tick_duration_secs),
        resolution: None,
    }
}
