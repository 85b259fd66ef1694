//! Domain events published by the host application.

use crate::ending::types::EndingId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DomainEventKind {
    ScenarioCompleted { scenario_id: String, success: bool },
    PurchaseMade { item_id: String, cost: i64 },
    EmployeeHired { employee_id: String },
    ExamPassed { exam_id: String, score: u32 },
    ExamFailed { exam_id: String, score: u32 },
    CompanyTicked { tick_index: u64, cash: i64, tech_debt: f64 },
    EndingResolved { ending: EndingId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    #[serde(flatten)]
    pub kind: DomainEventKind,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(kind: DomainEventKind, occurred_at: DateTime<Utc>) -> Self {
        Self { kind, occurred_at }
    }

    /// Scenario, exam and tick events: the ones that can move a streak or
    /// reveal a clean codebase.
    pub fn is_activity(&self) -> bool {
        matches!(
            self.kind,
            DomainEventKind::ScenarioCompleted { .. }
                | DomainEventKind::ExamPassed { .. }
                | DomainEventKind::ExamFailed { .. }
                | DomainEventKind::CompanyTicked { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::synthetic_epoch;

    #[test]
    fn test_event_json_shape() {
        let event = DomainEvent::new(
            DomainEventKind::EmployeeHired {
                employee_id: "e1".to_string(),
            },
            synthetic_epoch(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "employee_hired");
        assert_eq!(json["payload"]["employee_id"], "e1");
        assert!(json.get("occurredAt").is_some());
    }

    #[test]
    fn test_activity_events() {
        let at = synthetic_epoch();
        let tick = DomainEvent::new(
            DomainEventKind::CompanyTicked {
                tick_index: 1,
                cash: 0,
                tech_debt: 0.0,
            },
            at,
        );
        let purchase = DomainEvent::new(
            DomainEventKind::PurchaseMade {
                item_id: "desk".to_string(),
                cost: 10,
            },
            at,
        );
        assert!(tick.is_activity());
        assert!(!purchase.is_activity());
    }
}
