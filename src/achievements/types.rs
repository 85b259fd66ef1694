//! Achievement ids, definitions and cumulative progress.

use crate::ending::types::EndingId;
use crate::events::{DomainEvent, DomainEventKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Economy,
    Team,
    Mastery,
    Endings,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Economy,
        AchievementCategory::Team,
        AchievementCategory::Mastery,
        AchievementCategory::Endings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Economy => "Economy",
            AchievementCategory::Team => "Team",
            AchievementCategory::Mastery => "Mastery",
            AchievementCategory::Endings => "Endings",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Purchases
    FirstPurchase, // 1
    Shopper,       // 5
    Collector,     // 20
    // Hires
    FirstHire,   // 1
    TeamBuilder, // 3
    FullHouse,   // 6
    // Activity
    CleanSlate,
    StreakThree,
    StreakTen,
    // Endings
    EndingIpo,
    EndingAcq,
    EndingOss,
    EndingScandal,
    EndingBankrupt,
    AnyEnding,
}

impl AchievementId {
    /// The achievement unlocked by reaching a specific ending.
    pub fn for_ending(ending: EndingId) -> Self {
        match ending {
            EndingId::Ipo => AchievementId::EndingIpo,
            EndingId::Acq => AchievementId::EndingAcq,
            EndingId::Oss => AchievementId::EndingOss,
            EndingId::Scandal => AchievementId::EndingScandal,
            EndingId::Bankrupt => AchievementId::EndingBankrupt,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub secret: bool,
    pub icon: &'static str,
}

/// Cumulative counters the rules read, plus everything already unlocked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementProgress {
    pub purchases: u32,
    pub hires: u32,
    pub scenarios_completed: u32,
    pub exams_passed: u32,
    pub ticks: u64,
    /// Last known tech debt; `None` until a tick has reported one.
    pub tech_debt: Option<f64>,
    /// Consecutive successful scenarios and passed exams.
    pub streak: u32,
    /// Unlocked achievements and when they were unlocked.
    pub unlocked: HashMap<AchievementId, DateTime<Utc>>,
}

impl AchievementProgress {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Folds an event into the counters. Does not unlock anything.
    pub fn apply_event(&mut self, event: &DomainEvent) {
        match &event.kind {
            DomainEventKind::ScenarioCompleted { success, .. } => {
                self.scenarios_completed = self.scenarios_completed.saturating_add(1);
                self.streak = if *success {
                    self.streak.saturating_add(1)
                } else {
                    0
                };
            }
            DomainEventKind::PurchaseMade { .. } => {
                self.purchases = self.purchases.saturating_add(1);
            }
            DomainEventKind::EmployeeHired { .. } => {
                self.hires = self.hires.saturating_add(1);
            }
            DomainEventKind::ExamPassed { .. } => {
                self.exams_passed = self.exams_passed.saturating_add(1);
                self.streak = self.streak.saturating_add(1);
            }
            DomainEventKind::ExamFailed { .. } => {
                self.streak = 0;
            }
            DomainEventKind::CompanyTicked { tech_debt, .. } => {
                self.ticks = self.ticks.saturating_add(1);
                self.tech_debt = Some(*tech_debt);
            }
            DomainEventKind::EndingResolved { .. } => {}
        }
    }

    /// Applies the event, evaluates the rules and records what unlocked.
    /// Returns the newly unlocked ids.
    pub fn record(&mut self, event: &DomainEvent) -> Vec<AchievementId> {
        self.apply_event(event);
        let unlocked = super::rules::evaluate(self, event);
        for id in &unlocked {
            self.unlocked.insert(*id, event.occurred_at);
        }
        unlocked
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = super::data::ALL_ACHIEVEMENTS.len();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Unlocked and total counts for one category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        let defs: Vec<_> = super::data::ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = defs.iter().filter(|a| self.is_unlocked(a.id)).count();
        (unlocked, defs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::synthetic_epoch;

    fn event(kind: DomainEventKind) -> DomainEvent {
        DomainEvent::new(kind, synthetic_epoch())
    }

    #[test]
    fn test_apply_event_counts() {
        let mut progress = AchievementProgress::default();
        progress.apply_event(&event(DomainEventKind::PurchaseMade {
            item_id: "desk".to_string(),
            cost: 10,
        }));
        progress.apply_event(&event(DomainEventKind::EmployeeHired {
            employee_id: "e1".to_string(),
        }));
        progress.apply_event(&event(DomainEventKind::CompanyTicked {
            tick_index: 1,
            cash: 100,
            tech_debt: 4.0,
        }));
        assert_eq!(progress.purchases, 1);
        assert_eq!(progress.hires, 1);
        assert_eq!(progress.ticks, 1);
        assert_eq!(progress.tech_debt, Some(4.0));
    }

    #[test]
    fn test_streak_resets_on_failure() {
        let mut progress = AchievementProgress::default();
        for _ in 0..2 {
            progress.apply_event(&event(DomainEventKind::ExamPassed {
                exam_id: "e".to_string(),
                score: 90,
            }));
        }
        assert_eq!(progress.streak, 2);
        progress.apply_event(&event(DomainEventKind::ScenarioCompleted {
            scenario_id: "s".to_string(),
            success: false,
        }));
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.scenarios_completed, 1);
    }

    #[test]
    fn test_new_progress_has_nothing_unlocked() {
        let progress = AchievementProgress::default();
        assert_eq!(progress.unlocked_count(), 0);
        assert_eq!(progress.unlock_percentage(), 0.0);
        assert_eq!(progress.count_by_category(AchievementCategory::Team), (0, 3));
    }

    #[test]
    fn test_for_ending_covers_every_ending() {
        for ending in EndingId::ALL {
            let id = AchievementId::for_ending(ending);
            assert_ne!(id, AchievementId::AnyEnding);
        }
    }
}
