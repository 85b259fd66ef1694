//! Unlock rules.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementId, AchievementProgress};
use crate::events::{DomainEvent, DomainEventKind};

const PURCHASE_TIERS: [(u32, AchievementId); 3] = [
    (1, AchievementId::FirstPurchase),
    (5, AchievementId::Shopper),
    (20, AchievementId::Collector),
];

const HIRE_TIERS: [(u32, AchievementId); 3] = [
    (1, AchievementId::FirstHire),
    (3, AchievementId::TeamBuilder),
    (6, AchievementId::FullHouse),
];

const STREAK_TIERS: [(u32, AchievementId); 2] =
    [(3, AchievementId::StreakThree), (10, AchievementId::StreakTen)];

fn tiers(count: u32, table: &[(u32, AchievementId)], out: &mut Vec<AchievementId>) {
    out.extend(
        table
            .iter()
            .filter(|(threshold, _)| count >= *threshold)
            .map(|(_, id)| *id),
    );
}

/// Achievements newly earned by `event`, given counters that already include it.
///
/// Pure: reads the snapshot and never mutates it. Ids already in
/// `progress.unlocked` are never returned, and results follow display order.
pub fn evaluate(progress: &AchievementProgress, event: &DomainEvent) -> Vec<AchievementId> {
    let mut earned = Vec::new();
    match &event.kind {
        DomainEventKind::PurchaseMade { .. } => tiers(progress.purchases, &PURCHASE_TIERS, &mut earned),
        DomainEventKind::EmployeeHired { .. } => tiers(progress.hires, &HIRE_TIERS, &mut earned),
        DomainEventKind::ScenarioCompleted { .. }
        | DomainEventKind::ExamPassed { .. }
        | DomainEventKind::ExamFailed { .. }
        | DomainEventKind::CompanyTicked { .. } => {
            if progress.tech_debt == Some(0.0) {
                earned.push(AchievementId::CleanSlate);
            }
            tiers(progress.streak, &STREAK_TIERS, &mut earned);
        }
        DomainEventKind::EndingResolved { ending } => {
            earned.push(AchievementId::for_ending(*ending));
            earned.push(AchievementId::AnyEnding);
        }
    }

    ALL_ACHIEVEMENTS
        .iter()
        .map(|def| def.id)
        .filter(|id| earned.contains(id) && !progress.is_unlocked(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::synthetic_epoch;
    use crate::ending::types::EndingId;

    fn event(kind: DomainEventKind) -> DomainEvent {
        DomainEvent::new(kind, synthetic_epoch())
    }

    fn purchase() -> DomainEvent {
        event(DomainEventKind::PurchaseMade {
            item_id: "chair".to_string(),
            cost: 20,
        })
    }

    #[test]
    fn test_first_purchase() {
        let progress = AchievementProgress {
            purchases: 1,
            ..Default::default()
        };
        assert_eq!(evaluate(&progress, &purchase()), vec![AchievementId::FirstPurchase]);
    }

    #[test]
    fn test_threshold_jump_unlocks_several() {
        let progress = AchievementProgress {
            purchases: 20,
            ..Default::default()
        };
        assert_eq!(
            evaluate(&progress, &purchase()),
            vec![
                AchievementId::FirstPurchase,
                AchievementId::Shopper,
                AchievementId::Collector
            ]
        );
    }

    #[test]
    fn test_never_re_emits() {
        let mut progress = AchievementProgress {
            hires: 3,
            ..Default::default()
        };
        progress
            .unlocked
            .insert(AchievementId::FirstHire, synthetic_epoch());
        let hired = event(DomainEventKind::EmployeeHired {
            employee_id: "e4".to_string(),
        });
        assert_eq!(evaluate(&progress, &hired), vec![AchievementId::TeamBuilder]);
    }

    #[test]
    fn test_clean_slate_needs_exact_zero() {
        let tick = event(DomainEventKind::CompanyTicked {
            tick_index: 3,
            cash: 10,
            tech_debt: 0.0,
        });
        let clean = AchievementProgress {
            tech_debt: Some(0.0),
            ..Default::default()
        };
        let dirty = AchievementProgress {
            tech_debt: Some(0.5),
            ..Default::default()
        };
        assert_eq!(evaluate(&clean, &tick), vec![AchievementId::CleanSlate]);
        assert!(evaluate(&dirty, &tick).is_empty());
        assert!(evaluate(&AchievementProgress::default(), &tick).is_empty());
    }

    #[test]
    fn test_clean_slate_ignored_on_purchase() {
        let progress = AchievementProgress {
            tech_debt: Some(0.0),
            ..Default::default()
        };
        assert!(evaluate(&progress, &purchase()).is_empty());
    }

    #[test]
    fn test_streaks() {
        let progress = AchievementProgress {
            streak: 10,
            ..Default::default()
        };
        let passed = event(DomainEventKind::ExamPassed {
            exam_id: "e".to_string(),
            score: 80,
        });
        assert_eq!(
            evaluate(&progress, &passed),
            vec![AchievementId::StreakThree, AchievementId::StreakTen]
        );
    }

    #[test]
    fn test_ending_unlocks_specific_and_any() {
        let ending = event(DomainEventKind::EndingResolved {
            ending: EndingId::Scandal,
        });
        assert_eq!(
            evaluate(&AchievementProgress::default(), &ending),
            vec![AchievementId::EndingScandal, AchievementId::AnyEnding]
        );
    }
}
