//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // ECONOMY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstPurchase,
        name: "First Purchase",
        description: "Buy something from the shop",
        category: AchievementCategory::Economy,
        secret: false,
        icon: "🛒",
    },
    AchievementDef {
        id: AchievementId::Shopper,
        name: "Shopper",
        description: "Make 5 purchases",
        category: AchievementCategory::Economy,
        secret: false,
        icon: "🛍️",
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Make 20 purchases",
        category: AchievementCategory::Economy,
        secret: false,
        icon: "💎",
    },
    // ═══════════════════════════════════════════════════════════════
    // TEAM
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstHire,
        name: "First Hire",
        description: "Hire your first employee",
        category: AchievementCategory::Team,
        secret: false,
        icon: "🤝",
    },
    AchievementDef {
        id: AchievementId::TeamBuilder,
        name: "Team Builder",
        description: "Hire 3 employees",
        category: AchievementCategory::Team,
        secret: false,
        icon: "👥",
    },
    AchievementDef {
        id: AchievementId::FullHouse,
        name: "Full House",
        description: "Hire 6 employees",
        category: AchievementCategory::Team,
        secret: false,
        icon: "🏢",
    },
    // ═══════════════════════════════════════════════════════════════
    // MASTERY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::CleanSlate,
        name: "Clean Slate",
        description: "Bring tech debt down to exactly zero",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "🧹",
    },
    AchievementDef {
        id: AchievementId::StreakThree,
        name: "On a Roll",
        description: "Succeed 3 times in a row",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::StreakTen,
        name: "Unstoppable",
        description: "Succeed 10 times in a row",
        category: AchievementCategory::Mastery,
        secret: false,
        icon: "⚡",
    },
    // ═══════════════════════════════════════════════════════════════
    // ENDINGS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::EndingIpo,
        name: "Ring the Bell",
        description: "Take the company public",
        category: AchievementCategory::Endings,
        secret: true,
        icon: "🔔",
    },
    AchievementDef {
        id: AchievementId::EndingAcq,
        name: "Acquired",
        description: "Sell the company",
        category: AchievementCategory::Endings,
        secret: true,
        icon: "🤑",
    },
    AchievementDef {
        id: AchievementId::EndingOss,
        name: "Open Legacy",
        description: "Leave your code to the community",
        category: AchievementCategory::Endings,
        secret: true,
        icon: "🌱",
    },
    AchievementDef {
        id: AchievementId::EndingScandal,
        name: "Front Page",
        description: "End your career in a scandal",
        category: AchievementCategory::Endings,
        secret: true,
        icon: "📰",
    },
    AchievementDef {
        id: AchievementId::EndingBankrupt,
        name: "Lights Out",
        description: "Run out of money",
        category: AchievementCategory::Endings,
        secret: true,
        icon: "🕯️",
    },
    AchievementDef {
        id: AchievementId::AnyEnding,
        name: "The End",
        description: "Reach any ending",
        category: AchievementCategory::Endings,
        secret: false,
        icon: "🏁",
    },
];

/// Get the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get all achievements in a category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
