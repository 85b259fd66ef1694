//! Achievement system module.
//!
//! Rules are evaluated against cumulative counters each time the host
//! publishes a domain event. Persistence of the progress belongs to the host.

pub mod data;
pub mod rules;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use rules::evaluate;
pub use types::{AchievementCategory, AchievementDef, AchievementId, AchievementProgress};
