//! Fixed name lists and summary templates for generated candidates.

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Bruno", "Chen", "Dana", "Elif", "Farah", "Goran", "Hana", "Ilya", "Jonas", "Kira",
    "Lena", "Mateo", "Nia", "Oskar", "Priya", "Quinn", "Rosa", "Sami", "Tomas", "Uma", "Viktor",
    "Wen", "Yara",
];

pub const LAST_NAMES: &[&str] = &[
    "Andersen", "Baker", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Horvat", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Rossi", "Sato",
    "Tanaka", "Weber",
];

/// `{role}` is replaced with the lowercase role name.
pub const SUMMARY_TEMPLATES: &[&str] = &[
    "Solid {role} engineer who ships on time.",
    "Curious {role} developer with a taste for clean code.",
    "Pragmatic {role} who has seen a few outages.",
    "Ambitious {role} looking for a team to grow with.",
    "Calm {role} who writes the tests nobody else writes.",
    "Fast-moving {role} with a startup background.",
];
