//! Ending classification. The first matching branch wins:
//! bankrupt, scandal, ipo, acq, oss, and oss again as the fallback.

use super::types::{EndingId, EndingInput, EndingResult, EndingStats};
use crate::core::numeric::finite_or;

/// Combined score in `0..=1000`, attached to every ending.
pub fn ending_score(cash: i64, reputation: f64, tech_debt: f64) -> u32 {
    let raw = reputation * 2.0 + cash as f64 / 200.0 - tech_debt * 1.5;
    finite_or(raw, 0.0).clamp(0.0, 1000.0).round() as u32
}

fn classify(input: &EndingInput, reputation: f64, tech_debt: f64) -> EndingId {
    let cash = input.cash;
    let finale = input.finale_complete;
    let flags = input.flags;

    if cash < 0 || (cash < 500 && tech_debt > 80.0) {
        EndingId::Bankrupt
    } else if reputation <= 10.0 || (tech_debt >= 90.0 && flags.aggressive) {
        EndingId::Scandal
    } else if finale && cash >= 20_000 && reputation >= 70.0 && tech_debt <= 40.0 {
        EndingId::Ipo
    } else if finale && cash >= 10_000 && reputation >= 50.0 && tech_debt <= 60.0 {
        EndingId::Acq
    } else {
        // The open-source branch and the fallback land on the same ending.
        EndingId::Oss
    }
}

/// Classifies the final company state.
pub fn resolve_ending(input: &EndingInput) -> EndingResult {
    let reputation = finite_or(input.reputation, 0.0);
    let tech_debt = finite_or(input.tech_debt, 0.0);
    let ending = classify(input, reputation, tech_debt);
    let score = ending_score(input.cash, reputation, tech_debt);
    tracing::debug!(ending = ending.as_str(), score, "ending resolved");

    EndingResult {
        ending,
        title: ending.title().to_string(),
        summary: ending.summary().to_string(),
        stats: EndingStats {
            cash: input.cash,
            reputation,
            tech_debt,
            morale: finite_or(input.morale, 0.0),
            company_level: input.company_level,
            counters: input.counters,
            score,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ending::types::EndingFlags;

    fn ipo_ready() -> EndingInput {
        EndingInput {
            cash: 25_000,
            reputation: 80.0,
            tech_debt: 20.0,
            morale: 70.0,
            company_level: 4,
            finale_complete: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_bankrupt_first() {
        let input = EndingInput {
            cash: -1,
            ..Default::default()
        };
        assert_eq!(resolve_ending(&input).ending, EndingId::Bankrupt);

        let low_cash_high_debt = EndingInput {
            cash: 400,
            reputation: 90.0,
            tech_debt: 81.0,
            ..Default::default()
        };
        assert_eq!(resolve_ending(&low_cash_high_debt).ending, EndingId::Bankrupt);
    }

    #[test]
    fn test_scandal_before_success() {
        let input = EndingInput {
            cash: 30_000,
            reputation: 0.0,
            ..Default::default()
        };
        assert_eq!(resolve_ending(&input).ending, EndingId::Scandal);

        let reckless = EndingInput {
            tech_debt: 95.0,
            flags: EndingFlags {
                aggressive: true,
                ..Default::default()
            },
            ..ipo_ready()
        };
        assert_eq!(resolve_ending(&reckless).ending, EndingId::Scandal);
    }

    #[test]
    fn test_ipo_and_acq() {
        assert_eq!(resolve_ending(&ipo_ready()).ending, EndingId::Ipo);
        let smaller = EndingInput {
            cash: 12_000,
            reputation: 55.0,
            tech_debt: 50.0,
            ..ipo_ready()
        };
        assert_eq!(resolve_ending(&smaller).ending, EndingId::Acq);
    }

    #[test]
    fn test_unfinished_finale_falls_back_to_oss() {
        let input = EndingInput {
            finale_complete: false,
            ..ipo_ready()
        };
        assert_eq!(resolve_ending(&input).ending, EndingId::Oss);
    }

    #[test]
    fn test_score_formula_and_clamp() {
        // 80*2 + 25000/200 - 20*1.5 = 255
        assert_eq!(resolve_ending(&ipo_ready()).stats.score, 255);
        assert_eq!(ending_score(-10_000, 0.0, 100.0), 0);
        assert_eq!(ending_score(1_000_000, 100.0, 0.0), 1000);
    }

    #[test]
    fn test_result_carries_title() {
        let result = resolve_ending(&ipo_ready());
        assert_eq!(result.title, EndingId::Ipo.title());
        assert_eq!(serde_json::to_string(&result.ending).unwrap(), "\"ipo\"");
    }
}
