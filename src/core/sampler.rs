//! Weighted sampling over non-negative weights.
//!
//! Weights that are zero, negative or not finite are excluded. A draw over a
//! set with no positive weight yields nothing; callers decide the fallback.

use super::rng::unit;
use rand::RngCore;
use std::cmp::Ordering;

fn usable(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Cumulative-sum roll returning the index of the picked weight.
///
/// Floating point remainder at the top of the range resolves to the last
/// usable entry.
pub fn weighted_pick_index<R: RngCore + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().copied().filter(|w| usable(*w)).sum();
    if total <= 0.0 {
        return None;
    }
    let roll = unit(rng) * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for (idx, &weight) in weights.iter().enumerate() {
        if !usable(weight) {
            continue;
        }
        cumulative += weight;
        last = Some(idx);
        if roll < cumulative {
            return Some(idx);
        }
    }
    last
}

/// Picks one item from `(item, weight)` pairs.
pub fn weighted_pick<'a, T, R: RngCore + ?Sized>(
    rng: &mut R,
    options: &'a [(T, f64)],
) -> Option<&'a T> {
    let weights: Vec<f64> = options.iter().map(|(_, w)| *w).collect();
    weighted_pick_index(rng, &weights).map(|idx| &options[idx].0)
}

/// Weighted sampling without replacement (Efraimidis-Spirakis keys).
///
/// Every entry consumes exactly one draw, in input order, whether or not its
/// weight is usable. The draw sequence is therefore independent of the
/// weights, and raising one entry's weight can only move it earlier in the
/// result. Returns up to `count` distinct indices, best key first.
pub fn weighted_sample_without_replacement<R: RngCore + ?Sized>(
    rng: &mut R,
    weights: &[f64],
    count: usize,
) -> Vec<usize> {
    let mut keyed: Vec<(usize, f64)> = weights
        .iter()
        .enumerate()
        .map(|(idx, &weight)| (idx, weight, unit(rng)))
        .filter(|(_, weight, _)| usable(*weight))
        .map(|(idx, weight, u)| (idx, u.max(f64::MIN_POSITIVE).ln() / weight))
        .collect();

    keyed.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    keyed.into_iter().take(count).map(|(idx, _)| idx).collect()
}
