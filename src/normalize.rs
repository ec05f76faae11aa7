//! Cross-variant normalization.
//!
//! Sibling variants of a component usually share a corner radius, but exports often only
//! carry it on some of them. The most common value wins and is copied onto the variants
//! that lack one.

use indexmap::IndexMap;
use tracing::debug;

use crate::types::{ComponentRecord, Mode, StateMap};

/// Most common corner radius across variants; ties go to the value seen first.
/// A variant's radius is that of its first state carrying one.
pub fn consensus_corner_radius(variants: &IndexMap<String, StateMap>) -> Option<String> {
    let mut tally: IndexMap<&str, usize> = IndexMap::new();
    for states in variants.values() {
        if let Some(radius) = states.values().find_map(|state| state.corner_radius()) {
            *tally.entry(radius).or_insert(0) += 1;
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (radius, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((radius, count));
        }
    }
    best.map(|(radius, _)| radius.to_string())
}

/// Copy the consensus radius onto every state of variants that have none.
/// Returns the number of variants changed.
pub fn backfill_corner_radius(variants: &mut IndexMap<String, StateMap>) -> usize {
    let Some(radius) = consensus_corner_radius(variants) else {
        return 0;
    };
    let mut filled = 0;
    for states in variants.values_mut() {
        if states.values().any(|state| state.corner_radius().is_some()) {
            continue;
        }
        for state in states.values_mut() {
            state.layout.get_or_insert_with(Default::default).corner_radius = Some(radius.clone());
        }
        filled += 1;
    }
    filled
}

/// Normalize both modes of a component record.
pub fn normalize_record(record: &mut ComponentRecord) {
    for mode in Mode::ALL {
        let filled = backfill_corner_radius(record.mode_mut(mode));
        if filled > 0 {
            debug!(%mode, variants = filled, "corner radius backfilled");
        }
    }
}
