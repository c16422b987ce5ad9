//! The compatibility rule: which steps may follow the current state
//!
//! A step is a candidate when it starts where the sequence currently stands
//! and occupies the half the sequence expects next.

use crate::schemas::Step;

use super::{Catalog, SequenceState};

/// Check a single step against the state
pub fn is_candidate(step: &Step, state: &SequenceState) -> bool {
    match state.current_position() {
        Some(current) => step.entrada == current && step.effective_half() == state.expected_half(),
        None => false,
    }
}

/// Steps that may be appended next, in catalog order.
///
/// Empty when no start position has been chosen.
pub fn find_candidates<'a>(catalog: &'a Catalog, state: &SequenceState) -> Vec<&'a Step> {
    catalog
        .steps()
        .iter()
        .filter(|step| is_candidate(step, state))
        .collect()
}
