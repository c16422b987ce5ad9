//! Sequence state machine
//!
//! The state is (current position, expected half) plus the history of chosen
//! steps. The first two are always derived from the history and the start
//! position, so every mutation goes through [`SequenceState::recompute`].

use serde::Serialize;

use crate::schemas::{Half, Step};

/// Beats covered by one step (half of an eight-count phrase)
pub const BEATS_PER_STEP: usize = 4;

/// In-progress sequence for one dance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceState {
    start_position: Option<String>,
    current_position: Option<String>,
    expected_half: Half,
    scratch: Vec<Step>,
}

impl SequenceState {
    /// Fresh state at the given start position
    pub fn new(start_position: Option<String>) -> Self {
        SequenceState {
            current_position: start_position.clone(),
            start_position,
            expected_half: Half::Up,
            scratch: Vec::new(),
        }
    }

    /// Rebuild a state from a start position and an already resolved step list.
    ///
    /// Position and half come from the last step, not from any stored value.
    pub fn restore(start_position: Option<String>, steps: Vec<Step>) -> Self {
        let mut state = SequenceState {
            start_position,
            current_position: None,
            expected_half: Half::Up,
            scratch: steps,
        };
        state.recompute();
        state
    }

    pub fn start_position(&self) -> Option<&str> {
        self.start_position.as_deref()
    }

    pub fn current_position(&self) -> Option<&str> {
        self.current_position.as_deref()
    }

    pub fn expected_half(&self) -> Half {
        self.expected_half
    }

    pub fn scratch(&self) -> &[Step] {
        &self.scratch
    }

    pub fn is_empty(&self) -> bool {
        self.scratch.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scratch.len()
    }

    /// Ids of the scratch steps in order
    pub fn step_ids(&self) -> Vec<String> {
        self.scratch.iter().map(|s| s.id.clone()).collect()
    }

    /// Duration of the sequence in beats
    pub fn total_beats(&self) -> usize {
        self.scratch.len() * BEATS_PER_STEP
    }

    /// Count the next step starts on
    pub fn current_beat(&self) -> u32 {
        self.expected_half.beat()
    }

    /// Start over from a (possibly different) start position
    pub fn reset(&mut self, start_position: Option<String>) {
        self.start_position = start_position;
        self.scratch.clear();
        self.recompute();
    }

    /// Append a step.
    ///
    /// The caller must only pass steps offered by
    /// [`find_candidates`](super::find_candidates); nothing is checked here.
    pub fn append(&mut self, step: Step) {
        self.current_position = Some(step.salida.clone());
        self.expected_half = step.effective_half().alternate();
        self.scratch.push(step);
    }

    /// Remove the last step. Does nothing on an empty scratch.
    pub fn undo(&mut self) -> Option<Step> {
        let removed = self.scratch.pop();
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Empty the scratch, keeping the start position
    pub fn clear(&mut self) {
        self.scratch.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        match self.scratch.last() {
            Some(last) => {
                self.current_position = Some(last.salida.clone());
                self.expected_half = last.effective_half().alternate();
            }
            None => {
                self.current_position = self.start_position.clone();
                self.expected_half = Half::Up;
            }
        }
    }
}

impl Default for SequenceState {
    fn default() -> Self {
        Self::new(None)
    }
}
