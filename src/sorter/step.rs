//! Step outcome reported by a resumed sequence

use rustc_hash::FxHashMap;

/// Visual role of a bar touched by the most recent step.
///
/// The UI maps roles to theme colors; the sequences themselves stay
/// color-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The element that just moved toward its final position
    Primary,
    /// Its partner in the swap or shift
    Secondary,
}

/// Result of resuming a step sequence once.
///
/// The highlight map is valid for exactly one frame and identifies the
/// indices touched by this step.
#[derive(Debug, Clone)]
pub struct Step {
    /// Whether this resume mutated the dataset
    pub mutated: bool,
    /// Transient index -> role overrides for the next frame
    pub highlight: FxHashMap<usize, Highlight>,
    /// Whether the sequence has exhausted its work
    pub done: bool,
}

impl Step {
    /// One mutation, with the touched indices to highlight
    pub fn progress(highlight: FxHashMap<usize, Highlight>) -> Self {
        Step {
            mutated: true,
            highlight,
            done: false,
        }
    }

    /// Sequence exhausted; nothing mutated, nothing highlighted
    pub fn finished() -> Self {
        Step {
            mutated: false,
            highlight: FxHashMap::default(),
            done: true,
        }
    }
}
