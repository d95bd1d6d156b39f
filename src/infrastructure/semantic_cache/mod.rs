//! Semantic cache infrastructure implementations

mod flat_index;

pub use flat_index::FlatL2Index;
