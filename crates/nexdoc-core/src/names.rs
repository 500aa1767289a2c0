//! Protocol name disambiguation
//!
//! Display names must be unique within one documentation run, even when the
//! same protocol name shows up in several input trees. The registry is an
//! explicit state object owned by the caller for the lifetime of a run, which
//! keeps assignment deterministic for a given input sequence.

use std::collections::HashMap;

/// Assigns stable, collision-free display names to protocols.
#[derive(Debug, Default)]
pub struct NameRegistry {
    /// Counter for protocols with no name at all
    unknown: u32,
    /// Occurrence count per already-assigned display name
    seen: HashMap<String, u32>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the final display name for a candidate protocol name.
    ///
    /// An empty candidate gets a synthetic `Unknown Protocol - {n}` name; a
    /// repeated candidate gets an occurrence suffix starting at `(2)`.
    pub fn assign(&mut self, candidate: &str) -> String {
        if candidate.is_empty() {
            let name = format!("Unknown Protocol - {}", self.unknown);
            self.unknown += 1;
            return name;
        }

        let count = self.seen.entry(candidate.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            candidate.to_string()
        } else {
            format!("{} ({})", candidate, *count)
        }
    }
}
