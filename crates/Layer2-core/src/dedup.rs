//! Value deduplication
//!
//! Variables are duplicates when their values are identical strings. The
//! first variable seen for each value is kept; the output preserves the order
//! of those first occurrences.

use std::collections::HashSet;

use crate::flatten::FlatVariable;

/// Result of a deduplication pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deduplicated {
    pub variables: Vec<FlatVariable>,
    /// Sum over value groups of `group size - 1`
    pub duplicates_removed: usize,
}

pub fn deduplicate(variables: Vec<FlatVariable>) -> Deduplicated {
    let mut seen: HashSet<String> = HashSet::with_capacity(variables.len());
    let mut kept = Vec::with_capacity(variables.len());
    let mut duplicates_removed = 0;

    for variable in variables {
        if seen.insert(variable.value.clone()) {
            kept.push(variable);
        } else {
            duplicates_removed += 1;
        }
    }

    Deduplicated {
        variables: kept,
        duplicates_removed,
    }
}
