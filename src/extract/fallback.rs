//! First-success-wins fallback chains.
//!
//! Content locators, extraction strategies and title locators are all
//! ordered candidate lists where the first candidate producing a usable
//! result wins. This module holds that loop once.

use std::fmt::Display;

/// Try each candidate in order and return the first `Some` result.
///
/// `what` names the chain in log output.
pub fn first_success<I, C, T, F>(what: &str, candidates: I, mut attempt: F) -> Option<T>
where
    I: IntoIterator<Item = C>,
    C: Display,
    F: FnMut(&C) -> Option<T>,
{
    for (index, candidate) in candidates.into_iter().enumerate() {
        if let Some(found) = attempt(&candidate) {
            tracing::debug!(chain = what, %candidate, index, "Fallback chain resolved");
            return Some(found);
        }
        tracing::trace!(chain = what, %candidate, index, "Candidate produced nothing");
    }
    tracing::debug!(chain = what, "Fallback chain exhausted");
    None
}
