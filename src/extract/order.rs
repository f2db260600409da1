//! Conversational order reconstruction for role-segregated sources.
//!
//! Some chat UIs expose user and assistant messages through unrelated
//! element types, so a query per role returns two lists with no relative
//! order. The vertical rendered position of each turn restores it.

use super::types::Turn;

/// Merge user and assistant collections into one sequence sorted by position.
///
/// The sort is stable: equal positions keep input order, user collection
/// first. Turns without a usable position sort after all positioned turns.
/// Positions are cleared on the way out; they only exist to order turns.
pub fn reconcile(user: Vec<Turn>, assistant: Vec<Turn>) -> Vec<Turn> {
    let mut turns: Vec<Turn> = user.into_iter().chain(assistant).collect();
    turns.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
    for turn in &mut turns {
        turn.position = None;
    }
    tracing::debug!(turns = turns.len(), "Reconciled turn order from positions");
    turns
}

fn sort_key(turn: &Turn) -> f64 {
    turn.position
        .filter(|p| !p.is_nan())
        .unwrap_or(f64::INFINITY)
}
