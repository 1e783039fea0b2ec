//! Outcome resolution over a completed answer trail.
//!
//! First-match-wins over the definition order. Outcomes are not guaranteed
//! mutually exclusive, so the order in the bank document is significant.

use super::aggregate::{Criterion, Outcome};
use crate::domain::respondent::Response;

/// Returns the first outcome all of whose criteria match the trail, or
/// `None` when no outcome matches.
pub fn resolve_outcome<'a>(outcomes: &'a [Outcome], trail: &[Response]) -> Option<&'a Outcome> {
    outcomes
        .iter()
        .find(|outcome| outcome.criteria().iter().all(|c| criterion_matches(c, trail)))
}

fn criterion_matches(criterion: &Criterion, trail: &[Response]) -> bool {
    trail
        .iter()
        .any(|r| r.question_id() == criterion.question_id() && r.answer() == criterion.expected_answer())
}
