//! Pure traversal step logic.
//!
//! Given the current question and a submitted answer, decides whether the
//! branch continues (and to which question) or terminates. Stateless:
//! recording the answer and moving the position are the caller's job.

use super::aggregate::{Assessment, Question};
use super::errors::AssessmentError;

/// The decision produced by one traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDecision<'a> {
    /// The matched choice points at another question.
    Next(&'a Question),
    /// The matched choice (or free-text leaf) ends the branch.
    Terminal,
}

/// Validates a submitted answer against the current question and resolves
/// where the traversal goes next.
///
/// # Errors
///
/// - `InvalidAnswer` if the answer matches no offered choice (or is empty
///   for a free-text leaf)
/// - `InvalidState` if the matched choice references a question absent
///   from the assessment — the bank invariant forbids this, but a stale or
///   hand-edited bank must not crash the engine
pub fn step<'a>(
    assessment: &'a Assessment,
    question: &Question,
    answer: &str,
) -> Result<StepDecision<'a>, AssessmentError> {
    if question.is_free_text_leaf() {
        if answer.trim().is_empty() {
            return Err(AssessmentError::invalid_answer(
                question.question_id().clone(),
                answer,
            ));
        }
        return Ok(StepDecision::Terminal);
    }

    let choice = question.find_choice(answer).ok_or_else(|| {
        AssessmentError::invalid_answer(question.question_id().clone(), answer)
    })?;

    match choice.next_question_id() {
        None => Ok(StepDecision::Terminal),
        Some(next_id) => {
            let next = assessment.question(next_id).ok_or_else(|| {
                AssessmentError::invalid_state(format!(
                    "choice '{}' on question '{}' references missing question '{}'",
                    choice.choice_text(),
                    question.question_id(),
                    next_id
                ))
            })?;
            Ok(StepDecision::Next(next))
        }
    }
}
