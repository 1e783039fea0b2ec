//! Outbound payloads shared by the assessment handlers.
//!
//! Next-question references never leave the engine: the payload carries
//! only what the applicant needs to answer.

use crate::domain::assessment::{AnswerType, Assessment, Outcome, Question};
use crate::domain::foundation::{AssessmentId, AssessmentType, OutcomeId, QuestionId};

/// A question as presented to the applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPayload {
    pub question_id: QuestionId,
    pub question_text: String,
    pub answer_type: AnswerType,
    pub choices: Vec<String>,
}

impl QuestionPayload {
    pub fn from_question(question: &Question) -> Self {
        Self {
            question_id: question.question_id().clone(),
            question_text: question.question_text().to_string(),
            answer_type: question.answer_type(),
            choices: question
                .choices()
                .iter()
                .map(|c| c.choice_text().to_string())
                .collect(),
        }
    }
}

/// The resolved terminal classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutcome {
    pub outcome_id: OutcomeId,
    pub description: String,
    pub icd10_code: String,
}

impl ResolvedOutcome {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            outcome_id: outcome.outcome_id().clone(),
            description: outcome.description().to_string(),
            icd10_code: outcome.icd10_code().to_string(),
        }
    }
}

/// Catalog entry for the assessment listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSummary {
    pub assessment_type: AssessmentType,
    pub assessment_id: AssessmentId,
    pub question_count: usize,
}

impl AssessmentSummary {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            assessment_type: assessment.assessment_type().clone(),
            assessment_id: *assessment.assessment_id(),
            question_count: assessment.questions().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Choice;
    use crate::domain::foundation::ValidationError;

    fn question() -> Question {
        Question::new(
            QuestionId::new("Q1").unwrap(),
            "Do you have diabetes?",
            AnswerType::SingleChoice,
            vec![
                Choice::new("Yes", Some(QuestionId::new("Q2").unwrap())).unwrap(),
                Choice::new("No", None).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn question_payload_carries_choice_texts_only() {
        let payload = QuestionPayload::from_question(&question());
        assert_eq!(payload.question_text, "Do you have diabetes?");
        assert_eq!(payload.choices, vec!["Yes", "No"]);
    }

    #[test]
    fn resolved_outcome_copies_classification() -> Result<(), ValidationError> {
        let outcome = Outcome::new(
            OutcomeId::new("O1")?,
            "Type 2 diabetes on insulin",
            "E11.9",
            vec![],
        );
        let resolved = ResolvedOutcome::from_outcome(&outcome);
        assert_eq!(resolved.icd10_code, "E11.9");
        assert_eq!(resolved.description, "Type 2 diabetes on insulin");
        Ok(())
    }
}
