//! GetQuestionHandler - read-only question fetch.
//!
//! Lets a client re-fetch a question without touching any state, for
//! example after a page reload mid-assessment.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentType, QuestionId};
use crate::ports::QuestionBank;

use super::payloads::QuestionPayload;

/// Query for one question of one assessment.
#[derive(Debug, Clone)]
pub struct GetQuestionQuery {
    pub assessment_type: AssessmentType,
    pub question_id: QuestionId,
}

/// Handler for read-only question lookups.
pub struct GetQuestionHandler {
    bank: Arc<dyn QuestionBank>,
}

impl GetQuestionHandler {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self { bank }
    }

    pub async fn handle(&self, query: GetQuestionQuery) -> Result<QuestionPayload, AssessmentError> {
        let assessment = self
            .bank
            .find_by_type(&query.assessment_type)
            .await?
            .ok_or_else(|| AssessmentError::not_found(query.assessment_type.clone()))?;

        let question = assessment.question(&query.question_id).ok_or_else(|| {
            AssessmentError::question_not_found(
                query.assessment_type.clone(),
                query.question_id.clone(),
            )
        })?;

        Ok(QuestionPayload::from_question(question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerType, Assessment, Choice, Question};
    use crate::domain::foundation::{AssessmentId, DomainError};
    use async_trait::async_trait;

    struct MockBank {
        assessments: Vec<Assessment>,
    }

    #[async_trait]
    impl QuestionBank for MockBank {
        async fn find_by_type(
            &self,
            assessment_type: &AssessmentType,
        ) -> Result<Option<Assessment>, DomainError> {
            Ok(self
                .assessments
                .iter()
                .find(|a| a.assessment_type() == assessment_type)
                .cloned())
        }

        async fn list_active(&self) -> Result<Vec<Assessment>, DomainError> {
            Ok(self.assessments.clone())
        }
    }

    fn bank() -> Arc<MockBank> {
        Arc::new(MockBank {
            assessments: vec![Assessment::new(
                AssessmentType::new("diabetes").unwrap(),
                AssessmentId::new(),
                vec![Question::new(
                    QuestionId::new("Q1").unwrap(),
                    "Do you have diabetes?",
                    AnswerType::SingleChoice,
                    vec![
                        Choice::new("Yes", None).unwrap(),
                        Choice::new("No", None).unwrap(),
                    ],
                )
                .unwrap()],
                vec![],
            )
            .unwrap()],
        })
    }

    #[tokio::test]
    async fn returns_question_payload_without_next_references() {
        let handler = GetQuestionHandler::new(bank());

        let payload = handler
            .handle(GetQuestionQuery {
                assessment_type: AssessmentType::new("diabetes").unwrap(),
                question_id: QuestionId::new("Q1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(payload.question_text, "Do you have diabetes?");
        assert_eq!(payload.choices, vec!["Yes", "No"]);
    }

    #[tokio::test]
    async fn unknown_assessment_fails_not_found() {
        let handler = GetQuestionHandler::new(bank());

        let result = handler
            .handle(GetQuestionQuery {
                assessment_type: AssessmentType::new("asthma").unwrap(),
                question_id: QuestionId::new("Q1").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AssessmentError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_question_fails_question_not_found() {
        let handler = GetQuestionHandler::new(bank());

        let result = handler
            .handle(GetQuestionQuery {
                assessment_type: AssessmentType::new("diabetes").unwrap(),
                question_id: QuestionId::new("Q9").unwrap(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AssessmentError::QuestionNotFound { .. })
        ));
    }
}
