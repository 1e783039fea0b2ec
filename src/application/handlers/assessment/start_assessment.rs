//! StartAssessmentHandler - entry point resolution for a fresh attempt.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentType, ProposerId};
use crate::domain::respondent::Position;
use crate::ports::{PositionStore, QuestionBank};

use super::payloads::QuestionPayload;

/// Command to start an assessment for a proposer.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub proposer_id: ProposerId,
    pub assessment_type: AssessmentType,
}

/// Result of starting an assessment: the entry question.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub question: QuestionPayload,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    bank: Arc<dyn QuestionBank>,
    positions: Arc<dyn PositionStore>,
}

impl StartAssessmentHandler {
    pub fn new(bank: Arc<dyn QuestionBank>, positions: Arc<dyn PositionStore>) -> Self {
        Self { bank, positions }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, AssessmentError> {
        let assessment = self
            .bank
            .find_by_type(&cmd.assessment_type)
            .await?
            .filter(|a| a.is_active())
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_type.clone()))?;

        let entry = assessment
            .entry_question()
            .ok_or_else(|| AssessmentError::EmptyAssessment(cmd.assessment_type.clone()))?;

        let position = Position::new(
            cmd.assessment_type.clone(),
            entry.question_id().clone(),
        );
        self.positions.set(&cmd.proposer_id, position).await?;

        info!(
            proposer_id = %cmd.proposer_id,
            assessment_type = %cmd.assessment_type,
            entry_question = %entry.question_id(),
            "assessment started"
        );

        Ok(StartAssessmentResult {
            question: QuestionPayload::from_question(entry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerType, Assessment, Choice, Question};
    use crate::domain::foundation::{AssessmentId, DomainError, QuestionId};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

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
            Ok(self
                .assessments
                .iter()
                .filter(|a| a.is_active())
                .cloned()
                .collect())
        }
    }

    struct MockPositions {
        positions: Mutex<HashMap<ProposerId, Position>>,
    }

    impl MockPositions {
        fn new() -> Self {
            Self {
                positions: Mutex::new(HashMap::new()),
            }
        }

        fn position(&self, proposer_id: &ProposerId) -> Option<Position> {
            self.positions.lock().unwrap().get(proposer_id).cloned()
        }
    }

    #[async_trait]
    impl PositionStore for MockPositions {
        async fn get(&self, proposer_id: &ProposerId) -> Result<Option<Position>, DomainError> {
            Ok(self.positions.lock().unwrap().get(proposer_id).cloned())
        }

        async fn set(
            &self,
            proposer_id: &ProposerId,
            position: Position,
        ) -> Result<(), DomainError> {
            self.positions
                .lock()
                .unwrap()
                .insert(proposer_id.clone(), position);
            Ok(())
        }

        async fn clear(&self, proposer_id: &ProposerId) -> Result<(), DomainError> {
            self.positions.lock().unwrap().remove(proposer_id);
            Ok(())
        }
    }

    fn diabetes_assessment() -> Assessment {
        Assessment::new(
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
        .unwrap()
    }

    fn proposer() -> ProposerId {
        ProposerId::new("proposer-1").unwrap()
    }

    #[tokio::test]
    async fn returns_entry_question_and_sets_position() {
        let bank = Arc::new(MockBank {
            assessments: vec![diabetes_assessment()],
        });
        let positions = Arc::new(MockPositions::new());
        let handler = StartAssessmentHandler::new(bank, positions.clone());

        let result = handler
            .handle(StartAssessmentCommand {
                proposer_id: proposer(),
                assessment_type: AssessmentType::new("diabetes").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(result.question.question_text, "Do you have diabetes?");
        assert_eq!(result.question.choices, vec!["Yes", "No"]);

        let position = positions.position(&proposer()).unwrap();
        assert_eq!(position.question_id().as_str(), "Q1");
        assert_eq!(position.assessment_type().as_str(), "diabetes");
    }

    #[tokio::test]
    async fn fails_not_found_for_unknown_type() {
        let bank = Arc::new(MockBank {
            assessments: vec![],
        });
        let positions = Arc::new(MockPositions::new());
        let handler = StartAssessmentHandler::new(bank, positions.clone());

        let result = handler
            .handle(StartAssessmentCommand {
                proposer_id: proposer(),
                assessment_type: AssessmentType::new("hypertension").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AssessmentError::NotFound(_))));
        assert!(positions.position(&proposer()).is_none());
    }

    #[tokio::test]
    async fn fails_empty_assessment_when_bank_holds_no_questions() {
        // An empty question list is rejected by Assessment::new, but a bank
        // document can still arrive this way; start defends at runtime.
        let json = serde_json::json!({
            "assessment_type": "diabetes",
            "assessment_id": AssessmentId::new(),
            "questions": []
        });
        let empty: Assessment = serde_json::from_value(json).unwrap();
        let bank = Arc::new(MockBank {
            assessments: vec![empty],
        });
        let positions = Arc::new(MockPositions::new());
        let handler = StartAssessmentHandler::new(bank, positions.clone());

        let result = handler
            .handle(StartAssessmentCommand {
                proposer_id: proposer(),
                assessment_type: AssessmentType::new("diabetes").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AssessmentError::EmptyAssessment(_))));
        assert!(positions.position(&proposer()).is_none());
    }

    #[tokio::test]
    async fn inactive_assessment_is_treated_as_not_found() {
        let json = serde_json::json!({
            "assessment_type": "diabetes",
            "assessment_id": AssessmentId::new(),
            "inactive": true,
            "questions": [{
                "question_id": "Q1",
                "question_text": "Do you have diabetes?",
                "answer_type": "single_choice",
                "choices": [{ "choice_text": "Yes" }]
            }]
        });
        let inactive: Assessment = serde_json::from_value(json).unwrap();
        let bank = Arc::new(MockBank {
            assessments: vec![inactive],
        });
        let handler = StartAssessmentHandler::new(bank, Arc::new(MockPositions::new()));

        let result = handler
            .handle(StartAssessmentCommand {
                proposer_id: proposer(),
                assessment_type: AssessmentType::new("diabetes").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(AssessmentError::NotFound(_))));
    }
}
