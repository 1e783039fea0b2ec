//! Position - the ephemeral "which question is next" pointer.
//!
//! Owned by the position store, never by the traversal engine: the engine
//! takes a position as input and hands back the replacement through its
//! result, so it stays stateless between calls.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentType, QuestionId};

/// The question a proposer must answer next for an in-progress assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    assessment_type: AssessmentType,
    question_id: QuestionId,
}

impl Position {
    pub fn new(assessment_type: AssessmentType, question_id: QuestionId) -> Self {
        Self {
            assessment_type,
            question_id,
        }
    }

    pub fn assessment_type(&self) -> &AssessmentType {
        &self.assessment_type
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_exposes_type_and_question() {
        let pos = Position::new(
            AssessmentType::new("diabetes").unwrap(),
            QuestionId::new("Q2").unwrap(),
        );
        assert_eq!(pos.assessment_type().as_str(), "diabetes");
        assert_eq!(pos.question_id().as_str(), "Q2");
    }

    #[test]
    fn position_round_trips_through_json() {
        let pos = Position::new(
            AssessmentType::new("asthma").unwrap(),
            QuestionId::new("Q1").unwrap(),
        );
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
