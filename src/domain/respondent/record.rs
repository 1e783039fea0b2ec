//! Respondent record - the durable answer history for one applicant.
//!
//! # Invariants
//!
//! - responses are append-only: once recorded, never modified or removed
//! - responses appear in submission order
//!
//! The question text is denormalized into each response on purpose: the
//! audit trail must survive later edits to the question bank.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, AssessmentType, ProposerId, QuestionId, Timestamp};

/// One recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    question_id: QuestionId,
    question_text: String,
    answer: String,
    timestamp: Timestamp,
}

impl Response {
    pub fn new(
        question_id: QuestionId,
        question_text: impl Into<String>,
        answer: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            question_id,
            question_text: question_text.into(),
            answer: answer.into(),
            timestamp,
        }
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    /// The question text as displayed when the answer was given.
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

/// Append-only answer log for one (proposer, assessment) attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentRecord {
    proposer_id: ProposerId,
    assessment_type: AssessmentType,
    assessment_id: AssessmentId,
    responses: Vec<Response>,
}

impl RespondentRecord {
    /// Creates an empty record for a fresh attempt.
    pub fn new(
        proposer_id: ProposerId,
        assessment_type: AssessmentType,
        assessment_id: AssessmentId,
    ) -> Self {
        Self {
            proposer_id,
            assessment_type,
            assessment_id,
            responses: Vec::new(),
        }
    }

    pub fn proposer_id(&self) -> &ProposerId {
        &self.proposer_id
    }

    pub fn assessment_type(&self) -> &AssessmentType {
        &self.assessment_type
    }

    pub fn assessment_id(&self) -> &AssessmentId {
        &self.assessment_id
    }

    /// The full answer trail, in submission order.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Appends a response. The only mutation the record supports.
    pub fn append(&mut self, response: Response) {
        self.responses.push(response);
    }

    /// The recorded answer for a question, if any. When a question was
    /// somehow answered more than once the latest answer wins.
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&str> {
        self.responses
            .iter()
            .rev()
            .find(|r| r.question_id() == question_id)
            .map(|r| r.answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RespondentRecord {
        RespondentRecord::new(
            ProposerId::new("proposer-1").unwrap(),
            AssessmentType::new("diabetes").unwrap(),
            AssessmentId::new(),
        )
    }

    fn response(question: &str, answer: &str) -> Response {
        Response::new(
            QuestionId::new(question).unwrap(),
            format!("Text of {}", question),
            answer,
            Timestamp::now(),
        )
    }

    #[test]
    fn new_record_is_empty() {
        assert!(record().responses().is_empty());
    }

    #[test]
    fn append_grows_by_exactly_one() {
        let mut rec = record();
        rec.append(response("Q1", "Yes"));
        assert_eq!(rec.responses().len(), 1);
        rec.append(response("Q2", "No"));
        assert_eq!(rec.responses().len(), 2);
    }

    #[test]
    fn responses_keep_submission_order() {
        let mut rec = record();
        rec.append(response("Q1", "Yes"));
        rec.append(response("Q2", "No"));

        let answers: Vec<&str> = rec.responses().iter().map(|r| r.answer()).collect();
        assert_eq!(answers, vec!["Yes", "No"]);
    }

    #[test]
    fn answer_for_finds_recorded_answer() {
        let mut rec = record();
        rec.append(response("Q1", "Yes"));
        assert_eq!(rec.answer_for(&QuestionId::new("Q1").unwrap()), Some("Yes"));
        assert_eq!(rec.answer_for(&QuestionId::new("Q2").unwrap()), None);
    }

    #[test]
    fn answer_for_prefers_latest_duplicate() {
        let mut rec = record();
        rec.append(response("Q1", "Yes"));
        rec.append(response("Q1", "No"));
        assert_eq!(rec.answer_for(&QuestionId::new("Q1").unwrap()), Some("No"));
    }

    #[test]
    fn response_keeps_denormalized_question_text() {
        let resp = response("Q1", "Yes");
        assert_eq!(resp.question_text(), "Text of Q1");
    }

    #[test]
    fn record_round_trips_through_json() {
        let mut rec = record();
        rec.append(response("Q1", "Yes"));
        let json = serde_json::to_string(&rec).unwrap();
        let back: RespondentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
