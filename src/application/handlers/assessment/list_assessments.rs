//! ListAssessmentsHandler - the active catalog listing.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::ports::QuestionBank;

use super::payloads::AssessmentSummary;

/// Handler for listing the active assessments.
pub struct ListAssessmentsHandler {
    bank: Arc<dyn QuestionBank>,
}

impl ListAssessmentsHandler {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self { bank }
    }

    pub async fn handle(&self) -> Result<Vec<AssessmentSummary>, AssessmentError> {
        let assessments = self.bank.list_active().await?;
        Ok(assessments
            .iter()
            .map(AssessmentSummary::from_assessment)
            .collect())
    }
}
