//! SubmitAnswerHandler - one traversal step of an in-progress assessment.
//!
//! Orchestrates the pure step logic over the ports: validates the answer,
//! appends exactly one response, persists the record, then either returns
//! the next question (moving the position) or resolves the outcome
//! (clearing the position). Validation failures produce zero side effects,
//! and a failed record save leaves the position untouched so the applicant
//! never "progresses" past an unsaved answer.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::assessment::{
    resolve_outcome, step, Assessment, AssessmentError, Question, StepDecision,
};
use crate::domain::foundation::{AssessmentType, ProposerId, QuestionId, Timestamp};
use crate::domain::respondent::{Position, RespondentRecord, Response};
use crate::ports::{PositionStore, QuestionBank, RespondentRepository};

use super::payloads::{QuestionPayload, ResolvedOutcome};

/// Command carrying one submitted answer.
///
/// The question id is optional: when absent the stored position decides
/// which question is being answered.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub proposer_id: ProposerId,
    pub assessment_type: AssessmentType,
    pub answer: String,
    pub question_id: Option<QuestionId>,
}

/// The result of a successful traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// The branch continues; answer this question next.
    NextQuestion(QuestionPayload),
    /// The branch ended; the trail resolved to this outcome (or none).
    Completed { outcome: Option<ResolvedOutcome> },
}

/// Serializes submissions per (proposer, assessment type) so two
/// near-simultaneous answers cannot advance the same position twice.
#[derive(Clone, Default)]
struct StepLocks {
    inner: Arc<Mutex<HashMap<(ProposerId, AssessmentType), Arc<Mutex<()>>>>>,
}

impl StepLocks {
    async fn lock_for(&self, key: (ProposerId, AssessmentType)) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().await;
        map.entry(key).or_default().clone()
    }
}

/// Handler for answer submission - the traversal engine orchestration.
pub struct SubmitAnswerHandler {
    bank: Arc<dyn QuestionBank>,
    records: Arc<dyn RespondentRepository>,
    positions: Arc<dyn PositionStore>,
    step_locks: StepLocks,
}

impl SubmitAnswerHandler {
    pub fn new(
        bank: Arc<dyn QuestionBank>,
        records: Arc<dyn RespondentRepository>,
        positions: Arc<dyn PositionStore>,
    ) -> Self {
        Self {
            bank,
            records,
            positions,
            step_locks: StepLocks::default(),
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<NextStep, AssessmentError> {
        let key = (cmd.proposer_id.clone(), cmd.assessment_type.clone());
        let lock = self.step_locks.lock_for(key).await;
        let _guard = lock.lock().await;

        // 1. Load the assessment.
        let assessment = self
            .bank
            .find_by_type(&cmd.assessment_type)
            .await?
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_type.clone()))?;

        // 2. Resolve which question is being answered.
        let question_id = self.current_question_id(&cmd).await?;
        let question = assessment.question(&question_id).ok_or_else(|| {
            AssessmentError::invalid_state(format!(
                "position references question '{}' absent from assessment '{}'",
                question_id, cmd.assessment_type
            ))
        })?;

        // 3. Validate the answer and decide where the branch goes.
        //    Nothing has been written yet; failures here are side-effect free.
        let decision = step(&assessment, question, &cmd.answer)?;

        // 4. Append exactly one response and persist the record. The save is
        //    the commit point for this step.
        let mut record = self
            .records
            .find(&cmd.proposer_id, &cmd.assessment_type)
            .await?
            .unwrap_or_else(|| {
                RespondentRecord::new(
                    cmd.proposer_id.clone(),
                    cmd.assessment_type.clone(),
                    *assessment.assessment_id(),
                )
            });
        record.append(Response::new(
            question.question_id().clone(),
            question.question_text(),
            cmd.answer.clone(),
            Timestamp::now(),
        ));
        if let Err(err) = self.records.save(&record).await {
            warn!(
                proposer_id = %cmd.proposer_id,
                assessment_type = %cmd.assessment_type,
                question_id = %question_id,
                error = %err,
                "record save failed; position not advanced"
            );
            return Err(err.into());
        }

        // 5. Terminal or next question.
        match decision {
            StepDecision::Terminal => self.complete(&cmd, &assessment, &record).await,
            StepDecision::Next(next) => self.advance(&cmd, next).await,
        }
    }

    async fn current_question_id(
        &self,
        cmd: &SubmitAnswerCommand,
    ) -> Result<QuestionId, AssessmentError> {
        if let Some(question_id) = &cmd.question_id {
            return Ok(question_id.clone());
        }
        let position = self
            .positions
            .get(&cmd.proposer_id)
            .await?
            .ok_or(AssessmentError::MissingSession)?;
        if position.assessment_type() != &cmd.assessment_type {
            return Err(AssessmentError::invalid_state(format!(
                "assessment '{}' is in progress, not '{}'",
                position.assessment_type(),
                cmd.assessment_type
            )));
        }
        Ok(position.question_id().clone())
    }

    async fn complete(
        &self,
        cmd: &SubmitAnswerCommand,
        assessment: &Assessment,
        record: &RespondentRecord,
    ) -> Result<NextStep, AssessmentError> {
        let outcome = resolve_outcome(assessment.outcomes(), record.responses())
            .map(ResolvedOutcome::from_outcome);
        self.positions.clear(&cmd.proposer_id).await?;

        info!(
            proposer_id = %cmd.proposer_id,
            assessment_type = %cmd.assessment_type,
            responses = record.responses().len(),
            outcome = outcome.as_ref().map(|o| o.icd10_code.as_str()).unwrap_or("none"),
            "assessment completed"
        );

        Ok(NextStep::Completed { outcome })
    }

    async fn advance(
        &self,
        cmd: &SubmitAnswerCommand,
        next: &Question,
    ) -> Result<NextStep, AssessmentError> {
        let position = Position::new(
            cmd.assessment_type.clone(),
            next.question_id().clone(),
        );
        self.positions.set(&cmd.proposer_id, position).await?;

        debug!(
            proposer_id = %cmd.proposer_id,
            assessment_type = %cmd.assessment_type,
            next_question = %next.question_id(),
            "assessment advanced"
        );

        Ok(NextStep::NextQuestion(QuestionPayload::from_question(next)))
    }
}
