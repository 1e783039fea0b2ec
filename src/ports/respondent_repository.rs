//! Respondent record repository port (write side).
//!
//! Persists the append-only answer history. `save` is an upsert of the
//! full record; the caller owns the append discipline.

use crate::domain::foundation::{AssessmentType, DomainError, ProposerId};
use crate::domain::respondent::RespondentRecord;
use async_trait::async_trait;

/// Repository port for respondent record persistence.
#[async_trait]
pub trait RespondentRepository: Send + Sync {
    /// Find the record for a (proposer, assessment type) pair.
    ///
    /// Returns `None` if the proposer has not answered anything yet.
    async fn find(
        &self,
        proposer_id: &ProposerId,
        assessment_type: &AssessmentType,
    ) -> Result<Option<RespondentRecord>, DomainError>;

    /// Upsert the full record.
    ///
    /// # Errors
    ///
    /// - `PersistenceFailure` when the record could not be durably saved;
    ///   the caller must not advance the position in that case
    async fn save(&self, record: &RespondentRecord) -> Result<(), DomainError>;
}
