//! In-memory respondent record store.
//!
//! Keyed by (proposer, assessment type); save is a full-record upsert.
//! Suitable for development and tests; production deployments put a
//! durable implementation behind the same port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AssessmentType, DomainError, ProposerId};
use crate::domain::respondent::RespondentRecord;
use crate::ports::RespondentRepository;

type RecordKey = (ProposerId, AssessmentType);

/// In-memory storage for respondent records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRespondentStore {
    records: Arc<RwLock<HashMap<RecordKey, RespondentRecord>>>,
}

impl InMemoryRespondentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored records (useful for tests).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl RespondentRepository for InMemoryRespondentStore {
    async fn find(
        &self,
        proposer_id: &ProposerId,
        assessment_type: &AssessmentType,
    ) -> Result<Option<RespondentRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(proposer_id.clone(), assessment_type.clone()))
            .cloned())
    }

    async fn save(&self, record: &RespondentRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(
            (record.proposer_id().clone(), record.assessment_type().clone()),
            record.clone(),
        );
        Ok(())
    }
}
