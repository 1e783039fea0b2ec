//! In-memory position store.
//!
//! One position per proposer; a missing key means no assessment is in
//! progress.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProposerId};
use crate::domain::respondent::Position;
use crate::ports::PositionStore;

/// In-memory storage for in-progress positions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionStore {
    positions: Arc<RwLock<HashMap<ProposerId, Position>>>,
}

impl InMemoryPositionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of in-progress positions.
    pub async fn position_count(&self) -> usize {
        self.positions.read().await.len()
    }
}

#[async_trait]
impl PositionStore for InMemoryPositionStore {
    async fn get(&self, proposer_id: &ProposerId) -> Result<Option<Position>, DomainError> {
        let positions = self.positions.read().await;
        Ok(positions.get(proposer_id).cloned())
    }

    async fn set(&self, proposer_id: &ProposerId, position: Position) -> Result<(), DomainError> {
        let mut positions = self.positions.write().await;
        positions.insert(proposer_id.clone(), position);
        Ok(())
    }

    async fn clear(&self, proposer_id: &ProposerId) -> Result<(), DomainError> {
        let mut positions = self.positions.write().await;
        positions.remove(proposer_id);
        Ok(())
    }
}
