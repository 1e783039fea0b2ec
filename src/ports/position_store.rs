//! Position store port - get/set/clear of in-progress positions.
//!
//! Keyed by proposer identity. A missing key means "no assessment in
//! progress", which is a normal state, not an error.

use crate::domain::foundation::{DomainError, ProposerId};
use crate::domain::respondent::Position;
use async_trait::async_trait;

/// Ephemeral per-proposer position storage.
#[async_trait]
pub trait PositionStore: Send + Sync {
    /// The position for a proposer, or `None` when nothing is in progress.
    async fn get(&self, proposer_id: &ProposerId) -> Result<Option<Position>, DomainError>;

    /// Set (or replace) the position for a proposer.
    async fn set(&self, proposer_id: &ProposerId, position: Position) -> Result<(), DomainError>;

    /// Clear the position for a proposer. Clearing a missing key is a no-op.
    async fn clear(&self, proposer_id: &ProposerId) -> Result<(), DomainError>;
}
