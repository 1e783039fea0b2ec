//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionBank` - read-only assessment catalog lookup
//! - `RespondentRepository` - upsert persistence of answer records
//! - `PositionStore` - ephemeral per-proposer position tracking

mod position_store;
mod question_bank;
mod respondent_repository;

pub use position_store::PositionStore;
pub use question_bank::QuestionBank;
pub use respondent_repository::RespondentRepository;
