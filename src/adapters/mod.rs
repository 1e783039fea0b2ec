//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `bank` - question bank catalog (in-memory, JSON files)
//! - `store` - respondent record and position storage (in-memory)
//! - `http` - REST API surface

pub mod bank;
pub mod http;
pub mod store;

pub use bank::{load_bank_dir, load_bank_file, BankLoadError, InMemoryQuestionBank};
pub use store::{InMemoryPositionStore, InMemoryRespondentStore};
