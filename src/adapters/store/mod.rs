//! In-memory implementations of the record and position ports.

mod in_memory_positions;
mod in_memory_respondents;

pub use in_memory_positions::InMemoryPositionStore;
pub use in_memory_respondents::InMemoryRespondentStore;
