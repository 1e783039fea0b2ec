//! Respondent module - answer history and in-progress position.

mod position;
mod record;

pub use position::Position;
pub use record::{RespondentRecord, Response};
