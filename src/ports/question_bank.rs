//! Question bank port (read side).
//!
//! The catalog of assessments is reference data: loaded once, never
//! mutated by the traversal engine. Implementations may back it with a
//! database, a document store, or files on disk.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentType, DomainError};
use async_trait::async_trait;

/// Read-only catalog of assessments.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Find an assessment by its type tag.
    ///
    /// Returns `None` if no assessment with that tag exists.
    ///
    /// # Errors
    ///
    /// - `PersistenceFailure` on lookup failure
    async fn find_by_type(
        &self,
        assessment_type: &AssessmentType,
    ) -> Result<Option<Assessment>, DomainError>;

    /// List all active assessments, in catalog order.
    async fn list_active(&self) -> Result<Vec<Assessment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn question_bank_is_object_safe() {
        fn _accepts_dyn(_bank: &dyn QuestionBank) {}
    }
}
