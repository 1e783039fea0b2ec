//! In-memory question bank adapter.
//!
//! Holds the loaded assessment catalog behind an async RwLock. Reads are
//! concurrent; the catalog is only written at load/reload time.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentType, DomainError};
use crate::ports::QuestionBank;

/// In-memory assessment catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionBank {
    assessments: Arc<RwLock<Vec<Assessment>>>,
}

impl InMemoryQuestionBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank pre-loaded with a catalog, preserving order.
    pub fn with_assessments(assessments: Vec<Assessment>) -> Self {
        Self {
            assessments: Arc::new(RwLock::new(assessments)),
        }
    }

    /// Inserts an assessment, replacing any existing one of the same type.
    pub async fn insert(&self, assessment: Assessment) {
        let mut catalog = self.assessments.write().await;
        catalog.retain(|a| a.assessment_type() != assessment.assessment_type());
        catalog.push(assessment);
    }

    /// Number of assessments in the catalog.
    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }
}

#[async_trait]
impl QuestionBank for InMemoryQuestionBank {
    async fn find_by_type(
        &self,
        assessment_type: &AssessmentType,
    ) -> Result<Option<Assessment>, DomainError> {
        let catalog = self.assessments.read().await;
        Ok(catalog
            .iter()
            .find(|a| a.assessment_type() == assessment_type)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<Assessment>, DomainError> {
        let catalog = self.assessments.read().await;
        Ok(catalog.iter().filter(|a| a.is_active()).cloned().collect())
    }
}
