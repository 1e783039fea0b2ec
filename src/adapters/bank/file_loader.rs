//! File-based question bank loading.
//!
//! Assessments are authored as JSON documents, one per file, in a bank
//! directory. Each document is validated on load; lint findings are
//! logged but do not reject the bank.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::assessment::Assessment;
use crate::domain::foundation::ValidationError;

/// Errors raised while loading bank files.
#[derive(Debug, thiserror::Error)]
pub enum BankLoadError {
    #[error("Failed to read bank directory or file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse bank file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bank file '{path}' violates an invariant: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ValidationError,
    },
}

/// Loads every `*.json` assessment document under `dir`, in file-name
/// order so the catalog order is stable across restarts.
pub fn load_bank_dir(dir: impl AsRef<Path>) -> Result<Vec<Assessment>, BankLoadError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| BankLoadError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut assessments = Vec::with_capacity(paths.len());
    for path in paths {
        assessments.push(load_bank_file(&path)?);
    }

    info!(dir = %dir.display(), count = assessments.len(), "question bank loaded");
    Ok(assessments)
}

/// Loads, validates, and lints a single assessment document.
pub fn load_bank_file(path: impl AsRef<Path>) -> Result<Assessment, BankLoadError> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|source| BankLoadError::Io {
        path: path_display.clone(),
        source,
    })?;

    let assessment: Assessment =
        serde_json::from_str(&contents).map_err(|source| BankLoadError::Parse {
            path: path_display.clone(),
            source,
        })?;

    assessment
        .validate()
        .map_err(|source| BankLoadError::Invalid {
            path: path_display.clone(),
            source,
        })?;

    for finding in assessment.lint() {
        warn!(
            file = %path_display,
            assessment_type = %assessment.assessment_type(),
            "bank lint: {}",
            finding
        );
    }

    Ok(assessment)
}
