//! Question bank configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Question bank configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Directory holding one JSON assessment document per file
    #[serde(default = "default_bank_dir")]
    pub dir: PathBuf,
}

impl BankConfig {
    /// Validate bank configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyBankDir);
        }
        Ok(())
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            dir: default_bank_dir(),
        }
    }
}

fn default_bank_dir() -> PathBuf {
    PathBuf::from("bank")
}
