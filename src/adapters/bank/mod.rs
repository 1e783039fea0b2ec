//! Question bank adapters - in-memory catalog and file loading.

mod file_loader;
mod in_memory;

pub use file_loader::{load_bank_dir, load_bank_file, BankLoadError};
pub use in_memory::InMemoryQuestionBank;
