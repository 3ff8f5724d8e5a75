// Domain layer modules
pub mod api_response;
pub mod entry_validator;
pub mod journal_entry;

// Re-exports
pub use api_response::{ApiResponse, SAVE_FAILED_FEEDBACK};
pub use entry_validator::{EntryValidator, ValidationError};
pub use journal_entry::{EntryId, JournalEntry};
