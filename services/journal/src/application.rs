// アプリケーション層モジュール
pub mod create_entry_handler;

// 再エクスポート
pub use create_entry_handler::{CreateEntryError, CreateEntryHandler};
