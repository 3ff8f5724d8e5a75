/// エントリ作成ハンドラー
///
/// リクエストを検証し、新しいIDでエントリを1件保存してレスポンスを組み立てる。
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    ApiResponse, EntryValidator, JournalEntry, SAVE_FAILED_FEEDBACK, ValidationError,
};
use crate::infrastructure::{EntryRepository, RepositoryError};

/// エントリ作成のエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateEntryError {
    /// リクエスト検証エラー（書き込みは行われていない）
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 保存エラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CreateEntryError {
    /// エラー種別に対応するHTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            CreateEntryError::Validation(_) => 400,
            CreateEntryError::Repository(_) => 500,
        }
    }

    /// レスポンスに変換
    ///
    /// 保存エラーの詳細は呼び出し元に返さない。
    pub fn to_response(&self) -> ApiResponse {
        let feedback = match self {
            CreateEntryError::Validation(err) => err.to_string(),
            CreateEntryError::Repository(_) => SAVE_FAILED_FEEDBACK.to_string(),
        };
        ApiResponse::feedback(self.status_code(), &feedback)
    }
}

/// エントリ作成リクエストを処理するハンドラー
///
/// 呼び出し間で状態を持たないため、コールドスタート時に一度作成して使い回す。
pub struct CreateEntryHandler<ER>
where
    ER: EntryRepository,
{
    /// エントリリポジトリ
    entry_repo: ER,
}

impl<ER> CreateEntryHandler<ER>
where
    ER: EntryRepository,
{
    /// 新しいCreateEntryHandlerを作成
    pub fn new(entry_repo: ER) -> Self {
        Self { entry_repo }
    }

    /// リクエストを処理してレスポンスを返す
    ///
    /// # 処理フロー
    /// 1. `body`と`entry`を検証（失敗時は400、書き込みなし）
    /// 2. 新しいIDを採番してエントリを作成
    /// 3. リポジトリに保存（失敗時は500）
    /// 4. 200レスポンスに受信したリクエストとIDを含めて返す
    pub async fn handle(&self, event: &Value) -> ApiResponse {
        info!(request = %event, "リクエスト受信");

        let response = match self.create(event).await {
            Ok(entry) => ApiResponse::entry_received(event, entry.entry_id().as_str()),
            Err(err) => {
                match &err {
                    CreateEntryError::Validation(reason) => {
                        warn!(feedback = %reason, "リクエスト検証エラー");
                    }
                    CreateEntryError::Repository(cause) => {
                        error!(error = %cause, "エントリの保存に失敗");
                    }
                }
                err.to_response()
            }
        };

        info!(
            status_code = response.status_code,
            body = %response.body,
            "レスポンス送信"
        );

        response
    }

    /// 検証と保存を行い、保存したエントリを返す
    pub async fn create(&self, event: &Value) -> Result<JournalEntry, CreateEntryError> {
        let content = EntryValidator::validate(event)?;

        let entry = JournalEntry::new(content);
        info!(entry_id = %entry.entry_id(), "エントリIDを採番");

        self.entry_repo.save(&entry).await?;

        Ok(entry)
    }
}
