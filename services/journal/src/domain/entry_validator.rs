/// エントリ作成リクエストのバリデーション
///
/// Lambdaイベントから`body`を取り出し、`entry`フィールドを検証する。
/// 最初に見つかったエラーで打ち切る。
use serde_json::{Map, Value};
use thiserror::Error;

/// リクエストのバリデーションエラー
///
/// `Display`の文言はそのまま呼び出し元へのfeedbackとして返す。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `body`が存在しない
    #[error("you have to include a request body")]
    MissingBody,
    /// `body`がJSONオブジェクトとして解釈できない
    #[error("the request body has to be a JSON object")]
    MalformedBody,
    /// `body`に`entry`が含まれない
    #[error("the request body has to include an entry")]
    MissingEntry,
    /// `entry`が文字列でない
    #[error("the entry has to be a string")]
    InvalidEntryType,
    /// `entry`が空文字
    #[error("the entry must not be empty")]
    EmptyEntry,
}

/// エントリ作成リクエストのバリデータ
pub struct EntryValidator;

impl EntryValidator {
    /// イベントを検証し、保存するエントリ本文を返す
    ///
    /// # チェック順
    /// 1. `body`が存在する（`null`は欠落扱い）
    /// 2. `body`がJSONオブジェクト（文字列ならパースする）
    /// 3. `entry`が存在する
    /// 4. `entry`が文字列
    /// 5. `entry`が空でない
    pub fn validate(event: &Value) -> Result<String, ValidationError> {
        let body = Self::parse_body(event)?;

        let entry = body.get("entry").ok_or(ValidationError::MissingEntry)?;
        let content = entry.as_str().ok_or(ValidationError::InvalidEntryType)?;

        if content.is_empty() {
            return Err(ValidationError::EmptyEntry);
        }

        Ok(content.to_string())
    }

    /// `body`をJSONオブジェクトとして取り出す
    ///
    /// API Gatewayプロキシ統合では`body`はJSON文字列で届くが、
    /// コンソールからのテスト実行ではオブジェクトのまま届くことがあるため両方受け付ける。
    fn parse_body(event: &Value) -> Result<Map<String, Value>, ValidationError> {
        match event.get("body") {
            None | Some(Value::Null) => Err(ValidationError::MissingBody),
            Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Ok(map),
                _ => Err(ValidationError::MalformedBody),
            },
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => Err(ValidationError::MalformedBody),
        }
    }
}
