/// DynamoDBに日記エントリを保存するリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::JournalEntry;

/// パーティションキーの属性名
pub const PARTITION_KEY_ATTR: &str = "PK1";

/// ソートキーの属性名
pub const SORT_KEY_ATTR: &str = "SK1";

/// エントリ本文の属性名
pub const CONTENT_ATTR: &str = "ENTRY_CONTENT";

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// エントリ永続化用トレイト
///
/// 実際のDynamoDB実装とテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// エントリを1件書き込む
    ///
    /// 存在チェックや条件式は付けない無条件のPutとする。
    async fn save(&self, entry: &JournalEntry) -> Result<(), RepositoryError>;
}

/// EntryRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoEntryRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// エントリテーブル名
    table_name: String,
}

impl DynamoEntryRepository {
    /// 新しいDynamoEntryRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - エントリテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// エントリをDynamoDBアイテム（`PK1`/`SK1`/`ENTRY_CONTENT`）に変換
    fn to_item(entry: &JournalEntry) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                PARTITION_KEY_ATTR.to_string(),
                AttributeValue::S(entry.partition_key().to_string()),
            ),
            (SORT_KEY_ATTR.to_string(), AttributeValue::S(entry.sort_key())),
            (
                CONTENT_ATTR.to_string(),
                AttributeValue::S(entry.content().to_string()),
            ),
        ])
    }
}

#[async_trait]
impl EntryRepository for DynamoEntryRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Self::to_item(entry)))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}
