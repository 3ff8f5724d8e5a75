/// DynamoDB接続設定
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// エントリテーブル名を指定する環境変数
pub const ENTRIES_TABLE_ENV: &str = "GRATITUDE_JOURNAL_DDB_TABLE";

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// コールドスタート時に一度だけ読み込み、ハンドラーへ明示的に渡す。
/// テーブル名は環境変数`GRATITUDE_JOURNAL_DDB_TABLE`で設定する。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// エントリテーブル名
    entries_table: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定とテーブル名を読み込んで作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - GRATITUDE_JOURNAL_DDB_TABLE: エントリ用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        // テーブル名が無ければAWS設定を読む前に失敗させる
        let entries_table = Self::entries_table_from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self {
            client,
            entries_table,
        })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, entries_table: String) -> Self {
        Self {
            client,
            entries_table,
        }
    }

    fn entries_table_from_env() -> Result<String, DynamoDbConfigError> {
        match std::env::var(ENTRIES_TABLE_ENV) {
            Ok(name) if !name.is_empty() => Ok(name),
            _ => Err(DynamoDbConfigError::MissingEnvVar(
                ENTRIES_TABLE_ENV.to_string(),
            )),
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// エントリテーブル名を取得
    pub fn entries_table(&self) -> &str {
        &self.entries_table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let error = DynamoDbConfigError::MissingEnvVar("TEST_VAR".to_string());
        assert_eq!(error.to_string(), "Missing environment variable: TEST_VAR");
    }

    #[tokio::test]
    async fn test_dynamodb_config_new() {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        let config = DynamoDbConfig::new(client, "test-entries".to_string());

        assert_eq!(config.entries_table(), "test-entries");
        let _client_ref = config.client();
    }

    #[tokio::test]
    #[serial(journal_env)]
    async fn test_from_env_missing_table() {
        unsafe { remove_env(ENTRIES_TABLE_ENV) };

        let result = DynamoDbConfig::from_env().await;

        match result {
            Err(DynamoDbConfigError::MissingEnvVar(var)) => {
                assert_eq!(var, "GRATITUDE_JOURNAL_DDB_TABLE");
            }
            Ok(_) => panic!("Expected MissingEnvVar"),
        }
    }

    #[tokio::test]
    #[serial(journal_env)]
    async fn test_from_env_empty_table() {
        unsafe { set_env(ENTRIES_TABLE_ENV, "") };

        let result = DynamoDbConfig::from_env().await;

        assert!(matches!(result, Err(DynamoDbConfigError::MissingEnvVar(_))));
        unsafe { remove_env(ENTRIES_TABLE_ENV) };
    }

    #[tokio::test]
    #[serial(journal_env)]
    async fn test_from_env_reads_table_name() {
        unsafe { set_env(ENTRIES_TABLE_ENV, "gratitude-journal") };

        let config = DynamoDbConfig::from_env().await.unwrap();

        assert_eq!(config.entries_table(), "gratitude-journal");
        unsafe { remove_env(ENTRIES_TABLE_ENV) };
    }
}
