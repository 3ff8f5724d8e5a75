/// エントリ作成Lambdaエントリポイント
///
/// API Gatewayプロキシ統合のイベントを受け取り、
/// 日記エントリをDynamoDBに保存してレスポンスを返す。
use journal::application::CreateEntryHandler;
use journal::domain::ApiResponse;
use journal::infrastructure::{DynamoDbConfig, DynamoEntryRepository, init_logging};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{Instrument, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定はコールドスタート時に一度だけ読み込む
    let config = DynamoDbConfig::from_env().await?;
    info!(table = config.entries_table(), "エントリ作成Lambda関数を初期化");

    let entry_repo =
        DynamoEntryRepository::new(config.client().clone(), config.entries_table().to_string());
    let handler = CreateEntryHandler::new(entry_repo);

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&handler, event)
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// 検証エラー・保存エラーともにレスポンスとして返すため、常に`Ok`となる。
async fn function_handler(
    handler: &CreateEntryHandler<DynamoEntryRepository>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("create_entry", request_id = %context.request_id);

    Ok(handler.handle(&payload).instrument(span).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::Client as DynamoDbClient;
    use lambda_runtime::Context;
    use serde_json::json;

    // 検証エラーの経路ではDynamoDBに到達しないため、実クライアントで構築できる
    async fn create_test_handler() -> CreateEntryHandler<DynamoEntryRepository> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);
        CreateEntryHandler::new(DynamoEntryRepository::new(client, "test-entries".to_string()))
    }

    #[tokio::test]
    async fn test_function_handler_missing_body() {
        let handler = create_test_handler().await;
        let event = LambdaEvent::new(json!({}), Context::default());

        let response = function_handler(&handler, event).await.unwrap();
        let response = serde_json::to_value(response).unwrap();

        assert_eq!(response["statusCode"], 400);
        assert_eq!(response["headers"]["x-custom-header"], "custom header");
        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["feedback"], "you have to include a request body");
    }

    #[tokio::test]
    async fn test_function_handler_missing_entry() {
        let handler = create_test_handler().await;
        let event = LambdaEvent::new(json!({ "body": "{}" }), Context::default());

        let response = function_handler(&handler, event).await.unwrap();
        let response = serde_json::to_value(response).unwrap();

        assert_eq!(response["statusCode"], 400);
        let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["feedback"], "the request body has to include an entry");
    }
}
