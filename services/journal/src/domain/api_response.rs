/// API Gatewayプロキシ統合向けのレスポンス
///
/// `{statusCode, headers, body}`形式。`body`はJSONエンコード済みの文字列。
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// 全レスポンスに付与するカスタムヘッダー名
pub const CUSTOM_HEADER_NAME: &str = "x-custom-header";

/// カスタムヘッダーの値
pub const CUSTOM_HEADER_VALUE: &str = "custom header";

/// 作成成功時のメッセージ
pub const ENTRY_RECEIVED_MESSAGE: &str = "Entry received!";

/// 保存失敗時に返すfeedback
pub const SAVE_FAILED_FEEDBACK: &str = "the entry could not be saved";

/// Lambdaが返却するHTTPレスポンス
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// 任意のステータスとJSONボディでレスポンスを作成
    pub fn new(status_code: u16, body: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            CUSTOM_HEADER_NAME.to_string(),
            CUSTOM_HEADER_VALUE.to_string(),
        );

        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    /// 200 OK: 受信メッセージ、受信したリクエスト、採番したIDを返す
    pub fn entry_received(input: &Value, entry_id: &str) -> Self {
        Self::new(
            200,
            &json!({
                "message": ENTRY_RECEIVED_MESSAGE,
                "input": input,
                "entryId": entry_id,
            }),
        )
    }

    /// エラー応答: `{"feedback": <message>}`を返す
    pub fn feedback(status_code: u16, feedback: &str) -> Self {
        Self::new(status_code, &json!({ "feedback": feedback }))
    }
}
