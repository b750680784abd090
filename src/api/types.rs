/// API通信用の型定義
///
/// RapidVideo のレスポンスは常に `{status, msg, result}` のエンベロープで返り、
/// `result` の中身はエンドポイントごとに異なります。
/// 一度 `serde_json::Value` として受け取り、呼び出し側が指定した型へ遅延デコードします。
use crate::api::error::ApiError;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// エンベロープが成功を表す status 値
pub const STATUS_OK: i64 = 200;

/// レスポンスエンベロープ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: i64,

    #[serde(default)]
    pub msg: String,

    /// エンドポイントごとに形の異なるペイロード（無い場合は null）
    #[serde(default)]
    pub result: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// status が200以外なら `ApiError::Remote` を返す
    pub fn ensure_success(&self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::remote(self.status, self.msg.clone()))
        }
    }

    /// status を確認したうえで result を指定の型にデコードする
    ///
    /// # Arguments
    /// * `endpoint` - エラーメッセージ用のエンドポイント名
    pub fn decode_result<T: DeserializeOwned>(self, endpoint: &str) -> Result<T, ApiError> {
        self.ensure_success()?;
        serde_json::from_value(self.result).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// 動画のメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// リモートアップロードの状況
///
/// サーバーは数値を文字列で返すことも数値で返すこともあるため、
/// どちらもテキストとして保持します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus {
    #[serde(default, deserialize_with = "string_or_number")]
    pub total_filesize: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub transfer_filesize: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub progress: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub done: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub object_code: String,
}

impl UploadStatus {
    /// 完了フラグ（"1" / "true" / "yes"）
    pub fn is_done(&self) -> bool {
        matches!(
            self.done.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    }

    /// 進捗（%）。数値でなければ None
    pub fn progress_percent(&self) -> Option<f64> {
        self.progress.trim().trim_end_matches('%').parse().ok()
    }

    /// 完了後に作成された動画のコード
    pub fn object_code(&self) -> Option<&str> {
        let code = self.object_code.trim();
        (!code.is_empty()).then_some(code)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(if b { "1" } else { "0" }.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{
            "status": 200,
            "msg": "",
            "result": {"code": "abc", "name": "n", "description": "d"}
        }"#;

        let envelope: ResponseEnvelope = serde_json::from_str(json).expect("Failed to parse");
        assert!(envelope.is_success());

        let video: VideoMetadata = envelope.decode_result("/objects.php").unwrap();
        assert_eq!(
            video,
            VideoMetadata {
                code: "abc".to_string(),
                name: "n".to_string(),
                description: "d".to_string(),
            }
        );
    }

    #[test]
    fn test_envelope_without_result() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"status": 404, "msg": "File not found"}"#).unwrap();
        assert_eq!(envelope.result, Value::Null);

        match envelope.decode_result::<VideoMetadata>("/objects.php") {
            Err(ApiError::Remote { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "File not found");
            }
            other => panic!("Expected Remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_result_type_mismatch() {
        let envelope = ResponseEnvelope {
            status: 200,
            msg: String::new(),
            result: Value::String("not an object".to_string()),
        };
        let result = envelope.decode_result::<VideoMetadata>("/objects.php");
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_upload_status_accepts_numbers() {
        let json = r#"{
            "total_filesize": 1048576,
            "transfer_filesize": "524288",
            "progress": 50,
            "done": "0",
            "object_code": ""
        }"#;

        let status: UploadStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.total_filesize, "1048576");
        assert_eq!(status.transfer_filesize, "524288");
        assert_eq!(status.progress_percent(), Some(50.0));
        assert!(!status.is_done());
        assert_eq!(status.object_code(), None);
    }

    #[test]
    fn test_upload_status_done() {
        let status = UploadStatus {
            done: "true".to_string(),
            object_code: "XyZ123".to_string(),
            progress: "100%".to_string(),
            ..Default::default()
        };
        assert!(status.is_done());
        assert_eq!(status.object_code(), Some("XyZ123"));
        assert_eq!(status.progress_percent(), Some(100.0));
    }

    #[test]
    fn test_upload_status_rejects_objects() {
        let result = serde_json::from_str::<UploadStatus>(r#"{"progress": {"a": 1}}"#);
        assert!(result.is_err());
    }
}
