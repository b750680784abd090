/// インフラ層のエラー定義
///
/// RapidVideo API とのやり取り（プロキシ設定、HTTP通信、JSONデコード、
/// エンベロープのステータス）で発生するエラーを構造化して定義。
/// #[from] / #[source] を使って原因連鎖を保持する。
use crate::api::proxy;
use crate::domain::error::DomainError;
use crate::error_severity::ErrorSeverity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// プロキシURLが不正、または未対応のスキーム
    #[error("invalid proxy URL '{url}': {reason}")]
    InvalidProxyUrl { url: String, reason: String },

    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// HTTPステータスが200以外
    #[error("unexpected HTTP status {status_code} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status_code: u16 },

    /// レスポンスのJSONが不正
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// エンベロープの status が200以外（リモート側のエラー）
    #[error("remote error ({status}): {message}")]
    Remote { status: i64, message: String },

    /// ユーザーIDが必要な操作で未設定
    #[error("this operation requires a user id, but none was configured")]
    MissingUserId,

    /// アップロード前のファイル検証エラー
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// その他のI/Oエラー
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ApiError {
    /// プロキシURLのエラーを作成（パスワードは伏せて保持する）
    pub fn invalid_proxy_url(url: impl AsRef<str>, reason: impl Into<String>) -> Self {
        Self::InvalidProxyUrl {
            url: proxy::redact_credentials(url.as_ref()),
            reason: reason.into(),
        }
    }

    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    pub fn unexpected_status(endpoint: impl Into<String>, status_code: u16) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.into(),
            status_code,
        }
    }

    pub fn remote(status: i64, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// reqwest のエラーを送信時のエラーに変換
    ///
    /// URLにはAPIキーが含まれるため、メッセージからは取り除く。
    pub(crate) fn from_send(error: reqwest::Error, operation: &str) -> Self {
        let error = error.without_url();
        if error.is_timeout() {
            Self::timeout(operation)
        } else if error.is_connect() {
            Self::network(format!("Connection failed for {}: {}", operation, error))
        } else {
            Self::network(format!("Request failed for {}: {}", operation, error))
        }
    }

    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::Validation(DomainError::FileNotFound { .. }))
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidProxyUrl { .. } => ErrorSeverity::UserError,
            Self::Validation(e) => e.severity(),
            Self::MissingUserId | Self::Remote { .. } => ErrorSeverity::ConfigError,
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::UnexpectedStatus { .. }
            | Self::Decode { .. }
            | Self::Io { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidProxyUrl { .. } => {
                Some("Use a proxy URL such as socks5://127.0.0.1:9050 or http://proxy:3128.")
            }
            Self::Network { .. } | Self::Timeout { .. } => {
                Some("Check your network connection and proxy settings.")
            }
            Self::UnexpectedStatus { .. } => {
                Some("The RapidVideo service may be unavailable. Try again later.")
            }
            Self::Remote { .. } => {
                Some("Check the video code or URL and that your API key is valid.")
            }
            Self::MissingUserId => {
                Some("Run 'rapidvideo login' with a user id, or set RAPIDVIDEO_USER_ID.")
            }
            Self::Validation(e) => e.hint(),
            Self::Decode { .. } | Self::Io { .. } => None,
        }
    }
}
