//! エラー深刻度と終了コード
//!
//! api / domain / config の各層のエラーはすべてこの分類に写像される。
//! バイナリ側（main.rs）はこの値だけを見て終了コードを決める。
//!
//! **依存方向の原則:**
//! - 各層のエラー型はこのモジュールに依存してOK
//! - このモジュールは他のモジュールに依存しない

use serde::Serialize;
use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// アップロード対象のファイルが無い、プロキシURLの書式が不正など。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// APIキー未設定、設定ファイルの破損、リモート側での認証拒否など。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// 接続失敗、HTTPステータス異常、レスポンスの破損など。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
