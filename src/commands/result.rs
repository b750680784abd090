/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    Info(InfoResult),
    Upload(UploadResult),
    RemoteAdd(RemoteAddResult),
    RemoteStatus(RemoteStatusResult),
    Proxy(ProxyResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にログイン済みだったか（上書き更新の場合true）
    pub was_logged_in: bool,
    pub has_user_id: bool,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// APIキーが解決できたか
    pub is_configured: bool,
    /// マスキングされたAPIキー
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub proxy: Option<String>,
}

/// 動画情報コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct InfoResult {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// アップロードコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    pub file_path: String,
    pub file_name: String,
    /// ファイルサイズ（bytes）
    pub file_size: u64,
}

/// リモートアップロード依頼の結果
#[derive(Debug, Clone, Serialize)]
pub struct RemoteAddResult {
    pub url: String,
    pub accepted: bool,
}

/// リモートアップロード状況の結果
#[derive(Debug, Clone, Serialize)]
pub struct RemoteStatusResult {
    pub remote_id: String,
    pub total_filesize: String,
    pub transfer_filesize: String,
    pub progress: String,
    pub done: bool,
    /// 完了後の動画コード
    pub object_code: Option<String>,
    /// 人間向けのサマリ
    pub summary: String,
}

/// プロキシコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ProxyResult {
    pub action: ProxyChange,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyChange {
    Shown,
    Saved,
    Cleared,
}

impl CommandResult {
    /// 成功メッセージを取得（人間向け出力用）
    pub fn success_message(&self) -> String {
        match self {
            CommandResult::Login(r) => {
                if r.was_logged_in {
                    "Login credentials updated!".to_string()
                } else {
                    "Login successful!".to_string()
                }
            }
            CommandResult::Logout(r) => {
                if r.was_logged_in {
                    "Logged out successfully.".to_string()
                } else {
                    "Already logged out.".to_string()
                }
            }
            CommandResult::Status(r) => {
                if r.is_configured {
                    "Credentials configured".to_string()
                } else {
                    "Not configured".to_string()
                }
            }
            CommandResult::Info(_) => "Video is online.".to_string(),
            CommandResult::Upload(_) => "Upload completed successfully!".to_string(),
            CommandResult::RemoteAdd(_) => "Remote upload requested.".to_string(),
            CommandResult::RemoteStatus(r) => {
                if r.done {
                    "Remote upload finished.".to_string()
                } else {
                    "Remote upload in progress.".to_string()
                }
            }
            CommandResult::Proxy(r) => match r.action {
                ProxyChange::Shown => "Current proxy setting".to_string(),
                ProxyChange::Saved => "Proxy saved.".to_string(),
                ProxyChange::Cleared => "Proxy cleared.".to_string(),
            },
            CommandResult::Help => "".to_string(),
        }
    }
}
