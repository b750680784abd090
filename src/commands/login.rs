/// ログインコマンド
///
/// RapidVideo のAPIキーとユーザーIDを受け取り、config.toml に保存します。
/// RapidVideo には認証だけを確認するエンドポイントが無いため、ここでは通信しません。
use crate::commands::result::{CommandResult, LoginResult};
use crate::presentation::input;
use anyhow::{Context, Result};
use rapidvideo::config::UserConfig;
use std::path::Path;

/// ログイン時に入力される認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub api_key: String,
    pub user_id: Option<String>,
}

/// ログインコマンドを実行
///
/// # 引数
/// * `use_stdin` - true の場合は stdin から2行形式で読み込む（スクリプト用）
pub async fn execute(use_stdin: bool) -> Result<CommandResult> {
    let credentials = if use_stdin {
        input::read_credentials_from_stdin()?
    } else {
        input::read_credentials_interactive()?
    };

    let config_path = UserConfig::config_path().context("Failed to locate configuration file")?;
    save_credentials(&config_path, credentials)
}

fn save_credentials(config_path: &Path, credentials: LoginCredentials) -> Result<CommandResult> {
    let mut config =
        UserConfig::load_from(config_path).context("Failed to load configuration file")?;

    let was_logged_in = config.has_auth();
    let has_user_id = credentials.user_id.is_some();

    config.set_auth(credentials.api_key, credentials.user_id);
    config
        .validate()
        .context("The entered credentials are not valid")?;
    config
        .save_to(config_path)
        .context("Failed to save configuration file")?;

    Ok(CommandResult::Login(LoginResult {
        was_logged_in,
        has_user_id,
    }))
}
