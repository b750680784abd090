/// ログアウトコマンド
///
/// 保存されている認証情報を削除します（プロキシ設定は残します）。
use crate::commands::result::{CommandResult, LogoutResult};
use anyhow::{Context, Result};
use rapidvideo::config::UserConfig;
use std::path::Path;

/// ログアウトコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let config_path = UserConfig::config_path().context("Failed to locate configuration file")?;
    logout_at(&config_path)
}

fn logout_at(config_path: &Path) -> Result<CommandResult> {
    let mut config =
        UserConfig::load_from(config_path).context("Failed to load configuration file")?;

    let was_logged_in = config.has_auth();
    if !was_logged_in {
        return Ok(CommandResult::Logout(LogoutResult {
            was_logged_in: false,
        }));
    }

    config.clear_auth();
    config
        .save_to(config_path)
        .context("Failed to save configuration file")?;

    Ok(CommandResult::Logout(LogoutResult {
        was_logged_in: true,
    }))
}
