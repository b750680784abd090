/// ステータスコマンド
///
/// 現在使われる認証情報（環境変数または config.toml）とプロキシ設定を表示します。
use crate::commands::result::{CommandResult, StatusResult};
use anyhow::{Context, Result};
use rapidvideo::api::proxy::redact_credentials;
use rapidvideo::config::UserConfig;

/// ステータスコマンドを実行
pub async fn execute(proxy: Option<&str>) -> Result<CommandResult> {
    let config = UserConfig::load().context("Failed to load configuration file")?;
    Ok(status_from(&config, proxy))
}

fn status_from(config: &UserConfig, proxy: Option<&str>) -> CommandResult {
    let credentials = config.resolve_credentials().ok();

    CommandResult::Status(StatusResult {
        is_configured: credentials.is_some(),
        api_key: credentials.as_ref().map(|c| c.masked_api_key()),
        user_id: credentials
            .as_ref()
            .and_then(|c| c.user_id().map(str::to_string)),
        proxy: config
            .resolve_proxy(proxy)
            .map(|url| redact_credentials(&url)),
    })
}
