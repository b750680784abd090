/// プロキシコマンド
///
/// config.toml に保存するプロキシURLを表示・設定・削除します。
use crate::cli::ProxyAction;
use crate::commands::result::{CommandResult, ProxyChange, ProxyResult};
use anyhow::{Context, Result};
use rapidvideo::api::proxy::{parse_proxy_url, redact_credentials};
use rapidvideo::config::UserConfig;
use std::path::Path;

/// プロキシコマンドを実行
pub async fn execute(action: &ProxyAction) -> Result<CommandResult> {
    let config_path = UserConfig::config_path().context("Failed to locate configuration file")?;
    apply(&config_path, action)
}

fn apply(config_path: &Path, action: &ProxyAction) -> Result<CommandResult> {
    let mut config =
        UserConfig::load_from(config_path).context("Failed to load configuration file")?;

    let change = match action {
        ProxyAction::Show => ProxyChange::Shown,
        ProxyAction::Set(url) => {
            parse_proxy_url(url)?;
            config.proxy = Some(url.trim().to_string());
            ProxyChange::Saved
        }
        ProxyAction::Clear => {
            config.proxy = None;
            ProxyChange::Cleared
        }
    };

    if change != ProxyChange::Shown {
        config
            .save_to(config_path)
            .context("Failed to save configuration file")?;
    }

    Ok(CommandResult::Proxy(ProxyResult {
        action: change,
        proxy: config.proxy.as_deref().map(redact_credentials),
    }))
}
