pub mod help;
pub mod info;
pub mod login;
pub mod logout;
pub mod proxy;
pub mod remote;
pub mod result;
pub mod status;
pub mod upload;

pub use result::CommandResult;

use anyhow::{Context, Result};
use rapidvideo::RapidVideo;
use rapidvideo::config::UserConfig;

/// 設定ファイルと環境変数からAPIクライアントを組み立てる
///
/// # 引数
/// * `proxy_flag` - `--proxy` で指定されたプロキシ（環境変数・設定ファイルより優先）
pub(crate) fn build_client(proxy_flag: Option<&str>) -> Result<RapidVideo> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let credentials = user_config
        .resolve_credentials()
        .context("Credentials not found. Please run 'rapidvideo login' first.")?;

    let mut client = RapidVideo::new(credentials).context("Failed to create API client")?;

    if let Some(proxy_url) = user_config.resolve_proxy(proxy_flag) {
        client
            .set_proxy(&proxy_url)
            .context("Failed to configure proxy")?;
    }

    Ok(client)
}
