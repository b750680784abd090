/// 動画情報コマンド
///
/// 動画コードを指定して、動画が公開中かどうかとそのメタデータを取得します。
use crate::commands::build_client;
use crate::commands::result::{CommandResult, InfoResult};
use anyhow::{Context, Result};

/// 動画情報コマンドを実行する
///
/// # 引数
/// * `code` - 動画コード
/// * `proxy` - `--proxy` で指定されたプロキシ
pub async fn execute(code: &str, proxy: Option<&str>) -> Result<CommandResult> {
    let client = build_client(proxy)?;

    let video = client
        .get_video_info(code)
        .await
        .with_context(|| format!("Failed to fetch video info for '{}'", code))?;

    Ok(CommandResult::Info(InfoResult {
        code: video.code,
        name: video.name,
        description: video.description,
    }))
}
