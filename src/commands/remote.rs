/// リモートアップロードコマンド
///
/// URLを指定してサーバー側に取得させる方式のアップロード。
/// `add` で依頼し、`status` で進捗を確認します。
use crate::commands::build_client;
use crate::commands::result::{CommandResult, RemoteAddResult, RemoteStatusResult};
use anyhow::{Context, Result};
use rapidvideo::domain::formatter;

/// リモートアップロードを依頼する
pub async fn add(url: &str, proxy: Option<&str>) -> Result<CommandResult> {
    let client = build_client(proxy)?;

    let accepted = client
        .request_remote_upload(url)
        .await
        .with_context(|| format!("Remote upload of '{}' was not accepted", url))?;

    Ok(CommandResult::RemoteAdd(RemoteAddResult {
        url: url.to_string(),
        accepted,
    }))
}

/// リモートアップロードの状況を確認する
pub async fn status(remote_id: &str, proxy: Option<&str>) -> Result<CommandResult> {
    let client = build_client(proxy)?;

    let upload_status = client
        .get_remote_upload_status(remote_id)
        .await
        .with_context(|| format!("Failed to check remote upload '{}'", remote_id))?;

    let summary = formatter::format_upload_status(&upload_status);
    let done = upload_status.is_done();
    let object_code = upload_status.object_code().map(str::to_string);

    Ok(CommandResult::RemoteStatus(RemoteStatusResult {
        remote_id: remote_id.to_string(),
        total_filesize: upload_status.total_filesize,
        transfer_filesize: upload_status.transfer_filesize,
        progress: upload_status.progress,
        done,
        object_code,
        summary,
    }))
}
