use crate::commands::build_client;
use crate::commands::result::{CommandResult, UploadResult};
use anyhow::{Context, Result};
use rapidvideo::domain::validator;
use std::path::Path;

/// アップロードコマンドを実行する
///
/// # 引数
/// * `file_path` - アップロード対象の動画ファイルのパス
/// * `proxy` - `--proxy` で指定されたプロキシ
///
/// # エラー
/// このレイヤーでは anyhow::Result を返し、
/// ドメイン層・インフラ層のエラーを集約する。
pub async fn execute(file_path: &str, proxy: Option<&str>) -> Result<CommandResult> {
    // 設定の読み込みより先にファイルを確認する
    let validation =
        validator::validate_upload_file(Path::new(file_path)).context("File validation failed")?;

    let client = build_client(proxy)?;

    eprintln!(
        "Uploading {} ({:.2} MB)...",
        validation.file_name,
        validation.size as f64 / rapidvideo::config::BYTES_PER_MB as f64
    );

    let receipt = client
        .upload_file(file_path)
        .await
        .context("Failed to upload file")?;

    Ok(CommandResult::Upload(UploadResult {
        file_path: validation.path,
        file_name: receipt.file_name,
        file_size: receipt.size,
    }))
}
