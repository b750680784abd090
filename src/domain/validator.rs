/// ドメインサービス: アップロード対象ファイルの検証
///
/// ネットワークに触れる前に、ローカルパスがアップロード可能なファイルを
/// 指しているかを確認する。
use crate::domain::error::DomainError;
use std::path::Path;

/// ファイルのバリデーション結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub path: String,
    pub size: u64,
    /// multipart の `file` パートに付けるファイル名
    pub file_name: String,
}

/// アップロード対象のファイルをバリデーションする
///
/// # エラー
/// - ファイルが存在しない
/// - ディレクトリが指定された
/// - 権限不足などで情報が取得できない
pub fn validate_upload_file(file_path: &Path) -> Result<ValidationResult, DomainError> {
    let display = file_path.display().to_string();

    let metadata = std::fs::metadata(file_path)
        .map_err(|e| DomainError::from_metadata_error(&display, &e))?;

    if metadata.is_dir() {
        return Err(DomainError::not_a_file(display));
    }

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());

    Ok(ValidationResult {
        path: display,
        size: metadata.len(),
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.mp4");

        let err = validate_upload_file(&path).unwrap_err();
        assert!(matches!(err, DomainError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.mp4"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = validate_upload_file(dir.path()).unwrap_err();
        assert!(matches!(err, DomainError::NotAFile { .. }));
    }

    #[test]
    fn test_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"0123456789").unwrap();

        let result = validate_upload_file(&path).unwrap();
        assert_eq!(result.size, 10);
        assert_eq!(result.file_name, "clip.mp4");
        assert!(result.path.ends_with("clip.mp4"));
    }
}
