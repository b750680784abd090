/// ドメイン層のエラー定義
///
/// アップロード前のローカルファイル検証で発生するエラー。
/// I/O エラーそのものは保持せず、ユーザーが対処できる形に分類して持つ。
use crate::error_severity::ErrorSeverity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ファイルが見つからない
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// ディレクトリが指定された
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },

    /// 存在はするが読めない（権限不足など）
    #[error("cannot read '{path}': {reason}")]
    Unreadable { path: String, reason: String },
}

impl DomainError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// メタデータ取得時の I/O エラーを分類する
    pub fn from_metadata_error(path: impl Into<String>, error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            _ => Self::Unreadable {
                path: path.into(),
                reason: error.to_string(),
            },
        }
    }

    /// 対象のパス
    pub fn path(&self) -> &str {
        match self {
            Self::FileNotFound { path } | Self::NotAFile { path } | Self::Unreadable { path, .. } => {
                path
            }
        }
    }

    /// エラーの深刻度を返す
    ///
    /// どれもパスを直せば解決するのでユーザーエラー
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::UserError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.")
            }
            Self::NotAFile { .. } => Some("Please specify a file, not a directory."),
            Self::Unreadable { .. } => Some("Check that you have permission to read the file."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_classification() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(
            DomainError::from_metadata_error("a.mp4", &not_found),
            DomainError::file_not_found("a.mp4")
        );

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DomainError::from_metadata_error("b.mp4", &denied);
        assert!(matches!(err, DomainError::Unreadable { .. }));
        assert_eq!(err.path(), "b.mp4");
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_all_variants_are_user_errors_with_hints() {
        let errors = [
            DomainError::file_not_found("x"),
            DomainError::not_a_file("x"),
            DomainError::from_metadata_error(
                "x",
                &io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            ),
        ];
        for err in &errors {
            assert_eq!(err.severity().exit_code(), 1);
            assert!(err.hint().is_some());
        }
    }
}
