/// ドメインサービス: アップロード状況のフォーマット
///
/// リモートアップロードの状況はバイト数がテキストで返ってくるため、
/// 人間向けの表示に変換する。
use crate::api::types::UploadStatus;
use crate::config::BYTES_PER_MB;

const BYTES_PER_KB: u64 = 1024;
const BYTES_PER_GB: u64 = BYTES_PER_MB * 1024;

/// テキストのバイト数を単位付き文字列に変換
///
/// 数値として解釈できない場合は元の文字列をそのまま返します。
pub fn format_bytes(bytes_text: &str) -> String {
    let bytes = match bytes_text.trim().parse::<u64>() {
        Ok(b) => b,
        Err(_) => return bytes_text.to_string(),
    };

    if bytes >= BYTES_PER_GB {
        format!("{:.2} GB", bytes as f64 / BYTES_PER_GB as f64)
    } else if bytes >= BYTES_PER_MB {
        format!("{:.2} MB", bytes as f64 / BYTES_PER_MB as f64)
    } else if bytes >= BYTES_PER_KB {
        format!("{:.2} KB", bytes as f64 / BYTES_PER_KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// アップロード状況を1行のサマリに変換
///
/// 例: "12.00 MB / 48.00 MB (25%)"、完了時は末尾に " done" が付く
pub fn format_upload_status(status: &UploadStatus) -> String {
    let mut line = format!(
        "{} / {}",
        format_bytes(&status.transfer_filesize),
        format_bytes(&status.total_filesize)
    );

    if let Some(percent) = status.progress_percent() {
        line.push_str(&format!(" ({:.0}%)", percent));
    }

    if status.is_done() {
        line.push_str(" done");
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes("512"), "512 B");
        assert_eq!(format_bytes("2048"), "2.00 KB");
        assert_eq!(format_bytes("5242880"), "5.00 MB");
        assert_eq!(format_bytes("1610612736"), "1.50 GB");
    }

    #[test]
    fn test_format_bytes_passthrough() {
        assert_eq!(format_bytes("unknown"), "unknown");
        assert_eq!(format_bytes(""), "");
    }

    #[test]
    fn test_format_upload_status() {
        let status = UploadStatus {
            total_filesize: "4194304".to_string(),
            transfer_filesize: "1048576".to_string(),
            progress: "25".to_string(),
            done: "0".to_string(),
            object_code: String::new(),
        };
        assert_eq!(format_upload_status(&status), "1.00 MB / 4.00 MB (25%)");
    }

    #[test]
    fn test_format_upload_status_done() {
        let status = UploadStatus {
            total_filesize: "100".to_string(),
            transfer_filesize: "100".to_string(),
            progress: "100".to_string(),
            done: "1".to_string(),
            object_code: "XYZ".to_string(),
        };
        assert_eq!(format_upload_status(&status), "100 B / 100 B (100%) done");
    }
}
