/// ロギング初期化
///
/// ライブラリ側は `tracing` のイベントを出すだけで、subscriber の設定は
/// バイナリの起動時に一度だけここで行う。出力先は stderr
/// （stdout は `--machine` のJSON出力用に空けておく）。
use crate::config::APP_CONFIG;
use tracing_subscriber::EnvFilter;

/// `RAPIDVIDEO_LOG` からフィルタを構築する
///
/// 未設定または不正な値の場合は `APP_CONFIG.logging.default_filter` を使う。
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(APP_CONFIG.logging.env_var)
        .unwrap_or_else(|_| EnvFilter::new(APP_CONFIG.logging.default_filter))
}

/// グローバル subscriber を登録する
///
/// 既に登録済みの場合は何もしない（テストから複数回呼ばれても安全）。
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::new(APP_CONFIG.logging.default_filter);
        assert!(filter.to_string().contains(APP_CONFIG.logging.default_filter));
    }
}
