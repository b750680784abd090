/// アプリケーション設定モジュール
///
/// コンパイル時定数として定義される静的設定を管理します。
/// 接続先ホストはビルド時に固定され、実行時には変更できません。

/// 1MBあたりのバイト数
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// アプリケーション全体の設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub env: EnvConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// JSON API のベースURL
    pub endpoint: &'static str,

    /// マルチパートアップロードの送信先URL
    pub upload_endpoint: &'static str,

    /// 接続確立のタイムアウト(秒)
    ///
    /// リクエスト全体には上限を設けない。アップロードは1回のPOSTで
    /// ファイル全体を送るため、転送が続いている限り打ち切らない。
    pub connect_timeout_seconds: u64,

    /// User-Agent ヘッダー
    pub user_agent: &'static str,
}

/// 環境変数名
#[derive(Debug, Clone, Copy)]
pub struct EnvConfig {
    pub api_key: &'static str,
    pub user_id: &'static str,
    pub proxy: &'static str,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// フィルタを読み込む環境変数
    pub env_var: &'static str,

    /// 環境変数が無い場合のフィルタ (trace, debug, info, warn, error)
    pub default_filter: &'static str,
}

/// グローバルなアプリケーション設定
pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        endpoint: "https://api.rapidvideo.com/v1",
        upload_endpoint: "https://upload.rapidvideo.com/upload/index.php",
        connect_timeout_seconds: 30,
        user_agent: concat!("rapidvideo/", env!("CARGO_PKG_VERSION")),
    },
    env: EnvConfig {
        api_key: "RAPIDVIDEO_API_KEY",
        user_id: "RAPIDVIDEO_USER_ID",
        proxy: "RAPIDVIDEO_PROXY",
    },
    logging: LoggingConfig {
        env_var: "RAPIDVIDEO_LOG",
        default_filter: "warn",
    },
};
