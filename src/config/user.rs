/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\rapidvideo\config.toml
/// macOS:   /Users/<User>/Library/Application Support/rapidvideo/config.toml
/// Linux:   /home/<user>/.config/rapidvideo/config.toml
///
/// 初回起動時にデフォルトテンプレートから自動的にconfig.tomlを作成します。
use crate::api::auth::Credentials;
use crate::api::proxy;
use crate::config::APP_CONFIG;
use crate::config::error::ConfigError;
use crate::config::permissions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// RapidVideo 認証設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// APIキー
    pub api_key: String,

    /// ユーザーID（アップロード系の操作で必要）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// ユーザー設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// 認証情報
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    /// プロキシURL（例: socks5://127.0.0.1:9050）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// 設定ディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("rapidvideo").join("config.toml"))
    }

    /// 既定の場所からユーザー設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定したパスからユーザー設定を読み込む
    ///
    /// 設定ファイルが存在しない場合は、デフォルトテンプレートから自動的に作成します。
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    /// デフォルト設定ファイルを作成
    fn create_default_config(config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent_dir(config_path)?;

        fs::write(config_path, Self::default_toml_content()).map_err(|e| {
            ConfigError::file_system(
                format!(
                    "Failed to create default config file: {}",
                    config_path.display()
                ),
                e,
            )
        })?;

        Ok(())
    }

    fn default_toml_content() -> &'static str {
        r#"# RapidVideo CLI - User Configuration
# Credentials are set with 'rapidvideo login'.
# RAPIDVIDEO_API_KEY / RAPIDVIDEO_USER_ID override the values stored here.

# Optional proxy for all requests, e.g.
# proxy = "socks5://127.0.0.1:9050"
"#
    }

    fn ensure_parent_dir(config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// 既定の場所にユーザー設定を保存する
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定したパスにユーザー設定を保存する
    ///
    /// APIキーを含むため、所有者のみ読み書き可能なファイルとして書き込みます。
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent_dir(config_path)?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize config", e))?;

        permissions::write_owner_only(config_path, &content)
    }

    /// ユーザー設定を検証
    ///
    /// # 検証内容
    /// - auth.api_key: 空文字列でないこと
    /// - auth.user_id: 指定されている場合は空文字列でないこと
    /// - proxy: 指定されている場合はサポートされたスキームのURLであること
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(auth) = &self.auth {
            Self::validate_auth_field(&auth.api_key, "api_key")?;
            if let Some(user_id) = &auth.user_id {
                Self::validate_auth_field(user_id, "user_id")?;
            }
        }

        if let Some(proxy_url) = &self.proxy {
            proxy::parse_proxy_url(proxy_url)
                .map_err(|e| ConfigError::validation_error(format!("Invalid proxy setting: {}", e)))?;
        }

        Ok(())
    }

    fn validate_auth_field(value: &str, field_name: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::validation_error(format!(
                "Authentication {} cannot be empty. Please run 'rapidvideo login' again.",
                field_name
            )));
        }
        Ok(())
    }

    /// 認証情報を設定
    pub fn set_auth(&mut self, api_key: String, user_id: Option<String>) {
        self.auth = Some(AuthConfig { api_key, user_id });
    }

    /// 認証情報を取得
    ///
    /// # Errors
    /// 認証情報が設定されていない場合に ConfigError::CredentialsNotFound を返します。
    pub fn get_auth(&self) -> Result<&AuthConfig, ConfigError> {
        self.auth.as_ref().ok_or_else(|| {
            ConfigError::credentials_not_found(
                "Authentication credentials not found. Please run 'rapidvideo login' first.",
            )
        })
    }

    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    pub fn clear_auth(&mut self) {
        self.auth = None;
    }

    /// 環境変数と設定ファイルから認証情報を解決する
    ///
    /// 環境変数（RAPIDVIDEO_API_KEY / RAPIDVIDEO_USER_ID）が設定ファイルより優先されます。
    pub fn resolve_credentials(&self) -> Result<Credentials, ConfigError> {
        self.resolve_credentials_with(|name| std::env::var(name).ok())
    }

    /// 任意の変数参照関数で認証情報を解決する
    pub fn resolve_credentials_with<F>(&self, lookup: F) -> Result<Credentials, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = match from_env(APP_CONFIG.env.api_key) {
            Some(key) => key,
            None => self.get_auth()?.api_key.clone(),
        };

        let user_id = from_env(APP_CONFIG.env.user_id)
            .or_else(|| self.auth.as_ref().and_then(|a| a.user_id.clone()));

        let credentials = Credentials::new(api_key);
        Ok(match user_id {
            Some(id) => credentials.with_user_id(id),
            None => credentials,
        })
    }

    /// 使用するプロキシURLを解決する
    ///
    /// 優先順位: 明示的な指定 > RAPIDVIDEO_PROXY > 設定ファイル
    pub fn resolve_proxy(&self, explicit: Option<&str>) -> Option<String> {
        self.resolve_proxy_with(explicit, |name| std::env::var(name).ok())
    }

    pub fn resolve_proxy_with<F>(&self, explicit: Option<&str>, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .map(str::to_string)
            .or_else(|| lookup(APP_CONFIG.env.proxy).filter(|v| !v.trim().is_empty()))
            .or_else(|| self.proxy.clone())
    }
}
