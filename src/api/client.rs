/// HTTPクライアント
///
/// RapidVideo API との通信を担当するクライアント。
/// 1回の呼び出しにつき1回のリクエストを送り、リトライやキャッシュは行いません。
use crate::api::auth::Credentials;
use crate::api::endpoint;
use crate::api::error::ApiError;
use crate::api::proxy;
use crate::api::types::{ResponseEnvelope, UploadStatus, VideoMetadata};
use crate::config::APP_CONFIG;
use crate::domain::validator;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};
use url::Url;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, ApiError>;

/// 接続先のベースURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// JSON API のベースURL（末尾スラッシュなし）
    pub api: String,
    /// マルチパートアップロードの送信先URL
    pub upload: String,
}

impl Endpoints {
    pub fn new(api: impl Into<String>, upload: impl Into<String>) -> Self {
        Self {
            api: api.into().trim_end_matches('/').to_string(),
            upload: upload.into(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(APP_CONFIG.api.endpoint, APP_CONFIG.api.upload_endpoint)
    }
}

/// ファイルアップロードの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub file_name: String,
    /// 送信したバイト数
    pub size: u64,
}

/// RapidVideo APIクライアント
pub struct RapidVideo {
    credentials: Credentials,
    endpoints: Endpoints,
    proxy: Option<Url>,
    client: Client,
}

impl RapidVideo {
    /// 本番環境のホストに接続するクライアントを作成
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    /// 任意のベースURLに接続するクライアントを作成
    ///
    /// # Arguments
    /// * `credentials` - APIキーとユーザーID
    /// * `endpoints` - JSON API とアップロードのURL
    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> ApiResult<Self> {
        let client = build_http_client(None)?;

        Ok(Self {
            credentials,
            endpoints,
            proxy: None,
            client,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// 現在設定されているプロキシURL
    pub fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    /// プロキシを設定する
    ///
    /// 以降のリクエストはすべてこのプロキシを経由します。
    /// 失敗した場合は以前のトランスポートがそのまま残ります。
    ///
    /// # Arguments
    /// * `proxy_url` - 例: "socks5://127.0.0.1:9050", "http://proxy:3128"
    pub fn set_proxy(&mut self, proxy_url: &str) -> ApiResult<()> {
        let url = proxy::parse_proxy_url(proxy_url)?;
        let client = build_http_client(Some(&url))?;

        debug!(
            scheme = url.scheme(),
            host = url.host_str().unwrap_or_default(),
            port = url.port(),
            "proxy configured"
        );

        self.client = client;
        self.proxy = Some(url);
        Ok(())
    }

    /// プロキシ設定を解除して直接接続に戻す
    pub fn clear_proxy(&mut self) -> ApiResult<()> {
        self.client = build_http_client(None)?;
        self.proxy = None;
        Ok(())
    }

    /// GETリクエストを送信し、エンベロープをデコードする
    ///
    /// # Arguments
    /// * `endpoint` - ベースURLからのパスとクエリ（例: "/objects.php?ac=info&..."）
    ///
    /// # Errors
    /// - 通信失敗: `Network` / `Timeout`
    /// - HTTPステータスが200以外: `UnexpectedStatus`
    /// - JSONとして不正: `Decode`
    pub async fn get(&self, endpoint: &str) -> ApiResult<ResponseEnvelope> {
        let url = self.build_url(endpoint);
        let logged = endpoint::redact(endpoint, self.credentials.api_key());
        let operation = format!("GET {}", logged);

        debug!(endpoint = %logged, "sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_send(e, &operation))?;

        let status = response.status();
        debug!(endpoint = %logged, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            return Err(ApiError::unexpected_status(logged, status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            ApiError::network(format!(
                "Failed to read response body for {}: {}",
                operation,
                e.without_url()
            ))
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            endpoint: logged,
            source,
        })
    }

    /// 動画の情報を取得する（動画が公開中かどうかの確認）
    ///
    /// # Errors
    /// エンベロープの status が200以外の場合は `Remote`（存在しないコードなど）
    pub async fn get_video_info(&self, code: &str) -> ApiResult<VideoMetadata> {
        let endpoint = endpoint::video_info(self.credentials.api_key(), code);
        let envelope = self.get(&endpoint).await?;
        log_remote_failure(&envelope, endpoint::OBJECTS_PATH);

        envelope.decode_result(endpoint::OBJECTS_PATH)
    }

    /// ローカルの動画ファイルをアップロードする
    ///
    /// `file` パートにファイル本体、`user_id` パートにユーザーIDを入れた
    /// multipart/form-data をアップロード用ホストへPOSTします。
    /// ファイルはメモリに読み込まず、ストリームとして送信します。
    /// ファイルの検証はネットワークに触れる前に行います。
    ///
    /// # Errors
    /// - ファイルが無い: `Validation(FileNotFound)`
    /// - ディレクトリ: `Validation(NotAFile)`
    /// - ユーザーID未設定: `MissingUserId`
    /// - 通信失敗 / HTTPステータスが200以外: `Network` / `UnexpectedStatus`
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> ApiResult<UploadReceipt> {
        let path = path.as_ref();
        let validation = validator::validate_upload_file(path)?;
        let user_id = self.require_user_id()?;

        let file = File::open(path).await.map_err(|source| ApiError::Io {
            context: format!("Failed to open file: {}", validation.path),
            source,
        })?;
        let size = file
            .metadata()
            .await
            .map_err(|source| ApiError::Io {
                context: format!("Failed to read file metadata: {}", validation.path),
                source,
            })?
            .len();

        let body = Body::wrap_stream(ReaderStream::new(file));
        let file_part = Part::stream_with_length(body, size)
            .file_name(validation.file_name.clone())
            .mime_str("application/octet-stream")
            .map_err(|e| ApiError::network(format!("Failed to build multipart body: {}", e)))?;

        let form = Form::new()
            .part("file", file_part)
            .text("user_id", user_id.to_string());

        debug!(file = %validation.path, size, "uploading file");

        let response = self
            .client
            .post(&self.endpoints.upload)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::from_send(e, "POST upload"))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "upload rejected");
            return Err(ApiError::unexpected_status(
                self.endpoints.upload.clone(),
                status.as_u16(),
            ));
        }

        Ok(UploadReceipt {
            file_name: validation.file_name,
            size,
        })
    }

    /// リモートアップロード（URLからのサーバー側取得）を依頼する
    ///
    /// エンベロープの status が200のときだけ `Ok(true)` を返します。
    /// それ以外は `Remote` エラーとしてメッセージを返します。
    pub async fn request_remote_upload(&self, url: &str) -> ApiResult<bool> {
        let user_id = self.require_user_id()?;
        let envelope = self.get(&endpoint::remote_add(user_id, url)).await?;
        log_remote_failure(&envelope, endpoint::REMOTE_PATH);

        envelope.ensure_success()?;
        Ok(true)
    }

    /// リモートアップロードの状況を確認する
    pub async fn get_remote_upload_status(&self, remote_id: &str) -> ApiResult<UploadStatus> {
        let user_id = self.require_user_id()?;
        let envelope = self
            .get(&endpoint::remote_check(user_id, remote_id))
            .await?;
        log_remote_failure(&envelope, endpoint::REMOTE_PATH);

        envelope.decode_result(endpoint::REMOTE_PATH)
    }

    fn require_user_id(&self) -> ApiResult<&str> {
        self.credentials.user_id().ok_or(ApiError::MissingUserId)
    }

    /// URLを構築
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.endpoints.api, endpoint)
    }
}

/// 接続タイムアウトとプロキシを設定したHTTPクライアントを構築
///
/// リクエスト全体のタイムアウトは設定しない。
fn build_http_client(proxy_url: Option<&Url>) -> ApiResult<Client> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(APP_CONFIG.api.connect_timeout_seconds))
        .user_agent(APP_CONFIG.api.user_agent);

    if let Some(url) = proxy_url {
        let proxy = reqwest::Proxy::all(url.as_str())
            .map_err(|e| ApiError::invalid_proxy_url(url.as_str(), e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))
}

fn log_remote_failure(envelope: &ResponseEnvelope, path: &str) {
    if !envelope.is_success() {
        warn!(
            path,
            status = envelope.status,
            message = %envelope.msg,
            "remote reported failure"
        );
    }
}
