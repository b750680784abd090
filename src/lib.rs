//! RapidVideo API クライアント
//!
//! 動画情報の取得、ローカルファイルのアップロード、リモートURLアップロードの
//! 依頼と進捗確認を行う薄いHTTPクライアント。
//!
//! ```no_run
//! use rapidvideo::{Credentials, RapidVideo};
//!
//! # async fn run() -> Result<(), rapidvideo::ApiError> {
//! let credentials = Credentials::new("api-key").with_user_id("12345");
//! let mut client = RapidVideo::new(credentials)?;
//! client.set_proxy("socks5://127.0.0.1:9050")?;
//!
//! let video = client.get_video_info("ABCDEFGH").await?;
//! println!("{}: {}", video.code, video.name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error_severity;
pub mod logging;

pub use api::auth::Credentials;
pub use api::client::{Endpoints, RapidVideo, UploadReceipt};
pub use api::error::ApiError;
pub use api::types::{ResponseEnvelope, UploadStatus, VideoMetadata};
pub use error_severity::ErrorSeverity;
