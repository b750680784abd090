/// 認証情報
///
/// RapidVideo API はクエリパラメータでAPIキーとユーザーIDを受け取ります。
/// ヘッダーによる認証は無く、構築後に値が変わることもありません。
use std::fmt;

/// APIキーとユーザーID
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    user_id: Option<String>,
}

impl Credentials {
    /// APIキーのみで認証情報を作成
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: None,
        }
    }

    /// ユーザーIDを付与する
    ///
    /// アップロードとリモートアップロードの操作で必要になります。
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// APIキーをマスキングして表示
    pub fn masked_api_key(&self) -> String {
        mask(&self.api_key)
    }
}

/// 先頭4文字と末尾4文字以外を伏せる（8文字以下は全て伏せる）
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

// APIキーがログやパニックメッセージに出ないようにする
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked_api_key())
            .field("user_id", &self.user_id)
            .finish()
    }
}
