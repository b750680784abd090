/// プロキシURLの解析
///
/// SOCKS5 と HTTP(S) プロキシのみを受け付ける。
use crate::api::error::ApiError;
use url::Url;

/// 受け付けるスキーム
pub const SUPPORTED_SCHEMES: &[&str] = &["socks5", "socks5h", "http", "https"];

/// プロキシURLを解析して検証する
///
/// # Errors
/// URLとして解析できない、スキームが未対応、ホストが無い場合に
/// `ApiError::InvalidProxyUrl` を返します。
pub fn parse_proxy_url(proxy_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(proxy_url.trim())
        .map_err(|e| ApiError::invalid_proxy_url(proxy_url, e.to_string()))?;

    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(ApiError::invalid_proxy_url(
            proxy_url,
            format!(
                "unsupported scheme '{}' (expected one of: {})",
                url.scheme(),
                SUPPORTED_SCHEMES.join(", ")
            ),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ApiError::invalid_proxy_url(proxy_url, "missing host"));
    }

    Ok(url)
}

/// プロキシURL中のパスワードを伏せる
///
/// `user:pass@host` は `user:****@host` になる。URLとして解析できない
/// 文字列もそのまま扱えるよう、文字列として処理する。
pub fn redact_credentials(proxy_url: &str) -> String {
    let Some(scheme_end) = proxy_url.find("://") else {
        return proxy_url.to_string();
    };
    let authority_start = scheme_end + "://".len();
    let rest = &proxy_url[authority_start..];
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());

    let Some(at) = rest[..authority_end].rfind('@') else {
        return proxy_url.to_string();
    };

    let userinfo = match rest[..at].split_once(':') {
        Some((user, _)) => format!("{}:****", user),
        None => rest[..at].to_string(),
    };

    format!("{}{}{}", &proxy_url[..authority_start], userinfo, &rest[at..])
}
