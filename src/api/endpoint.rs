/// エンドポイント文字列の構築
///
/// クエリの値は `application/x-www-form-urlencoded` の規則でエンコードする。
/// リモートアップロード対象のURLに `&` や `=` が含まれていても1つの値として届く。
use url::form_urlencoded;

pub const OBJECTS_PATH: &str = "/objects.php";
pub const REMOTE_PATH: &str = "/remote.php";

/// 動画情報: `/objects.php?ac=info&apikey=<key>&code=<code>`
pub fn video_info(api_key: &str, code: &str) -> String {
    build(OBJECTS_PATH, &[("ac", "info"), ("apikey", api_key), ("code", code)])
}

/// リモートアップロード依頼: `/remote.php?ac=add&user_id=<id>&url=<url>`
pub fn remote_add(user_id: &str, url: &str) -> String {
    build(REMOTE_PATH, &[("ac", "add"), ("user_id", user_id), ("url", url)])
}

/// リモートアップロード状況: `/remote.php?ac=check&user_id=<id>&remote_id=<id>`
pub fn remote_check(user_id: &str, remote_id: &str) -> String {
    build(
        REMOTE_PATH,
        &[("ac", "check"), ("user_id", user_id), ("remote_id", remote_id)],
    )
}

fn build(path: &str, params: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{}?{}", path, query)
}

/// ログ出力用にAPIキーの値を伏せたエンドポイントを返す
pub fn redact(endpoint: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return endpoint.to_string();
    }
    let encoded: String = form_urlencoded::byte_serialize(api_key.as_bytes()).collect();
    endpoint.replace(
        &format!("apikey={}", encoded),
        &format!("apikey={}", crate::api::auth::mask(api_key)),
    )
}
