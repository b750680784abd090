/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読、stderr）または
/// 機械向け（JSON、stdout）形式で出力する責務を担います。
use crate::commands::result::{CommandResult, ProxyChange};
use anyhow::Result;
use rapidvideo::domain::formatter::format_bytes;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "rapidvideo
Check, upload and remote-upload videos on RapidVideo from the command line

Usage:
  rapidvideo [--machine] [--proxy <url>] <command> [args...]

Global Flags (before or after the command):
  --machine          - Output machine-readable JSON to stdout (for scripting)
                       Works for both success and error cases
  --proxy <url>      - Send requests through a proxy for this command
                       e.g. socks5://127.0.0.1:9050 or http://proxy:3128

Available commands:
  login [--stdin]    - Save API key and user id
                       With --stdin: line 1 = API key, line 2 = user id (optional)
  logout             - Remove saved credentials
  status             - Show the credentials and proxy that will be used
  info <code>        - Check whether a video is online and show its metadata
  upload <file>      - Upload a local video file
  remote-add <url>   - Ask RapidVideo to fetch a video from a URL
  remote-status <id> - Check the progress of a remote upload
  proxy [<url>|--clear]
                     - Show, save or remove the default proxy
  help               - Display this help message

Environment:
  RAPIDVIDEO_API_KEY, RAPIDVIDEO_USER_ID  - Override saved credentials
  RAPIDVIDEO_PROXY                        - Override the saved proxy
  RAPIDVIDEO_LOG                          - Log filter (e.g. debug)";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Output
/// * `machine_output = false`: 人間向けの詳細メッセージ（stderr）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        println!("{}", serde_json::to_string(&machine_readable(result))?);
    } else {
        output_human_readable(result);
    }
    Ok(())
}

/// エラーを適切な形式で出力する
///
/// # Arguments
/// * `error` - コマンドから返されたエラー（原因連鎖を含む）
/// * `exit_code` - 終了コード
/// * `hint` - ユーザー向けのヒント
pub fn output_error(
    error: &anyhow::Error,
    exit_code: i32,
    hint: Option<&str>,
    machine_output: bool,
) {
    if machine_output {
        println!("{}", machine_readable_error(error, exit_code, hint));
        return;
    }

    eprintln!("Error: {}", error);

    let chain: Vec<_> = error.chain().skip(1).collect();
    if !chain.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    if let Some(hint) = hint {
        eprintln!("\nHint: {}", hint);
    }
}

fn machine_readable_error(
    error: &anyhow::Error,
    exit_code: i32,
    hint: Option<&str>,
) -> serde_json::Value {
    let causes: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();
    serde_json::json!({
        "success": false,
        "error": error.to_string(),
        "causes": causes,
        "exit_code": exit_code,
        "hint": hint,
    })
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// stdout はパイプライン用に空けておく。
fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Login(r) => {
            eprintln!();
            eprintln!("{}", result.success_message());
            eprintln!("Credentials have been saved.");
            if !r.has_user_id {
                eprintln!("No user id was given: 'upload' and 'remote-*' commands need one.");
            }
        }
        CommandResult::Logout(r) => {
            eprintln!("{}", result.success_message());
            if r.was_logged_in {
                eprintln!("Saved credentials have been removed.");
            }
        }
        CommandResult::Status(r) => {
            eprintln!();
            eprintln!("{}", result.success_message());
            match &r.api_key {
                Some(key) => eprintln!("API Key: {}", key),
                None => eprintln!("No API key found. Run 'rapidvideo login' or set RAPIDVIDEO_API_KEY."),
            }
            eprintln!("User ID: {}", r.user_id.as_deref().unwrap_or("(not set)"));
            eprintln!("Proxy:   {}", r.proxy.as_deref().unwrap_or("(direct)"));
        }
        CommandResult::Info(r) => {
            eprintln!();
            eprintln!("{}", result.success_message());
            eprintln!("Code:        {}", r.code);
            eprintln!("Name:        {}", r.name);
            if !r.description.is_empty() {
                eprintln!("Description: {}", r.description);
            }
        }
        CommandResult::Upload(r) => {
            eprintln!("\n{}", result.success_message());
            eprintln!("---");
            eprintln!("File: {}", r.file_path);
            eprintln!("Size: {}", format_bytes(&r.file_size.to_string()));
            eprintln!("---");
        }
        CommandResult::RemoteAdd(r) => {
            eprintln!("{}", result.success_message());
            eprintln!("URL: {}", r.url);
            eprintln!("Check progress with 'rapidvideo remote-status <id>'.");
        }
        CommandResult::RemoteStatus(r) => {
            eprintln!("{}", result.success_message());
            eprintln!("Remote ID: {}", r.remote_id);
            eprintln!("Progress:  {}", r.summary);
            if let Some(code) = &r.object_code {
                eprintln!("Video code: {}", code);
            }
        }
        CommandResult::Proxy(r) => {
            eprintln!("{}", result.success_message());
            match (&r.proxy, r.action) {
                (Some(proxy), _) => eprintln!("Proxy: {}", proxy),
                (None, ProxyChange::Cleared) => {}
                (None, _) => eprintln!("Proxy: (direct)"),
            }
        }
        CommandResult::Help => print_usage(),
    }
}

/// 機械可読JSONを生成
///
/// 結果の各フィールドに `success` と `command` を加えた1つのオブジェクト。
fn machine_readable(result: &CommandResult) -> serde_json::Value {
    let mut json = serde_json::to_value(result).unwrap_or_else(|_| serde_json::json!({}));

    if let Some(object) = json.as_object_mut() {
        object.insert("success".to_string(), serde_json::Value::Bool(true));
    }

    json
}
