/// プレゼンテーション層: ユーザー入力処理
///
/// 対話入力や stdin から認証情報を取得し、
/// コマンド層で使用可能な形式に変換します。
use crate::commands::login::LoginCredentials;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// 対話的に認証情報を取得
pub fn read_credentials_interactive() -> Result<LoginCredentials> {
    eprintln!("Logging in to RapidVideo...");
    eprintln!();
    eprintln!("Please enter your RapidVideo API credentials.");
    eprintln!("The user id is only needed for uploads; leave it empty to skip.");
    eprintln!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    eprint!("API Key: ");
    io::stderr().flush()?;
    let api_key = read_line(&mut reader).context("Failed to read API key from input")?;

    eprint!("User ID (optional): ");
    io::stderr().flush()?;
    let user_id = read_line(&mut reader).context("Failed to read user id from input")?;

    build_credentials(api_key, user_id)
}

/// stdin からパイプで認証情報を取得（2行形式）
///
/// 形式:
///   1行目: API Key
///   2行目: User ID（省略可）
pub fn read_credentials_from_stdin() -> Result<LoginCredentials> {
    let stdin = io::stdin();
    read_credentials_from(stdin.lock())
}

/// 任意のリーダーから2行形式の認証情報を読み込む
pub fn read_credentials_from(mut reader: impl BufRead) -> Result<LoginCredentials> {
    let api_key = read_line(&mut reader).context("Failed to read API key from stdin")?;
    let user_id = read_line(&mut reader).context("Failed to read user id from stdin")?;
    build_credentials(api_key, user_id)
}

fn read_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn build_credentials(api_key: String, user_id: String) -> Result<LoginCredentials> {
    if api_key.is_empty() {
        bail!("API key cannot be empty. Please provide a valid API key.");
    }

    Ok(LoginCredentials {
        api_key,
        user_id: (!user_id.is_empty()).then_some(user_id),
    })
}
