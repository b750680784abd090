mod cli;
mod commands;
mod presentation;

use anyhow::Result;
use rapidvideo::api::error::ApiError;
use rapidvideo::config::error::ConfigError;
use rapidvideo::domain::error::DomainError;
use std::env;

#[tokio::main]
async fn main() {
    rapidvideo::logging::init_tracing();

    let args: Vec<String> = env::args().collect();

    let parsed = match cli::parse_args(&args) {
        Ok(parsed) => parsed,
        // 引数の解析に失敗した場合もJSONでエラーを返せるよう同じ規則で判定する
        Err(e) => handle_error(e, cli::machine_output_requested(&args)),
    };

    if let Err(e) = run(&parsed).await {
        handle_error(e, parsed.machine_output);
    }
}

/// アプリケーションのメイン処理
async fn run(parsed: &cli::ParsedArgs) -> Result<()> {
    let result = cli::dispatch(parsed).await?;
    presentation::output::output_result(&result, parsed.machine_output)
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) -> ! {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    presentation::output::output_error(&error, exit_code, hint.as_deref(), machine_output);

    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            return api_err.severity().exit_code();
        }

        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            return domain_err.severity().exit_code();
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 不明なエラー（引数の誤りなど）
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        if let Some(api_err) = cause.downcast_ref::<ApiError>()
            && let Some(hint) = api_err.hint()
        {
            return Some(hint.to_string());
        }

        if let Some(domain_err) = cause.downcast_ref::<DomainError>()
            && let Some(hint) = domain_err.hint()
        {
            return Some(hint.to_string());
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>()
            && let Some(hint) = config_err.hint()
        {
            return Some(hint.to_string());
        }
    }

    None
}
