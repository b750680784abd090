use crate::commands::{self, CommandResult};
use anyhow::{Context, Result, bail};

/// 解析済みのCLI引数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `--machine`: 機械可読JSONを stdout に出力する
    pub machine_output: bool,
    /// `--proxy <url>`: このコマンドだけで使うプロキシ
    pub proxy: Option<String>,
    pub command: Command,
}

/// サブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { use_stdin: bool },
    Logout,
    Status,
    Info { code: String },
    Upload { file_path: String },
    RemoteAdd { url: String },
    RemoteStatus { remote_id: String },
    Proxy(ProxyAction),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyAction {
    Show,
    Set(String),
    Clear,
}

/// CLI引数を解析する
///
/// グローバルフラグ（`--machine`, `--proxy`）はコマンドの前後どこに置いてもよい。
/// コマンドが無い場合は help として扱う。
pub fn parse_args(args: &[String]) -> Result<ParsedArgs> {
    let GlobalFlags {
        machine_output,
        proxy,
        positional,
    } = split_global_flags(args)?;

    let mut positional = positional.into_iter();
    let command_name = positional.next();
    let command_args: Vec<&str> = positional.collect();

    let command = match command_name {
        None | Some("help") | Some("--help") | Some("-h") => Command::Help,
        Some("login") => Command::Login {
            use_stdin: command_args.contains(&"--stdin"),
        },
        Some("logout") => Command::Logout,
        Some("status") => Command::Status,
        Some("info") => Command::Info {
            code: required_arg(&command_args, "Please specify a video code for info command")?,
        },
        Some("upload") => Command::Upload {
            file_path: required_arg(&command_args, "Please specify a file path for upload command")?,
        },
        Some("remote-add") => Command::RemoteAdd {
            url: required_arg(&command_args, "Please specify a URL for remote-add command")?,
        },
        Some("remote-status") => Command::RemoteStatus {
            remote_id: required_arg(
                &command_args,
                "Please specify a remote upload id for remote-status command",
            )?,
        },
        Some("proxy") => Command::Proxy(match command_args.first() {
            None => ProxyAction::Show,
            Some(&"--clear") => ProxyAction::Clear,
            Some(url) => ProxyAction::Set(url.to_string()),
        }),
        Some(other) => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            other
        ),
    };

    Ok(ParsedArgs {
        machine_output,
        proxy,
        command,
    })
}

/// グローバルフラグと、それ以外の引数
struct GlobalFlags<'a> {
    machine_output: bool,
    proxy: Option<String>,
    positional: Vec<&'a str>,
}

fn split_global_flags(args: &[String]) -> Result<GlobalFlags<'_>> {
    let mut flags = GlobalFlags {
        machine_output: false,
        proxy: None,
        positional: Vec::new(),
    };
    let mut rest = args.iter().skip(1).map(String::as_str);

    while let Some(arg) = rest.next() {
        match arg {
            "--machine" => flags.machine_output = true,
            "--proxy" => {
                let value = rest
                    .next()
                    .context("--proxy requires a URL, e.g. --proxy socks5://127.0.0.1:9050")?;
                flags.proxy = Some(value.to_string());
            }
            _ if arg.starts_with("--proxy=") => {
                flags.proxy = Some(arg["--proxy=".len()..].to_string());
            }
            _ => flags.positional.push(arg),
        }
    }

    Ok(flags)
}

/// 解析に失敗した場合でも `--machine` が指定されていたかを判定する
///
/// `parse_args` と同じく位置は問わない。
pub fn machine_output_requested(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == "--machine")
}

fn required_arg(command_args: &[&str], message: &'static str) -> Result<String> {
    command_args
        .first()
        .map(|arg| arg.to_string())
        .context(message)
}

/// 解析済みのコマンドを実行する
pub async fn dispatch(parsed: &ParsedArgs) -> Result<CommandResult> {
    let proxy = parsed.proxy.as_deref();

    match &parsed.command {
        Command::Login { use_stdin } => commands::login::execute(*use_stdin)
            .await
            .context("Login command failed"),
        Command::Logout => commands::logout::execute()
            .await
            .context("Logout command failed"),
        Command::Status => commands::status::execute(proxy)
            .await
            .context("Status command failed"),
        Command::Info { code } => commands::info::execute(code, proxy)
            .await
            .context("Info command failed"),
        Command::Upload { file_path } => commands::upload::execute(file_path, proxy)
            .await
            .context("Upload command failed"),
        Command::RemoteAdd { url } => commands::remote::add(url, proxy)
            .await
            .context("Remote upload request failed"),
        Command::RemoteStatus { remote_id } => commands::remote::status(remote_id, proxy)
            .await
            .context("Remote upload status check failed"),
        Command::Proxy(action) => commands::proxy::execute(action)
            .await
            .context("Proxy command failed"),
        Command::Help => Ok(commands::help::execute()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rapidvideo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_command_is_help() {
        let parsed = parse_args(&args(&[])).unwrap();
        assert_eq!(parsed.command, Command::Help);
        assert!(!parsed.machine_output);
    }

    #[test]
    fn test_global_flags() {
        let parsed =
            parse_args(&args(&["--machine", "--proxy", "socks5://127.0.0.1:9050", "info", "abc"]))
                .unwrap();
        assert!(parsed.machine_output);
        assert_eq!(parsed.proxy.as_deref(), Some("socks5://127.0.0.1:9050"));
        assert_eq!(
            parsed.command,
            Command::Info {
                code: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_global_flags_after_command() {
        let list = ["info", "abc", "--machine", "--proxy", "http://p:3128"];
        let parsed = parse_args(&args(&list)).unwrap();

        assert!(parsed.machine_output);
        assert_eq!(parsed.proxy.as_deref(), Some("http://p:3128"));
        assert_eq!(
            parsed.command,
            Command::Info {
                code: "abc".to_string()
            }
        );
        assert_eq!(machine_output_requested(&args(&list)), parsed.machine_output);
    }

    #[test]
    fn test_machine_flag_detected_when_parse_fails() {
        let list = ["bogus", "--machine"];
        assert!(parse_args(&args(&list)).is_err());
        assert!(machine_output_requested(&args(&list)));
        assert!(!machine_output_requested(&args(&["bogus"])));
    }

    #[test]
    fn test_proxy_equals_form() {
        let parsed = parse_args(&args(&["--proxy=http://p:3128", "status"])).unwrap();
        assert_eq!(parsed.proxy.as_deref(), Some("http://p:3128"));
        assert_eq!(parsed.command, Command::Status);
    }

    #[test]
    fn test_proxy_flag_without_value() {
        assert!(parse_args(&args(&["--proxy"])).is_err());
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            parse_args(&args(&["upload", "video.mp4"])).unwrap().command,
            Command::Upload {
                file_path: "video.mp4".to_string()
            }
        );
        assert_eq!(
            parse_args(&args(&["remote-add", "https://e.com/v.mp4"]))
                .unwrap()
                .command,
            Command::RemoteAdd {
                url: "https://e.com/v.mp4".to_string()
            }
        );
        assert_eq!(
            parse_args(&args(&["remote-status", "77"])).unwrap().command,
            Command::RemoteStatus {
                remote_id: "77".to_string()
            }
        );
        assert_eq!(
            parse_args(&args(&["login", "--stdin"])).unwrap().command,
            Command::Login { use_stdin: true }
        );
    }

    #[test]
    fn test_missing_command_argument() {
        let err = parse_args(&args(&["upload"])).unwrap_err();
        assert!(err.to_string().contains("file path"));
        assert!(parse_args(&args(&["info"])).is_err());
    }

    #[test]
    fn test_proxy_actions() {
        assert_eq!(
            parse_args(&args(&["proxy"])).unwrap().command,
            Command::Proxy(ProxyAction::Show)
        );
        assert_eq!(
            parse_args(&args(&["proxy", "--clear"])).unwrap().command,
            Command::Proxy(ProxyAction::Clear)
        );
        assert_eq!(
            parse_args(&args(&["proxy", "socks5://h:1080"])).unwrap().command,
            Command::Proxy(ProxyAction::Set("socks5://h:1080".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_args(&args(&["frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
    }
}
