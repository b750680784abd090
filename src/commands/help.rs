use crate::commands::result::CommandResult;

/// ヘルプコマンドを実行する
///
/// 表示内容はプレゼンテーション層（presentation::output）が持つ。
pub fn execute() -> CommandResult {
    CommandResult::Help
}
