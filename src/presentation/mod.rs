/// プレゼンテーション層モジュール
///
/// コマンドの実行結果とユーザーの入出力の橋渡しを行います。
///
/// # モジュール
/// - `input`: 認証情報の入力（対話 / stdin）
/// - `output`: コマンド結果とエラーの出力（人間向け・機械向け）

pub mod input;
pub mod output;
