/// ドメイン層
///
/// - `validator`: アップロード前のローカルファイル検証
/// - `formatter`: アップロード状況の人間向け表示
pub mod error;
pub mod formatter;
pub mod validator;
