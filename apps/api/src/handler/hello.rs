//! # 挨拶ハンドラ
//!
//! ルートパス `/` に固定の文字列を返す。

/// ルートパスの応答本文
pub const GREETING: &str = "Hello World!";

/// `/`
///
/// メソッドを問わず `200 OK` と `text/plain` の固定文字列を返す。
pub async fn hello() -> &'static str {
    GREETING
}
