//! # 共通値オブジェクト
//!
//! エンティティが保持する値オブジェクトを定義する。
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`UserName`] | `String` | ユーザー表示名 |

define_validated_string! {
    /// ユーザー表示名（値オブジェクト）
    ///
    /// PII のため、Debug 出力はマスクされる。
    ///
    /// # バリデーション
    ///
    /// - 前後の空白は除去される
    /// - 空文字列ではない
    /// - 最大 100 文字
    pub struct UserName {
        label: "ユーザー名",
        max_length: 100,
    }
}
