//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ハンドラーが返す失敗の分類を定義します。
/// 各バリアントは HTTP 層で使用されるステータスコードにマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 422 - Unprocessable Entity: フィールド単位の検証エラー（複数可）
    Validation,
    /// 404 - Not Found: キー検索でレコードが存在しない
    NotFound,
    /// 500 - Internal Server Error: ストア/インフラの障害
    Unexpected,
    /// 499 - Client Closed Request: 呼び出し元がキャンセルした
    Cancelled,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Validation.status_code(), 422);
    /// assert_eq!(ErrorKind::Unexpected.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 422,
            ErrorKind::NotFound => 404,
            ErrorKind::Unexpected => 500,
            ErrorKind::Cancelled => 499,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::Cancelled => "Cancelled",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
