//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct: one `(code, description)` pair tagged
//! with an [`ErrorKind`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// 失敗結果の 1 要素です。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `code` - フィールド/カテゴリ識別子（例: `EMPTY_DOCUMENT`, `User.NotFound`）
/// * `description` - ユーザー向けのエラーメッセージ
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::validation("EMPTY_NAME", "The name cannot be empty.");
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.code(), "EMPTY_NAME");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// エラーコード
    code: Cow<'static, str>,
    /// ユーザー向けメッセージ
    description: Cow<'static, str>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            description: description.into(),
            source: None,
        }
    }

    /// 検証エラー
    #[inline]
    pub fn validation(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Validation, code, description)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::NotFound, code, description)
    }

    /// ストア/インフラ障害
    #[inline]
    pub fn unexpected(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Unexpected, code, description)
    }

    /// 呼び出し元によるキャンセル
    #[inline]
    pub fn cancelled(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Cancelled, code, description)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// エラーコードを取得
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// メッセージを取得
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code);
        builder.field("description", &self.description);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.code, self.description)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Errors carry no source across a clone; the source is a debugging aid only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code.clone(),
            description: self.description.clone(),
            source: None,
        }
    }
}

impl PartialEq for AppError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.code == other.code && self.description == other.description
    }
}

impl Eq for AppError {}
