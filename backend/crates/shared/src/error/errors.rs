//! Application Errors - Non-empty error list and result alias
//!
//! Defines [`AppErrors`] and the [`AppResult<T>`] type alias used as the
//! outcome of every handler.

use std::error::Error;
use std::fmt;

use super::app_error::AppError;
use super::kind::ErrorKind;

/// 失敗結果のエラーリスト
///
/// 順序を保持し、重複を除去しません。常に 1 件以上のエラーを含みます。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, errors::AppErrors, kind::ErrorKind};
///
/// let errors = AppErrors::from_vec(vec![
///     AppError::validation("EMPTY_NAME", "The name cannot be empty."),
///     AppError::validation("NAME_MIN_LENGTH", "The name must have at least 7 characters."),
/// ])
/// .unwrap();
/// assert_eq!(errors.kind(), ErrorKind::Validation);
/// assert_eq!(errors.codes(), vec!["EMPTY_NAME", "NAME_MIN_LENGTH"]);
///
/// assert!(AppErrors::from_vec(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppErrors {
    errors: Vec<AppError>,
}

/// アプリケーション結果型エイリアス
///
/// 成功値か、1 件以上のエラーのどちらか一方を保持します。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, errors::AppResult};
///
/// fn find_user(document: &str) -> AppResult<String> {
///     if document.is_empty() {
///         return Err(AppError::validation("User.Document.Empty", "The document cannot be empty.").into());
///     }
///     Ok("Alice".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppErrors>;

impl AppErrors {
    /// 1 件のエラーからリストを作成
    pub fn new(first: AppError) -> Self {
        Self {
            errors: vec![first],
        }
    }

    /// `Vec` からリストを作成（空なら `None`）
    pub fn from_vec(errors: Vec<AppError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// 先頭のエラー
    pub fn first(&self) -> &AppError {
        // Non-empty by construction
        &self.errors[0]
    }

    /// 先頭のエラーの種別
    pub fn kind(&self) -> ErrorKind {
        self.first().kind()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[AppError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<AppError> {
        self.errors
    }

    /// エラーコードを順序どおりに取得
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(AppError::code).collect()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code() == code)
    }
}

impl From<AppError> for AppErrors {
    fn from(err: AppError) -> Self {
        Self::new(err)
    }
}

impl IntoIterator for AppErrors {
    type Item = AppError;
    type IntoIter = std::vec::IntoIter<AppError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a AppErrors {
    type Item = &'a AppError;
    type IntoIter = std::slice::Iter<'a, AppError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for AppErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for AppErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.first())
    }
}
