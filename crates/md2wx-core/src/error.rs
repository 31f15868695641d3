//! Conversion errors
//!
//! Most degradations are deliberately not errors: unknown theme names fall
//! back to the default theme and highlighting failures fall back to escaped
//! code. Only CSS inlining can abort a conversion.

use thiserror::Error;

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("CSS inlining failed: {0}")]
    Inline(#[from] css_inline::InlineError),
}

/// Conversion result type
pub type ConvertResult<T> = Result<T, ConvertError>;
