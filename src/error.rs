//! Error types for the nomark library.
//!
//! Two distinct failure classes exist:
//!
//! * [`NomarkError::InvalidOption`] — the caller asked for a normalization
//!   form outside the four recognised values. Surfaced at option
//!   construction ([`TransformOptionsBuilder::build`] or
//!   `"…".parse::<NormalizationForm>()`) so a bad form can never reach the
//!   pipeline and silently no-op.
//!
//! * [`NomarkError::MarkdownStrip`] / [`NomarkError::HtmlStrip`] — a
//!   stripping stage could not process its input. These propagate unchanged
//!   from [`crate::transform`]: no retry, no fallback formatting, no
//!   default-value substitution.
//!
//! [`TransformOptionsBuilder::build`]: crate::options::TransformOptionsBuilder::build
//! [`NormalizationForm`]: crate::options::NormalizationForm

use thiserror::Error;

/// All errors returned by the nomark library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NomarkError {
    /// The requested normalization form is not one of NFC, NFD, NFKC, NFKD.
    #[error("unsupported normalization form '{form}'\nExpected one of: NFC, NFD, NFKC, NFKD.")]
    InvalidOption { form: String },

    /// The Markdown stripping stage failed.
    ///
    /// Reserved for the collaborator contract: the current parser accepts
    /// any input, so this variant has no trigger in-crate today.
    #[error("markdown stripping failed: {detail}")]
    MarkdownStrip { detail: String },

    /// The HTML stripping stage could not tokenize its input,
    /// e.g. a tag or comment opened but never closed before end of input.
    #[error("HTML stripping failed: {detail}")]
    HtmlStrip { detail: String },
}
