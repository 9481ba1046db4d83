//! Configuration types for hypertext-to-plaintext transformation.
//!
//! All behaviour is controlled through [`TransformOptions`], constructed via
//! [`TransformOptions::default()`] or its [`TransformOptionsBuilder`].
//! Keeping every knob in one struct makes configs trivial to share, to
//! serialise for logging, and to diff when two runs disagree.
//!
//! # Design choice: explicit defaults over partial application
//! The original contract is an optional options object with per-field
//! defaults. Here every field is materialised once, at the call boundary:
//! `TransformOptions::default()` *is* the documented default set, and the
//! builder lets callers override only what they care about.

use crate::error::NomarkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Unicode normalization form, as defined by
/// [UAX #15](https://unicode.org/reports/tr15/).
///
/// Canonical forms (NFC/NFD) preserve visual rendering exactly;
/// compatibility forms (NFKC/NFKD) additionally fold ligatures, width
/// variants, and similar presentation distinctions. NFC is the default
/// because it is what the vast majority of interchange text already is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition. (default)
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl NormalizationForm {
    /// The standard textual name: `"NFC"`, `"NFD"`, `"NFKC"`, or `"NFKD"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = NomarkError;

    /// Parse a textual form name.
    ///
    /// Anything outside the four-member enumeration fails with
    /// [`NomarkError::InvalidOption`] — some normalization routines silently
    /// no-op on unrecognised identifiers, and a silent no-op is exactly the
    /// failure mode this library refuses to have.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            "NFKC" => Ok(NormalizationForm::Nfkc),
            "NFKD" => Ok(NormalizationForm::Nfkd),
            other => Err(NomarkError::InvalidOption { form: other.into() }),
        }
    }
}

/// Options for a hypertext-to-plaintext transformation.
///
/// Serde uses the camelCase field names of the public contract
/// (`stripHtml`, `stripMarkdown`), and every field falls back to its
/// documented default when absent, so results depend only on option
/// *values* — never on how (or in what order) they were supplied.
///
/// # Example
/// ```rust
/// use nomark::TransformOptions;
///
/// let options = TransformOptions::builder()
///     .strip_markdown(true)
///     .strip_html(true)
///     .build()
///     .unwrap();
/// assert_eq!(options.form.as_str(), "NFC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// The Unicode normalization form to apply. Default: [`NormalizationForm::Nfc`].
    pub form: NormalizationForm,

    /// Whether to strip HTML tags from the text. Default: `false`.
    pub strip_html: bool,

    /// Whether to strip Markdown syntax from the text. Default: `false`.
    pub strip_markdown: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            form: NormalizationForm::Nfc,
            strip_html: false,
            strip_markdown: false,
        }
    }
}

impl TransformOptions {
    /// Create a new builder for `TransformOptions`.
    pub fn builder() -> TransformOptionsBuilder {
        TransformOptionsBuilder {
            options: Self::default(),
            form_name: None,
        }
    }
}

/// Builder for [`TransformOptions`].
#[derive(Debug)]
pub struct TransformOptionsBuilder {
    options: TransformOptions,
    form_name: Option<String>,
}

impl TransformOptionsBuilder {
    /// Set the normalization form directly.
    pub fn form(mut self, form: NormalizationForm) -> Self {
        self.options.form = form;
        self.form_name = None;
        self
    }

    /// Set the normalization form by its textual name (`"NFC"`, `"NFD"`,
    /// `"NFKC"`, `"NFKD"`). Validated in [`build`](Self::build).
    pub fn form_name(mut self, name: impl Into<String>) -> Self {
        self.form_name = Some(name.into());
        self
    }

    pub fn strip_html(mut self, v: bool) -> Self {
        self.options.strip_html = v;
        self
    }

    pub fn strip_markdown(mut self, v: bool) -> Self {
        self.options.strip_markdown = v;
        self
    }

    /// Build the options, validating any textual form name.
    ///
    /// # Errors
    /// [`NomarkError::InvalidOption`] if a name set via
    /// [`form_name`](Self::form_name) is outside the enumeration.
    pub fn build(mut self) -> Result<TransformOptions, NomarkError> {
        if let Some(name) = self.form_name.take() {
            self.options.form = name.parse()?;
        }
        Ok(self.options)
    }
}
