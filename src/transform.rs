//! The transformation entry point.
//!
//! One linear pass, no branching beyond the two strip flags, no retries,
//! no partial-failure recovery: a stage either succeeds or its error
//! surfaces unchanged to the caller.

use crate::error::NomarkError;
use crate::options::TransformOptions;
use crate::pipeline::{html, markdown, normalize};
use tracing::debug;

/// Transform a hypertext string into plain text.
///
/// Applies, in fixed order: trim, Unicode normalization
/// (`options.form`), Markdown stripping (if `options.strip_markdown`),
/// HTML stripping (if `options.strip_html`). Each stripping stage yields a
/// sequence of logical lines that is rejoined with single `\n` separators
/// and no trailing newline.
///
/// The function is stateless and referentially transparent: identical
/// input and options always produce identical output, and the input is
/// never mutated.
///
/// # Arguments
/// * `input`   — Any string, including the empty string
/// * `options` — See [`TransformOptions`]; `TransformOptions::default()`
///   gives NFC normalization with both strip stages disabled
///
/// # Errors
/// [`NomarkError::MarkdownStrip`] or [`NomarkError::HtmlStrip`] when a
/// stripping stage cannot process its input. (An invalid normalization
/// form cannot reach this function: it is rejected when the options are
/// constructed.)
///
/// # Example
/// ```rust
/// use nomark::{transform, TransformOptions};
///
/// let options = TransformOptions::builder()
///     .strip_markdown(true)
///     .build()
///     .unwrap();
/// let text = transform("# Heading\nSome **bold** text.", &options).unwrap();
/// assert_eq!(text, "Heading.\nSome bold text.");
/// ```
pub fn transform(input: &str, options: &TransformOptions) -> Result<String, NomarkError> {
    debug!(
        form = %options.form,
        strip_markdown = options.strip_markdown,
        strip_html = options.strip_html,
        len = input.len(),
        "starting transform"
    );

    // ── Step 1: Trim & normalize ─────────────────────────────────────────
    let mut result = normalize::normalize(input.trim(), options.form);

    // ── Step 2: Strip Markdown ───────────────────────────────────────────
    if options.strip_markdown {
        result = markdown::strip_markdown(&result)?.join("\n");
        debug!(len = result.len(), "markdown stripped");
    }

    // ── Step 3: Strip HTML ───────────────────────────────────────────────
    if options.strip_html {
        result = html::strip_html(&result)?.join("\n");
        debug!(len = result.len(), "html stripped");
    }

    Ok(result)
}
