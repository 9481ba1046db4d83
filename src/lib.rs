//! # nomark
//!
//! Transform hypertext strings — Markdown-formatted text, possibly with
//! embedded HTML — into clean plain text.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input
//!  │
//!  ├─ 1. Trim       remove leading/trailing whitespace
//!  ├─ 2. Normalize  apply a Unicode normalization form (NFC default)
//!  ├─ 3. Markdown   strip Markdown syntax into plain-text lines (optional)
//!  ├─ 4. HTML       strip HTML tags into plain-text lines (optional)
//!  └─ 5. Output     lines rejoined with single '\n' separators
//! ```
//!
//! The pipeline is a pure function: synchronous, deterministic, no I/O, no
//! global state. It is safe to call concurrently from any number of threads
//! with no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use nomark::{transform, TransformOptions};
//!
//! fn main() -> Result<(), nomark::NomarkError> {
//!     let options = TransformOptions::builder()
//!         .strip_html(true)
//!         .strip_markdown(true)
//!         .build()?;
//!
//!     let text = transform("# Café <em>du</em> Monde", &options)?;
//!     assert_eq!(text, "Café du Monde.");
//!     Ok(())
//! }
//! ```
//!
//! ## Choosing a Normalization Form
//!
//! | Form | Behaviour | Best for |
//! |------|-----------|----------|
//! | `NFC`  | compose (default) | interchange, storage, display |
//! | `NFD`  | decompose | combining-mark inspection |
//! | `NFKC` | compatibility fold + compose | search keys, identifiers |
//! | `NFKD` | compatibility fold + decompose | aggressive folding |
//!
//! Unrecognised form names fail fast with [`NomarkError::InvalidOption`]
//! at option construction — never a silent no-op.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod options;
pub mod pipeline;
pub mod transform;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::NomarkError;
pub use options::{NormalizationForm, TransformOptions, TransformOptionsBuilder};
pub use transform::transform;
