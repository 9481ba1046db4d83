//! Pipeline stages for hypertext-to-plaintext transformation.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable and keeps the driver
//! in [`crate::transform`] a pure composition of their contracts.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ normalize ──▶ markdown ──▶ html ──▶ output
//! (trim)    (UAX #15)    (optional)  (optional)
//! ```
//!
//! 1. [`normalize`] — trim happens in the driver; this stage applies the
//!    requested Unicode normalization form
//! 2. [`markdown`]  — strip Markdown syntax into plain-text lines
//! 3. [`html`]      — strip HTML tags into plain-text lines
//!
//! The two stripping stages share a contract: `&str` in, ordered
//! `Vec<String>` of logical lines out. The driver rejoins each sequence
//! with a single `\n` and no trailing separator.

pub mod html;
pub mod markdown;
pub mod normalize;
