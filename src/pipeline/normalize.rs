//! Unicode normalization stage.
//!
//! A thin wrapper over the `unicode-normalization` iterator adapters. It is
//! its own stage (rather than two lines inside the driver) so the pipeline
//! reads as three named transformations and so the idempotence property has
//! a direct unit under test.

use crate::options::NormalizationForm;
use unicode_normalization::UnicodeNormalization;

/// Apply the given Unicode normalization form to `text`.
///
/// The equivalence-class behaviour is defined by UAX #15 and reproduced
/// bit-for-bit by the `unicode-normalization` crate's conformant
/// implementation.
pub fn normalize(text: &str, form: NormalizationForm) -> String {
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
        NormalizationForm::Nfkc => text.nfkc().collect(),
        NormalizationForm::Nfkd => text.nfkd().collect(),
    }
}
