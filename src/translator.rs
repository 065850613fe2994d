// Translate operation: argument checks in front of a single
// `TranslationProvider` call.

use crate::api::TranslationProvider;
use crate::errors::TranslateError;

/// Translates `text` into `target_lang`, letting the provider detect the
/// source language.
///
/// Empty arguments are rejected before the provider is called. The
/// provider's answer is returned unchanged and failures are not retried.
pub fn translate<P: TranslationProvider>(
    provider: &P,
    text: &str,
    target_lang: &str,
) -> Result<String, TranslateError> {
    if text.is_empty() {
        return Err(TranslateError::InvalidInput { argument: "text" });
    }
    if target_lang.is_empty() {
        return Err(TranslateError::InvalidInput {
            argument: "target language",
        });
    }

    provider
        .translate_text(text, None, target_lang)
        .map_err(|error| {
            log::debug!("Error translating text: {error}");
            TranslateError::TranslationFailed {
                message: error.to_string(),
            }
        })
}
