// Translation provider module: a small blocking HTTP client for the DeepL
// REST API and the `TranslationProvider` trait the rest of the crate talks
// to. The client is created once in `main` and passed down explicitly.

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::ApiError;

/// Environment variable holding the DeepL authentication key.
pub const API_KEY_VAR: &str = "DEEPL_API_KEY";
/// Optional environment variable overriding the DeepL server URL.
pub const SERVER_URL_VAR: &str = "DEEPL_SERVER_URL";

const SERVER_URL_FREE: &str = "https://api-free.deepl.com";
const SERVER_URL_PRO: &str = "https://api.deepl.com";
const TIMEOUT_SECS: u64 = 30;

/// Anything that can turn text into another language.
///
/// `source_lang` of `None` asks the provider to detect the source language.
pub trait TranslationProvider {
    fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, ApiError>;
}

/// DeepL client holding a reqwest blocking client, the server URL and the
/// prebuilt `Authorization` header.
#[derive(Clone)]
pub struct DeeplClient {
    client: Client,
    server_url: String,
    auth_header: HeaderValue,
}

/// Request payload for `POST /v2/translate`.
#[derive(Serialize, Debug)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

/// Successful response body of `POST /v2/translate`.
#[derive(Deserialize, Debug)]
struct TranslateResponse {
    translations: Vec<TextResult>,
}

#[derive(Deserialize, Debug)]
struct TextResult {
    #[serde(default)]
    detected_source_language: Option<String>,
    text: String,
}

impl DeeplClient {
    /// Create a client configured from `DEEPL_API_KEY` and, if present,
    /// `DEEPL_SERVER_URL`. Fails when the key is missing or empty.
    pub fn from_env() -> Result<Self, ApiError> {
        let auth_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingApiKey(API_KEY_VAR))?;
        let server_url = std::env::var(SERVER_URL_VAR).ok();
        Self::new(auth_key, server_url)
    }

    /// Create a client for `auth_key`. Without an explicit `server_url` the
    /// server is chosen from the key.
    pub fn new(auth_key: String, server_url: Option<String>) -> Result<Self, ApiError> {
        let server_url = server_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_server_url(&auth_key).to_string());
        let mut auth_header = HeaderValue::from_str(&format!("DeepL-Auth-Key {auth_key}"))
            .map_err(|_| ApiError::InvalidApiKey)?;
        auth_header.set_sensitive(true);
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;
        log::debug!("DeepL client targets {server_url}");
        Ok(DeeplClient {
            client,
            server_url,
            auth_header,
        })
    }

    /// The server this client sends requests to.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl TranslationProvider for DeeplClient {
    fn translate_text(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{}/v2/translate", self.server_url);
        let body = TranslateRequest {
            text: [text],
            target_lang,
            source_lang,
        };
        let res = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .json(&body)
            .send()
            .map_err(ApiError::Request)?;
        let status = res.status();
        let txt = res.text().map_err(ApiError::Request)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &txt),
            });
        }
        parse_translation(&txt)
    }
}

/// Load variables from a `.env` file in the working directory or one of its
/// parents. Variables already set in the environment are kept.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring unreadable .env file: {e}"),
    }
}

/// Load variables from the given `.env` file. Variables already set in the
/// environment are kept.
pub fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

/// Free-tier keys carry a `:fx` suffix and must use the free server.
pub fn default_server_url(auth_key: &str) -> &'static str {
    if auth_key.ends_with(":fx") {
        SERVER_URL_FREE
    } else {
        SERVER_URL_PRO
    }
}

/// Pull the first translation out of a success body.
fn parse_translation(body: &str) -> Result<String, ApiError> {
    let parsed: TranslateResponse = serde_json::from_str(body).map_err(ApiError::Decode)?;
    let first = parsed
        .translations
        .into_iter()
        .next()
        .ok_or(ApiError::EmptyResponse)?;
    if let Some(lang) = &first.detected_source_language {
        log::debug!("DeepL detected source language {lang}");
    }
    Ok(first.text)
}

/// Build a readable message for a failed response. Prefers the JSON
/// `message` field, then DeepL's documented status codes, then the raw body.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty());
    if let Some(message) = from_json {
        return message;
    }
    match status.as_u16() {
        403 => "Authorization failure, check auth_key".into(),
        456 => "Quota for this billing period has been exceeded".into(),
        429 => "Too many requests, DeepL servers are currently experiencing high load".into(),
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_key_uses_free_server() {
        assert_eq!(default_server_url("abc-123:fx"), "https://api-free.deepl.com");
        assert_eq!(default_server_url("abc-123"), "https://api.deepl.com");
    }

    #[test]
    fn test_explicit_server_url_wins() {
        let client =
            DeeplClient::new("abc:fx".into(), Some("http://localhost:3000/".into())).unwrap();
        assert_eq!(client.server_url(), "http://localhost:3000");
    }

    #[test]
    fn test_from_env_reads_key_from_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "DEEPL_API_KEY=from-dotenv:fx\n").unwrap();
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(SERVER_URL_VAR);

        load_dotenv_from(&env_file).unwrap();
        let client = DeeplClient::from_env().unwrap();

        assert_eq!(client.server_url(), "https://api-free.deepl.com");
    }

    #[test]
    fn test_key_with_control_characters_is_rejected() {
        let err = DeeplClient::new("bad\nkey".into(), None).err().unwrap();
        assert!(matches!(err, ApiError::InvalidApiKey));
    }

    #[test]
    fn test_request_omits_source_lang_for_autodetect() {
        let body = TranslateRequest {
            text: ["Hello, world!"],
            target_lang: "es",
            source_lang: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": ["Hello, world!"], "target_lang": "es" })
        );
    }

    #[test]
    fn test_parse_translation_takes_first_result() {
        let body = r#"{"translations":[
            {"detected_source_language":"EN","text":"Hola, mundo!"},
            {"detected_source_language":"EN","text":"ignored"}
        ]}"#;
        assert_eq!(parse_translation(body).unwrap(), "Hola, mundo!");
    }

    #[test]
    fn test_parse_translation_empty_list() {
        let err = parse_translation(r#"{"translations":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::EmptyResponse));
    }

    #[test]
    fn test_parse_translation_rejects_garbage() {
        let err = parse_translation("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Value for 'target_lang' not supported."}"#,
        );
        assert_eq!(msg, "Value for 'target_lang' not supported.");
    }

    #[test]
    fn test_error_message_known_statuses() {
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, ""),
            "Authorization failure, check auth_key"
        );
        let quota = StatusCode::from_u16(456).unwrap();
        assert!(error_message(quota, "").contains("Quota"));
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }
}
