use crate::i18n::Language;
use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub image_model: String,
    pub text_model: String,

    // Localization
    pub default_language: Language,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("DEFAULT_LANGUAGE is invalid")?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            // Gemini - a missing key yields an unauthenticated client; calls fail at request time
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .unwrap_or_default(),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            text_model: std::env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),

            default_language,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }

    /// Configuration pointing at a custom API base, such as a local stub.
    pub fn with_api_url(api_url: &str, api_key: &str) -> Self {
        Self {
            gemini_api_key: api_key.to_string(),
            gemini_api_url: api_url.trim_end_matches('/').to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            default_language: Language::default(),
            port: 0,
        }
    }
}
