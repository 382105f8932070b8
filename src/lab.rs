//! The AI demo panel: image edit and chat against the Gemini shim.
//!
//! The panel has one loading flag. While a call is in flight further
//! submissions are refused, and the flag clears only when the call settles.
//! Calls run on their own task, so a caller that goes away does not cancel
//! the remote request.

use crate::encoding::{data_uri_mime, decode_base64, strip_data_uri_prefix};
use crate::gemini::GeminiClient;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LabError {
    #[error("a request is already in progress")]
    Busy,

    #[error("an image and a prompt are required")]
    EmptyInput,

    #[error("failed to process image: {0}")]
    InvalidImage(String),

    #[error("failed to edit image: {0}")]
    EditFailed(String),

    #[error("failed to get answer: {0}")]
    ChatFailed(String),
}

impl LabError {
    /// Dictionary key of the user-facing banner for this error.
    pub fn message_key(&self) -> &'static str {
        match self {
            LabError::Busy => "ai.error.busy",
            LabError::EmptyInput => "ai.error.empty",
            LabError::InvalidImage(_) => "ai.error.upload",
            LabError::EditFailed(_) => "ai.error.edit",
            LabError::ChatFailed(_) => "ai.error.chat",
        }
    }
}

/// Holds the loading flag for the lifetime of one call.
struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, LabError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| LabError::Busy)?;
        Ok(Self { flag: flag.clone() })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone)]
pub struct AiLab {
    client: GeminiClient,
    loading: Arc<AtomicBool>,
}

impl AiLab {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Edit an uploaded image (data URI or bare base64) following `prompt`.
    pub async fn edit_image(&self, image: &str, prompt: &str) -> Result<String, LabError> {
        if image.trim().is_empty() || prompt.trim().is_empty() {
            return Err(LabError::EmptyInput);
        }

        if let Some(mime) = data_uri_mime(image) {
            if !mime.starts_with("image/") {
                return Err(LabError::InvalidImage(format!("unsupported upload type {}", mime)));
            }
        }

        let data = strip_data_uri_prefix(image).trim().to_string();
        if data.is_empty() {
            return Err(LabError::EmptyInput);
        }
        decode_base64(&data).map_err(|e| LabError::InvalidImage(e.to_string()))?;

        let guard = LoadingGuard::acquire(&self.loading)?;
        let client = self.client.clone();
        let prompt = prompt.to_string();

        info!("AI lab: image edit requested ({} base64 chars)", data.len());
        let task = tokio::spawn(async move {
            let _guard = guard;
            client.edit_image(&data, &prompt).await
        });

        match task.await {
            Ok(Ok(image)) => Ok(image),
            Ok(Err(e)) => Err(LabError::EditFailed(format!("{:#}", e))),
            Err(e) => {
                warn!("AI lab: image edit task failed: {}", e);
                Err(LabError::EditFailed(e.to_string()))
            }
        }
    }

    /// Ask the assistant a question. Remote failures come back as the apology text.
    pub async fn ask(&self, prompt: &str) -> Result<String, LabError> {
        if prompt.trim().is_empty() {
            return Err(LabError::EmptyInput);
        }

        let guard = LoadingGuard::acquire(&self.loading)?;
        let client = self.client.clone();
        let prompt = prompt.to_string();

        info!("AI lab: chat requested");
        let task = tokio::spawn(async move {
            let _guard = guard;
            client.ask_text(&prompt).await
        });

        task.await.map_err(|e| {
            warn!("AI lab: chat task failed: {}", e);
            LabError::ChatFailed(e.to_string())
        })
    }
}
