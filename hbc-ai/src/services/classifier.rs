//! Classifier adapter seam
//!
//! The audio model is a black box behind [`AudioClassifier`]. The service
//! receives an explicitly constructed instance and never reaches for
//! global state, so tests can substitute their own implementation.

use async_trait::async_trait;
use axum::body::Bytes;
use std::path::Path;
use thiserror::Error;

use crate::models::Prediction;

/// Classifier errors
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Unsupported audio format: {0} (expected .wav or .mp3)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Inference service rejected credentials")]
    Unauthorized,

    #[error("Model is loading{}", loading_estimate(.estimated_seconds))]
    ModelLoading { estimated_seconds: Option<f64> },

    #[error("Inference API error {0}: {1}")]
    Api(u16, String),

    #[error("Invalid inference response: {0}")]
    InvalidResponse(String),
}

fn loading_estimate(estimated_seconds: &Option<f64>) -> String {
    match estimated_seconds {
        Some(seconds) => format!(" (estimated {:.0}s)", seconds),
        None => String::new(),
    }
}

/// Accepted upload container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
}

impl AudioFormat {
    /// Detect from a file name's extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "wav" => Some(AudioFormat::Wav),
            "mp3" => Some(AudioFormat::Mp3),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }
}

/// One audio input held in memory
///
/// The buffer is reference counted, so cloning a clip or handing its bytes
/// to the probe and the HTTP client never copies the audio.
#[derive(Debug, Clone)]
pub struct AudioClip {
    file_name: String,
    format: AudioFormat,
    bytes: Bytes,
}

impl AudioClip {
    pub fn new(
        file_name: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Result<Self, ClassifierError> {
        let file_name = file_name.into();
        let format = AudioFormat::from_file_name(&file_name)
            .ok_or_else(|| ClassifierError::UnsupportedFormat(file_name.clone()))?;

        Ok(Self {
            file_name,
            format,
            bytes: bytes.into(),
        })
    }

    /// Read a file from disk into a clip
    pub async fn from_path(path: &Path) -> Result<Self, ClassifierError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        // Reject before reading so a bad extension never costs I/O
        if AudioFormat::from_file_name(&file_name).is_none() {
            return Err(ClassifierError::UnsupportedFormat(path.display().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        Self::new(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the audio buffer
    pub fn shared_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Black-box audio classifier
///
/// Returns the model's raw, unordered (label, score) pairs for one input.
#[async_trait]
pub trait AudioClassifier: Send + Sync {
    /// Identifier of the underlying model
    fn model_id(&self) -> &str;

    async fn classify(&self, clip: &AudioClip) -> Result<Vec<Prediction>, ClassifierError>;
}
