//! Bundled sample recordings
//!
//! Five fixed file names looked up in the configured samples directory.
//! Only catalogue names are ever joined onto the directory.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::classifier::{AudioClip, ClassifierError};

/// Sample file names in display order
pub const SAMPLE_NAMES: [&str; 5] = [
    "normal.wav",
    "murmur.wav",
    "extra_systole.wav",
    "extra_hystole.wav",
    "artifact.wav",
];

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Unknown sample: {0}")]
    UnknownSample(String),

    #[error("Sample file missing: {}", .0.display())]
    Missing(PathBuf),

    #[error(transparent)]
    Load(#[from] ClassifierError),
}

/// Catalogue entry as listed by the API
#[derive(Debug, Clone, Serialize)]
pub struct SampleEntry {
    pub name: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct SampleLibrary {
    dir: PathBuf,
}

impl SampleLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn list(&self) -> Vec<SampleEntry> {
        SAMPLE_NAMES
            .iter()
            .map(|&name| SampleEntry {
                name,
                available: self.dir.join(name).is_file(),
            })
            .collect()
    }

    /// Resolve a catalogue name to an existing file
    pub fn path_of(&self, name: &str) -> Result<PathBuf, SampleError> {
        let known = SAMPLE_NAMES
            .iter()
            .find(|n| **n == name)
            .ok_or_else(|| SampleError::UnknownSample(name.to_string()))?;

        let path = self.dir.join(known);
        if !path.is_file() {
            return Err(SampleError::Missing(path));
        }
        Ok(path)
    }

    pub async fn load(&self, name: &str) -> Result<AudioClip, SampleError> {
        let path = self.path_of(name)?;
        Ok(AudioClip::from_path(&path).await?)
    }
}
