//! Services for hbc-ai

pub mod classification;
pub mod classifier;
pub mod inference_client;
pub mod sample_library;
pub mod score_aggregator;

pub use classification::{Classification, ClassificationService};
pub use classifier::{AudioClassifier, AudioClip, AudioFormat, ClassifierError};
pub use inference_client::{HuggingFaceClassifier, InferenceSettings};
pub use sample_library::{SampleEntry, SampleError, SampleLibrary, SAMPLE_NAMES};
pub use score_aggregator::{aggregate, aggregate_with_report, categorize};
