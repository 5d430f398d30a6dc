//! Test Helper Utilities
//!
//! Shared utilities for testing hbc-ai

#![allow(dead_code)]

pub mod audio_generator;
pub mod fake_classifier;

pub use audio_generator::{generate_test_wav, generate_wav_bytes, AudioConfig};
pub use fake_classifier::{FailingClassifier, FakeClassifier, WarmingClassifier};

/// Build a `multipart/form-data` body with a single file field
///
/// Returns (content-type header value, body bytes)
pub fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----hbc-test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}
