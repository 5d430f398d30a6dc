//! Data models for hbc-ai

pub mod prediction;

pub use prediction::{AggregatedResult, Category, Prediction};
