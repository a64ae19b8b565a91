//! Penguin Predict - species prediction form service
//!
//! Serves an HTML form for penguin measurements, runs them through a trained
//! classifier loaded from disk and keeps an in-memory history of results.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Classifier, FeatureRow};
pub use error::PredictError;
pub use models::{PenguinMeasurements, PredictForm, PredictionRecord, Species};
pub use services::{ModelError, ModelStore, PredictionHistory};
