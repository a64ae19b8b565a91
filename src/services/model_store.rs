use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{Classifier, FeatureRow};
use crate::models::PenguinMeasurements;

/// Errors that can occur loading or running the trained model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("model expects {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("decision tree does not reach a leaf")]
    CyclicTree,
}

/// Trained classifier together with its training column layout
#[derive(Debug, Clone)]
pub struct ModelStore {
    classifier: Classifier,
    columns: Vec<String>,
}

impl ModelStore {
    /// Pair a classifier with its columns, rejecting inconsistent artifacts
    pub fn new(classifier: Classifier, columns: Vec<String>) -> Result<Self, ModelError> {
        if columns.is_empty() {
            return Err(ModelError::Invalid("column list is empty".to_string()));
        }
        classifier.validate(columns.len())?;
        Ok(Self { classifier, columns })
    }

    /// Load the model and column artifacts from disk
    pub async fn load(model_path: &Path, columns_path: &Path) -> Result<Self, ModelError> {
        let classifier: Classifier = read_json(model_path).await?;
        let columns: Vec<String> = read_json(columns_path).await?;

        tracing::debug!(
            "Decoded model with {} classes and {} columns",
            classifier.n_classes(),
            columns.len()
        );

        Self::new(classifier, columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Encoded class for one penguin
    pub fn predict(&self, measurements: &PenguinMeasurements) -> Result<i64, ModelError> {
        let row = FeatureRow::from_measurements(measurements);
        let x = row.reindex(&self.columns);
        tracing::trace!("Feature vector: {:?}", x);
        self.classifier.predict(&x)
    }
}

async fn read_json<T>(path: &Path) -> Result<T, ModelError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let bytes = tokio::fs::read(path).await.map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ModelError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
