use serde::{Deserialize, Serialize};
use crate::models::domain::PredictionRecord;

/// Everything the index page needs to render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    pub prediction_text: Option<String>,
    pub error: Option<String>,
    pub history: Vec<PredictionRecord>,
}

impl PageContext {
    pub fn with_history(history: Vec<PredictionRecord>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn prediction(text: impl Into<String>, history: Vec<PredictionRecord>) -> Self {
        Self {
            prediction_text: Some(text.into()),
            error: None,
            history,
        }
    }

    pub fn error(message: impl Into<String>, history: Vec<PredictionRecord>) -> Self {
        Self {
            prediction_text: None,
            error: Some(message.into()),
            history,
        }
    }
}
