use thiserror::Error;

use crate::services::ModelError;

/// Message shown when a numeric field cannot be coerced
pub const INVALID_NUMBER_MESSAGE: &str = "Dữ liệu nhập vào không hợp lệ. Vui lòng nhập số.";

/// Errors raised while turning a submitted form into a prediction
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0}")]
    Model(#[from] ModelError),
}

impl PredictError {
    /// Localized message rendered on the page
    pub fn user_message(&self) -> String {
        match self {
            PredictError::InvalidNumber { .. } => INVALID_NUMBER_MESSAGE.to_string(),
            other => generic_message(other),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, PredictError::Model(_))
    }
}

/// Message for any failure without a dedicated localized text
pub fn generic_message(err: &dyn std::fmt::Display) -> String {
    format!("Đã xảy ra lỗi: {}", err)
}
