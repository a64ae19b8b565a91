// Service exports
pub mod history;
pub mod model_store;

pub use history::PredictionHistory;
pub use model_store::{ModelError, ModelStore};
