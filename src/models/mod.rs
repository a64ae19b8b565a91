// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Island, Sex, Species, PenguinMeasurements, PredictionRecord, species_label, UNKNOWN_SPECIES_LABEL, RESULT_PREFIX};
pub use requests::PredictForm;
pub use responses::PageContext;
