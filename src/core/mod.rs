// Core prediction exports
pub mod classifier;
pub mod features;

pub use classifier::{Classifier, DecisionTree, Estimator};
pub use features::{FeatureRow, QUERY_COLUMNS};
