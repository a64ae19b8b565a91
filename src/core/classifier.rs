use serde::{Deserialize, Serialize};

use crate::services::ModelError;

/// Trained classifier as exported from the training pipeline
///
/// `classes` holds the encoded label of each output slot, so the estimator
/// only ever reasons in slot indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    pub classes: Vec<i64>,
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    DecisionTree(DecisionTree),
    RandomForest { trees: Vec<DecisionTree> },
    LogisticRegression { coef: Vec<Vec<f64>>, intercept: Vec<f64> },
}

/// Array-of-nodes tree layout
///
/// Node `i` is a leaf when `children_left[i] == -1`. Split nodes send a
/// sample left when `x[feature[i]] <= threshold[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

const LEAF: i64 = -1;

impl DecisionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, n_classes: usize, n_features: usize) -> Result<(), ModelError> {
        let n = self.node_count();
        if n == 0 {
            return Err(ModelError::Invalid("decision tree has no nodes".to_string()));
        }
        if [self.children_right.len(), self.feature.len(), self.threshold.len(), self.value.len()]
            .iter()
            .any(|len| *len != n)
        {
            return Err(ModelError::Invalid("decision tree arrays differ in length".to_string()));
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(ModelError::Invalid(format!("node {} has a single child", node)));
                }
            } else {
                for child in [left, right] {
                    if child < 0 || child as usize >= n {
                        return Err(ModelError::Invalid(format!("node {} points to missing child {}", node, child)));
                    }
                }
                let feature = self.feature[node];
                if feature < 0 || feature as usize >= n_features {
                    return Err(ModelError::Invalid(format!(
                        "node {} splits on feature {} but the model has {} columns",
                        node, feature, n_features
                    )));
                }
            }
            if self.value[node].len() != n_classes {
                return Err(ModelError::Invalid(format!(
                    "node {} has {} class weights, expected {}",
                    node,
                    self.value[node].len(),
                    n_classes
                )));
            }
        }
        Ok(())
    }

    /// Walk from the root to the leaf that owns `x`
    pub fn leaf(&self, x: &[f64]) -> Result<usize, ModelError> {
        let mut node = 0usize;
        for _ in 0..self.node_count() {
            let left = self.children_left[node];
            if left == LEAF {
                return Ok(node);
            }
            let feature = self.feature[node] as usize;
            let value = *x.get(feature).ok_or(ModelError::FeatureMismatch {
                expected: feature + 1,
                actual: x.len(),
            })?;
            // NaN never satisfies `<=`, so it follows the right branch
            node = if value <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(ModelError::CyclicTree)
    }

    /// Class probabilities of the leaf that owns `x`
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
        let weights = &self.value[self.leaf(x)?];
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Ok(vec![0.0; weights.len()]);
        }
        Ok(weights.iter().map(|w| w / total).collect())
    }
}

impl Classifier {
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Check the artifact is internally consistent and expects `n_features`
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::Invalid("model declares no classes".to_string()));
        }
        let n_classes = self.n_classes();

        match &self.estimator {
            Estimator::DecisionTree(tree) => tree.validate(n_classes, n_features),
            Estimator::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err(ModelError::Invalid("random forest has no trees".to_string()));
                }
                trees.iter().try_for_each(|tree| tree.validate(n_classes, n_features))
            }
            Estimator::LogisticRegression { coef, intercept } => {
                if coef.len() != n_classes || intercept.len() != n_classes {
                    return Err(ModelError::Invalid(format!(
                        "logistic regression needs {} coefficient rows and intercepts, got {} and {}",
                        n_classes,
                        coef.len(),
                        intercept.len()
                    )));
                }
                match coef.iter().find(|row| row.len() != n_features) {
                    Some(row) => Err(ModelError::FeatureMismatch {
                        expected: n_features,
                        actual: row.len(),
                    }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Per-slot scores; larger wins
    pub fn scores(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
        match &self.estimator {
            Estimator::DecisionTree(tree) => tree.predict_proba(x),
            Estimator::RandomForest { trees } => {
                let mut mean = vec![0.0; self.n_classes()];
                for tree in trees {
                    for (acc, p) in mean.iter_mut().zip(tree.predict_proba(x)?) {
                        *acc += p;
                    }
                }
                let n = trees.len() as f64;
                mean.iter_mut().for_each(|acc| *acc /= n);
                Ok(mean)
            }
            Estimator::LogisticRegression { coef, intercept } => {
                if let Some(row) = coef.first() {
                    if row.len() != x.len() {
                        return Err(ModelError::FeatureMismatch {
                            expected: row.len(),
                            actual: x.len(),
                        });
                    }
                }
                Ok(coef
                    .iter()
                    .zip(intercept)
                    .map(|(row, b)| row.iter().zip(x).map(|(w, v)| w * v).sum::<f64>() + b)
                    .collect())
            }
        }
    }

    /// Encoded class of the highest-scoring slot
    pub fn predict(&self, x: &[f64]) -> Result<i64, ModelError> {
        let scores = self.scores(x)?;
        let slot = argmax(&scores).ok_or_else(|| ModelError::Invalid("model produced no scores".to_string()))?;
        self.classes
            .get(slot)
            .copied()
            .ok_or_else(|| ModelError::Invalid(format!("slot {} has no class label", slot)))
    }
}

/// Index of the first maximum
fn argmax(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}
