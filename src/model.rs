use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::error::Failed;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::neighbors::knn_classifier::{KNNClassifier, KNNClassifierParameters};
use smartcore::tree::decision_tree_classifier::{
    DecisionTreeClassifier, DecisionTreeClassifierParameters,
};

use crate::args::{ModelConfig, ModelKind};
use crate::errors::{PipelineError, Result};

/// Trains the classifier selected by the configured key on the training
/// split and predicts the held-out split. The session supplies matrices
/// whose categorical columns are already label-encoded.
pub fn train_and_predict(
    config: &ModelConfig,
    x_train: &DenseMatrix<f64>,
    y_train: &Vec<usize>,
    x_test: &DenseMatrix<f64>,
    seed: u64,
) -> Result<Vec<usize>> {
    let predicted = match config.model {
        ModelKind::Knn => {
            let params = KNNClassifierParameters::default().with_k(config.neighbors);
            let classifier =
                KNNClassifier::fit(x_train, y_train, params).map_err(trainer_failed)?;
            classifier.predict(x_test).map_err(trainer_failed)?
        }
        ModelKind::Dt => {
            let classifier = DecisionTreeClassifier::fit(
                x_train,
                y_train,
                DecisionTreeClassifierParameters::default(),
            )
            .map_err(trainer_failed)?;
            classifier.predict(x_test).map_err(trainer_failed)?
        }
        ModelKind::Rf => {
            let params = RandomForestClassifierParameters::default().with_seed(seed);
            let classifier =
                RandomForestClassifier::fit(x_train, y_train, params).map_err(trainer_failed)?;
            classifier.predict(x_test).map_err(trainer_failed)?
        }
    };

    Ok(predicted)
}

fn trainer_failed(e: Failed) -> PipelineError {
    PipelineError::Session(format!("trainer failed: {}", e))
}
