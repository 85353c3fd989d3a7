use std::collections::HashMap;

use log::{debug, info};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::model_selection::train_test_split;

use crate::args::ModelConfig;
use crate::errors::{PipelineError, Result};
use crate::flow_record::{column_kind, ColumnKind, FeatureValue, ATTACK, FEATURE_COLUMNS, LABEL};
use crate::model;
use crate::prepare::labels::Dataset;
use crate::report::EvaluationReport;

/// Maps the distinct values of one categorical column to dense integer
/// codes, in first-seen order.
pub struct CategoryEncoder {
    codes: HashMap<String, usize>,
    names: Vec<String>,
}

impl CategoryEncoder {
    pub fn fit<I>(values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut codes = HashMap::new();
        let mut names = Vec::new();
        for value in values {
            let next = codes.len();
            codes.entry(value.clone()).or_insert_with(|| {
                names.push(value);
                next
            });
        }
        CategoryEncoder { codes, names }
    }

    pub fn code(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A training session over a prepared working table.
///
/// This is the boundary to the trainer: the session owns the dense feature
/// matrix, the encoded target, and the class-name mapping. Building it
/// validates the contract the trainer depends on, in particular that the
/// declared categorical columns exist and match the actual column typing.
pub struct ExperimentSession {
    x: DenseMatrix<f64>,
    y: Vec<usize>,
    class_names: Vec<String>,
    target_name: &'static str,
    seed: u64,
}

impl ExperimentSession {
    /// Validates the prepared table against the categorical declaration and
    /// encodes it into trainer-ready form.
    pub fn new(dataset: &Dataset, categorical: &[&str], seed: u64) -> Result<Self> {
        if dataset.is_empty() {
            return Err(PipelineError::Session("working table is empty".to_string()));
        }
        if dataset.records.len() != dataset.target.len() {
            return Err(PipelineError::Session(format!(
                "{} records but {} target values",
                dataset.records.len(),
                dataset.target.len()
            )));
        }
        if dataset.target_name != LABEL && dataset.target_name != ATTACK {
            return Err(PipelineError::Session(format!(
                "unknown target column `{}`",
                dataset.target_name
            )));
        }

        for &column in categorical {
            match column_kind(column) {
                Some(ColumnKind::Categorical) => {}
                Some(ColumnKind::Numeric) => {
                    return Err(PipelineError::Session(format!(
                        "column `{}` is declared categorical but carries numeric values",
                        column
                    )))
                }
                None => {
                    return Err(PipelineError::Session(format!(
                        "categorical declaration references unknown column `{}`",
                        column
                    )))
                }
            }
        }
        for column in FEATURE_COLUMNS {
            if column_kind(column) == Some(ColumnKind::Categorical)
                && !categorical.contains(&column)
            {
                return Err(PipelineError::Session(format!(
                    "categorical column `{}` is missing from the declaration",
                    column
                )));
            }
        }

        // One encoder per declared categorical column.
        let mut encoders: HashMap<&str, CategoryEncoder> = HashMap::new();
        for &column in categorical {
            let values = dataset
                .records
                .iter()
                .filter_map(|record| match record.feature(column) {
                    Some(FeatureValue::Categorical(value)) => Some(value),
                    _ => None,
                });
            encoders.insert(column, CategoryEncoder::fit(values));
        }

        let n_rows = dataset.len();
        let n_features = FEATURE_COLUMNS.len();
        let mut values = Vec::with_capacity(n_rows * n_features);
        for record in &dataset.records {
            for column in FEATURE_COLUMNS {
                let value = match record.feature(column) {
                    Some(FeatureValue::Numeric(value)) => value,
                    Some(FeatureValue::Categorical(value)) => {
                        let code = encoders
                            .get(column)
                            .and_then(|encoder| encoder.code(&value))
                            .ok_or_else(|| {
                                PipelineError::Session(format!(
                                    "no categorical code for `{}` in column `{}`",
                                    value, column
                                ))
                            })?;
                        code as f64
                    }
                    None => {
                        return Err(PipelineError::Session(format!(
                            "record has no value for column `{}`",
                            column
                        )))
                    }
                };
                values.push(value);
            }
        }

        let x = DenseMatrix::new(n_rows, n_features, values, false);

        let target_encoder = CategoryEncoder::fit(dataset.target.iter().cloned());
        let y = dataset
            .target
            .iter()
            .map(|value| {
                target_encoder.code(value).ok_or_else(|| {
                    PipelineError::Session(format!("no class code for target value `{}`", value))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        log_class_distribution(dataset.target_name, &target_encoder, &y);

        Ok(ExperimentSession {
            x,
            y,
            class_names: target_encoder.names().to_vec(),
            target_name: dataset.target_name,
            seed,
        })
    }

    /// Splits the session into train and held-out parts, trains the selected
    /// classifier, and derives the evaluation report from the held-out
    /// predictions.
    pub fn train_and_evaluate(&self, config: &ModelConfig) -> Result<EvaluationReport> {
        if config.test_fraction <= 0.0 || config.test_fraction >= 1.0 {
            return Err(PipelineError::Session(format!(
                "test fraction {} is outside (0, 1)",
                config.test_fraction
            )));
        }

        let (x_train, x_test, y_train, y_test) =
            train_test_split(&self.x, &self.y, config.test_fraction, true, Some(self.seed));

        info!(
            "training `{}` on {} rows, evaluating on {}",
            config.model,
            y_train.len(),
            y_test.len()
        );

        let predicted = model::train_and_predict(config, &x_train, &y_train, &x_test, self.seed)?;

        Ok(EvaluationReport::from_predictions(
            &y_test,
            &predicted,
            &self.class_names,
        ))
    }

    pub fn n_rows(&self) -> usize {
        self.y.len()
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn target_name(&self) -> &'static str {
        self.target_name
    }
}

fn log_class_distribution(target_name: &str, encoder: &CategoryEncoder, y: &[usize]) {
    let mut counts = vec![0usize; encoder.len()];
    for &class in y {
        counts[class] += 1;
    }
    let mut pairs: Vec<(&String, usize)> = encoder.names().iter().zip(counts).collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    let summary = pairs
        .iter()
        .map(|(name, count)| format!("{}={}", name, count))
        .collect::<Vec<_>>()
        .join(", ");
    debug!("`{}` class distribution: {}", target_name, summary);
}
