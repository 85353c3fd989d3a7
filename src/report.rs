use tabled::{Table, Tabled};

/// Table row for the per-class metrics report.
#[derive(Tabled)]
struct MetricsRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Precision")]
    precision: String,
    #[tabled(rename = "Recall")]
    recall: String,
    #[tabled(rename = "F1")]
    f1: String,
    #[tabled(rename = "Support")]
    support: usize,
}

/// Metrics of one target class on the held-out split.
#[derive(Clone, Debug)]
pub struct ClassMetrics {
    pub class: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of held-out rows with this actual class.
    pub support: usize,
}

/// The evaluation of one trained classifier, derived from the confusion
/// matrix of its held-out predictions.
pub struct EvaluationReport {
    pub per_class: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_f1: f64,
    /// Number of rows evaluated.
    pub test_rows: usize,
}

impl EvaluationReport {
    /// Builds the report from aligned actual/predicted class codes.
    /// `classes` maps class codes back to their names.
    pub fn from_predictions(actual: &[usize], predicted: &[usize], classes: &[String]) -> Self {
        let k = classes.len();
        // counts[actual][predicted]
        let mut counts = vec![vec![0usize; k]; k];
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            if a < k && p < k {
                counts[a][p] += 1;
            }
        }

        let total: usize = counts.iter().map(|row| row.iter().sum::<usize>()).sum();
        let correct: usize = (0..k).map(|i| counts[i][i]).sum();

        let mut per_class = Vec::with_capacity(k);
        for i in 0..k {
            let true_positive = counts[i][i];
            let predicted_positive: usize = (0..k).map(|j| counts[j][i]).sum();
            let support: usize = counts[i].iter().sum();

            let precision = ratio(true_positive, predicted_positive);
            let recall = ratio(true_positive, support);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            per_class.push(ClassMetrics {
                class: classes[i].clone(),
                precision,
                recall,
                f1,
                support,
            });
        }

        let macro_precision = mean(per_class.iter().map(|m| m.precision));
        let macro_recall = mean(per_class.iter().map(|m| m.recall));
        let macro_f1 = mean(per_class.iter().map(|m| m.f1));

        EvaluationReport {
            per_class,
            accuracy: ratio(correct, total),
            macro_precision,
            macro_recall,
            macro_f1,
            test_rows: total,
        }
    }

    /// Renders the human-readable report printed at the end of a run.
    pub fn render(&self) -> String {
        let rows: Vec<MetricsRow> = self
            .per_class
            .iter()
            .map(|m| MetricsRow {
                class: m.class.clone(),
                precision: format!("{:.4}", m.precision),
                recall: format!("{:.4}", m.recall),
                f1: format!("{:.4}", m.f1),
                support: m.support,
            })
            .collect();

        format!(
            "{}\nRows evaluated: {}\nAccuracy: {:.4}\nMacro avg precision: {:.4}  recall: {:.4}  F1: {:.4}",
            Table::new(rows),
            self.test_rows,
            self.accuracy,
            self.macro_precision,
            self.macro_recall,
            self.macro_f1,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        0.0
    } else {
        collected.iter().sum::<f64>() / collected.len() as f64
    }
}
