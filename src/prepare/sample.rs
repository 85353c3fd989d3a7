use log::info;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::args::PrepareConfig;
use crate::prepare::labels::Dataset;

/// Subsamples the working table down to `sample_size` rows, uniformly and
/// without replacement, keeping records and target aligned. A table at or
/// below the sample size, or a run with sampling disabled, passes through
/// unchanged. The seed makes the survivor set reproducible; survivor order
/// is not part of the contract.
pub fn subsample(dataset: Dataset, config: &PrepareConfig) -> Dataset {
    if !config.sample || dataset.len() <= config.sample_size {
        return dataset;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let picks = index::sample(&mut rng, dataset.len(), config.sample_size).into_vec();

    info!(
        "sampled {} of {} rows (seed {})",
        config.sample_size,
        dataset.len(),
        config.seed
    );

    let records = picks.iter().map(|&i| dataset.records[i].clone()).collect();
    let target = picks.iter().map(|&i| dataset.target[i].clone()).collect();

    Dataset {
        records,
        target_name: dataset.target_name,
        target,
    }
}
