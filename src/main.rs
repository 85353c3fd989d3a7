mod args;
mod errors;
mod flow_record;
mod loader;
mod model;
mod prepare;
mod report;
mod session;
mod tests;

use std::path::Path;
use std::time::Instant;

use args::{Cli, ConfigFile, ModelConfig, PrepareConfig};
use clap::Parser;
use log::{error, info};
use session::ExperimentSession;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // If a config file is provided, it replaces the CLI option groups
    let (prepare_config, model_config) = if let Some(config_path) = &cli.config_file {
        match confy::load_path::<ConfigFile>(config_path) {
            Ok(config) => (config.prepare, config.model),
            Err(e) => {
                error!("Error loading configuration file: {:?}", e);
                std::process::exit(1);
            }
        }
    } else {
        (cli.prepare, cli.model)
    };

    if let Err(e) = run(&cli.dataset, &prepare_config, &model_config) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(
    dataset_path: &Path,
    prepare_config: &PrepareConfig,
    model_config: &ModelConfig,
) -> anyhow::Result<()> {
    let start = Instant::now();

    let raw = loader::load_csv(dataset_path)?;
    let projected = prepare::select::project(&raw)?;
    let (records, labels) = prepare::normalize::normalize(projected)?;
    let mut dataset = prepare::labels::select_target(records, labels, prepare_config.binary);
    dataset = prepare::sample::subsample(dataset, prepare_config);
    prepare::anonymize::apply(&mut dataset, prepare_config.anonymization)?;

    let session = ExperimentSession::new(
        &dataset,
        &flow_record::CATEGORICAL_COLUMNS,
        prepare_config.seed,
    )?;
    let evaluation = session.train_and_evaluate(model_config)?;

    info!(
        "Duration: {:.4} seconds",
        start.elapsed().as_secs_f64()
    );

    // The report is the only payload on stdout; nothing is printed on failure
    println!("{}", evaluation.render());

    Ok(())
}
