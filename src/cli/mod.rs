use std::time::Duration;

use anyhow::{Result, bail};
use tracing::debug;

use crate::config::{load_config, load_config_file};
use crate::core::Pipeline;
use crate::translate::GoogleTranslator;

mod args;
mod exit_status;
mod logging;
mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init(args.verbose);

    if !args.root.is_dir() {
        bail!("Root directory does not exist: {}", args.root.display());
    }

    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => {
            let loaded = load_config(&args.root)?;
            match &loaded.path {
                Some(path) => debug!(path = %path.display(), "loaded config"),
                None => debug!("no config file found, using defaults"),
            }
            loaded.config
        }
    };

    let translator = GoogleTranslator::new(
        &args.api_url,
        args.api_key.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    let pipeline = Pipeline::new(&config, translator)?;

    let summary = if args.dry_run {
        pipeline.plan(&args.root)?
    } else {
        pipeline.run(&args.root)?
    };
    report::print(&summary, &args.root);

    if summary.dry_run && !summary.pending.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
