mod cli;
mod picker;
mod report;
mod run;
mod selection;

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_logging(args: &cli::Args, config: &recolor_config::RecolorConfig) {
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive());
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("recolor: invalid log directive `{log_directive}`, using warn");
        LevelFilter::WARN.into()
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match recolor_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("recolor: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);
    tracing::debug!("recolor v{} starting", env!("CARGO_PKG_VERSION"));

    // The loader's own warning ran before a subscriber existed.
    if let Err(e) = recolor_config::validation::validate(&config) {
        tracing::warn!("{e}");
    }

    match run::run(&args, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("recolor: {e}");
            ExitCode::FAILURE
        }
    }
}
