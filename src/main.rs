use clap::Parser;

use calcchain::cli::commands::{self, OutputOptions};
use calcchain::cli::{Cli, Commands};
use calcchain::io::{ExitCode, OutputFormat};
use calcchain::{Settings, debug_event, logging};

fn load_settings(cli: &Cli) -> Result<Settings, Box<figment::Error>> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn run(cli: Cli) -> ExitCode {
    let mut settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            let format = OutputFormat::from_json_flag(cli.json);
            return commands::init::report_config_error(
                &format!("Configuration error: {e}"),
                format,
            );
        }
    };

    // CLI flags override the settings file
    if let Some(precision) = cli.precision {
        settings.display.precision = precision;
    }
    if cli.json {
        settings.display.json = true;
    }

    logging::init_with_config(&settings.logging);
    debug_event!(
        "cli",
        "settings",
        "precision={} json={}",
        settings.display.precision,
        settings.display.json
    );

    let options = OutputOptions::from_settings(&settings);

    match cli.command {
        Commands::Compute { op, a, b } => commands::compute::run(op, a, b, options),
        Commands::Chain { initial, steps } => commands::chain::run(initial, steps, options),
        Commands::Demo => commands::demo::run(options),
        Commands::Init { force } => commands::init::run_init(force, options.format),
        Commands::Config => commands::init::run_config(&settings, options.format),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    run(cli).into()
}
