use clap::Parser;
use palindromic::config::{FindArgs, FindSettings};
use palindromic::core::{finder_for, output, scenarios};
use palindromic::utils::{logger, validation::Validate};
use palindromic::{CliConfig, Command, InputSource, PalindromeEngine, Result, Strategy, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::error!("❌ {} (exit code {})", e, e.exit_code());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: CliConfig) -> Result<()> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    match config.command {
        Command::Find(args) => find(&args, file_config.as_ref()),
        Command::Check => check(),
    }
}

fn find(args: &FindArgs, file_config: Option<&TomlConfig>) -> Result<()> {
    let settings = FindSettings::resolve(
        file_config,
        args.strategy,
        args.format,
        args.pretty_override(),
    );
    tracing::debug!("Resolved settings: {:?}", settings);

    let inputs = InputSource::from_args(args).read_inputs()?;
    let engine = PalindromeEngine::for_strategy(settings.strategy);
    let reports = engine.report_all(&inputs);

    print!("{}", output::render(&reports, settings.format, settings.pretty)?);
    Ok(())
}

fn check() -> Result<()> {
    for strategy in Strategy::ALL {
        let passed = scenarios::run_scenarios(&finder_for(strategy))?;
        tracing::info!("✅ {}: {} scenario(s) passed", strategy, passed);
    }
    println!("All tests passed successfully");
    Ok(())
}
