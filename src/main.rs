use clap::Parser;
use treasure_hunt::utils::{logger, validation::Validate};
use treasure_hunt::{CliConfig, HuntError, OutputFormat, PathFinder, TreasureFinder};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Treasure hunt failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }
}

fn run(config: &CliConfig) -> Result<(), HuntError> {
    config.validate()?;

    let plan = config.plan()?;
    if let Some(name) = &plan.name {
        tracing::info!("🗺️  Following hunt '{}'", name);
    }

    let mut finder = TreasureFinder::with_policy(plan.policy);
    finder.set_paths(plan.paths);

    let Some(report) = finder.follow_paths() else {
        eprintln!("No paths to follow. Pass instructions, --input or --config.");
        std::process::exit(1);
    };

    match config.format {
        OutputFormat::Text => println!("{}", report.directions),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
