use clap::Parser;
use solve_stats::utils::{export, logger, validation::Validate};
use solve_stats::{CliConfig, OutputFormat, SessionFile, SessionSummary, StatsError};

fn run(config: &CliConfig) -> Result<(), StatsError> {
    // 載入 session 檔案
    tracing::info!("📁 Loading session from: {}", config.session);
    let session = SessionFile::from_file(&config.session)?.into_session()?;
    tracing::info!(
        "Loaded {} solves for puzzle type '{}'",
        session.len(),
        session.puzzle_type
    );

    let summary = SessionSummary::from_session(
        &session,
        &config.display_options(),
        &config.locale_format(),
    )?;

    match config.format {
        OutputFormat::Text => print!("{}", summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if let Some(path) = &config.export_csv {
        export::export_session_csv(&session, path, config.millis)?;
        tracing::info!("📁 Solves exported to: {}", path);
    }

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting solve-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ solve-stats failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
