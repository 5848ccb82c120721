use bazai::utils::error::{BazaiError, ErrorSeverity};
use bazai::utils::{logger, validation::Validate};
use bazai::{AppConfig, CliConfig, GeminiClient, HealthRecommender};
use clap::Parser;

fn exit_code(e: &BazaiError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,   // 可重試錯誤
        ErrorSeverity::High => 1,     // 輸入或設定錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn fail(e: &BazaiError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    match e {
        BazaiError::ValidationError { .. } => eprintln!("⚠️  {}", e.user_friendly_message()),
        _ => eprintln!("❌ {}", e.user_friendly_message()),
    }
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 先載入設定檔，才知道日誌格式
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(cli.verbose, config.logging.format);
    tracing::info!("🏃 Starting BazAI health recommender");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let generator = match config.resolve_api_key(cli.api_key.as_deref()) {
        Some(key) => match GeminiClient::from_config(&config.advice, key) {
            Ok(client) => Some(client),
            Err(e) => fail(&e),
        },
        None => None,
    };

    let recommender = HealthRecommender::new(generator);

    match recommender.recommend(&cli.submission()).await {
        Ok(report) => {
            tracing::info!("✅ Recommendation ready for {}", report.name);
            print!("{}", report);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
