use clap::Parser;
use nearby_places::config::toml_config::TomlConfig;
use nearby_places::core::{export, ConfigProvider};
use nearby_places::utils::{logger, validation::Validate};
use nearby_places::{GoogleMapsClient, LocalStorage, PlacesPipeline, RunOutcome, SearchEngine};

#[derive(Parser)]
#[command(name = "toml-search")]
#[command(about = "Nearby places search driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "nearby-places.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show the search plan without calling the provider
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置 (日誌尚未初始化，錯誤直接輸出)
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No provider requests will be made");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut provider = GoogleMapsClient::new(config.api_key()?)
        .with_base_url(config.base_url())
        .with_language(config.language());
    if let Some(timeout) = config.timeout() {
        provider = provider.with_timeout(timeout)?;
    }
    let locale = config.locale();
    let radius = config.radius_m();

    let storage = LocalStorage::new(config.output_path());
    let pipeline = PlacesPipeline::new(storage, provider, config);
    let engine = SearchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(RunOutcome::Completed {
            output_path,
            records,
        }) => {
            println!("{}", export::to_table(&records, locale));
            println!();
            println!("✅ Found {} places", records.len());
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(RunOutcome::NothingFound { center }) => {
            tracing::warn!("No places matched around {}", center);
            println!(
                "⚠️ 半径{}m以内に選択されたジャンルの場所が見つかりませんでした。",
                radius
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let categories: Vec<String> = config
        .categories()
        .iter()
        .map(|c| format!("{} ({})", c.api_id(), c.label_ja()))
        .collect();

    tracing::info!("📋 Search Summary:");
    tracing::info!("  Address: {}", config.address());
    tracing::info!("  Categories: {}", categories.join(", "));
    tracing::info!("  Radius: {}m", config.radius_m());
    tracing::info!("  Language: {}", config.language());
    tracing::info!("  Provider: {}", config.base_url());
    tracing::info!(
        "  Output: {}{}",
        config.output_path(),
        if config.compress_output() { " (zip)" } else { "" }
    );
}
