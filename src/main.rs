use clap::Parser;
use nearby_places::core::{export, ConfigProvider};
use nearby_places::utils::{logger, validation::Validate};
use nearby_places::{
    Category, CliConfig, GoogleMapsClient, LocalStorage, PlacesPipeline, RunOutcome, SearchEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.list_categories {
        for category in Category::ALL {
            println!("{:<18} {}", category.api_id(), category.label_ja());
        }
        return Ok(());
    }

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting nearby-places CLI");
    if config.verbose {
        tracing::debug!(
            "Search: address={:?}, categories={:?}, radius={}m, language={}",
            config.address,
            config.categories,
            config.radius,
            config.language
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let provider = GoogleMapsClient::new(config.api_key.clone())
        .with_base_url(config.base_url.clone())
        .with_language(config.language.clone());
    let locale = config.locale();
    let radius = config.radius;
    let monitor_enabled = config.monitor;

    let storage = LocalStorage::new(&config.output_path);
    let pipeline = PlacesPipeline::new(storage, provider, config);
    let engine = SearchEngine::new_with_monitoring(pipeline, monitor_enabled);

    // 唯一的錯誤處理邊界
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
