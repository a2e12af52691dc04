use clap::Parser;
use folio::api::AppState;
use folio::utils::monitor::SystemMonitor;
use folio::utils::{logger, validation::Validate};
use folio::{server, CliConfig, LocalStorage, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting folio server");

    // 合併 CLI、設定檔與預設值
    let config = match ServerConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    if config.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲與文件庫
    let storage = LocalStorage::new(config.data_dir.clone());
    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    let state = AppState::new(storage, monitor, config.public_url.clone());

    // 補齊缺少的文件;既有檔案一律不動
    match state.docs.seed_missing().await {
        Ok(seeded) => {
            for name in &seeded {
                tracing::info!("📁 Seeded default document: {}", name);
            }
            if seeded.is_empty() {
                tracing::debug!("All documents present in {}", config.data_dir);
            }
        }
        Err(e) => {
            tracing::error!("❌ Failed to seed documents: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    match server::run(&config, state).await {
        Ok(()) => {
            tracing::info!("✅ Portfolio server exited");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                folio::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                folio::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                folio::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                folio::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
