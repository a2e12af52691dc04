use clap::Parser;
use folio::utils::logger;
use folio::{DocumentStore, LocalStorage};

#[derive(Parser)]
#[command(name = "folio-seed")]
#[command(about = "Write default portfolio documents into a data directory")]
struct Args {
    /// Directory that will hold content.json / projects.json / theme.json
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Seeding portfolio documents into: {}", args.data_dir);

    let storage = LocalStorage::new(args.data_dir.clone());
    let docs = DocumentStore::new(storage);

    // 只補缺少的檔案,已存在的內容不會被覆寫
    match docs.seed_missing().await {
        Ok(seeded) => {
            if seeded.is_empty() {
                println!("✅ All documents already present in {}", args.data_dir);
            } else {
                for name in &seeded {
                    tracing::info!("📁 Created: {}", name);
                    println!("📁 Created: {}", name);
                }
                println!("✅ Seeded {} document(s) into {}", seeded.len(), args.data_dir);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Seeding failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                folio::utils::error::ErrorSeverity::Low => 0,
                folio::utils::error::ErrorSeverity::Medium => 2,
                folio::utils::error::ErrorSeverity::High => 1,
                folio::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
