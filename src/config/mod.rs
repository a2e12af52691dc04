pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use file::FileConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "File-backed portfolio site server")]
pub struct CliConfig {
    /// Listen address, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory holding content.json / projects.json / theme.json
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Optional TOML config file; CLI flags win over file values
    #[arg(long)]
    pub config: Option<String>,

    /// Public base URL, shown in logs and the status report
    #[arg(long)]
    pub public_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Include process stats in /api/status")]
    pub monitor: bool,
}

/// CLI 旗標與設定檔合併後的最終設定。
/// 優先序:CLI > TOML 檔 > 內建預設值。
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub data_dir: String,
    pub public_url: Option<String>,
    pub verbose: bool,
    pub monitor: bool,
}

impl ServerConfig {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            bind: cli
                .bind
                .or_else(|| file.bind().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            data_dir: cli
                .data_dir
                .or_else(|| file.data_dir().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            public_url: cli
                .public_url
                .or_else(|| file.public_url().map(str::to_string)),
            verbose: cli.verbose,
            monitor: cli.monitor || file.monitoring_enabled(),
        })
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_addr("bind", &self.bind)?;
        validation::validate_path("data_dir", &self.data_dir)?;
        if let Some(url) = &self.public_url {
            validation::validate_url("public_url", url)?;
        }
        Ok(())
    }
}
