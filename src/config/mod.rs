pub mod toml_config;

use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{OutputFormat, TomlConfig, DEFAULT_TIMEOUT_SECONDS, MAX_ATTEMPTS};
    use crate::adapters::http::DEFAULT_ENDPOINT;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "hiring-list")]
    #[command(about = "Fetch the hiring list and show valid candidates grouped by list id")]
    pub struct CliConfig {
        /// Endpoint serving the candidate JSON array
        #[arg(long)]
        pub endpoint: Option<String>,

        /// Per-request timeout
        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        /// TOML configuration file; command line flags take precedence
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Total fetch attempts; each failure past the first triggers a retry
        #[arg(long, default_value = "1")]
        pub attempts: u32,

        /// Ignore responses from fetches superseded by a retry
        #[arg(long)]
        pub discard_stale: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Fills every setting not given on the command line from `file`.
        pub fn merge_file(&mut self, file: &TomlConfig) {
            if self.endpoint.is_none() {
                self.endpoint = file.source.endpoint.clone();
            }
            if self.timeout_seconds.is_none() {
                self.timeout_seconds = file.source.timeout_seconds;
            }
            if self.format.is_none() {
                self.format = file.output.format;
            }
            self.discard_stale |= file.discard_stale_responses();
        }

        pub fn output_format(&self) -> OutputFormat {
            self.format.unwrap_or_default()
        }
    }

    impl ConfigProvider for CliConfig {
        fn api_endpoint(&self) -> &str {
            self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
        }

        fn discard_stale_responses(&self) -> bool {
            self.discard_stale
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("endpoint", self.api_endpoint())?;
            validation::validate_positive_number(
                "timeout_seconds",
                self.request_timeout().as_secs(),
                1,
            )?;
            validation::validate_range("attempts", self.attempts, 1, MAX_ATTEMPTS)?;
            Ok(())
        }
    }

}
