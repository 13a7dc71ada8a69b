use clap::Parser;
use hiring_list::app::render;
use hiring_list::core::ConfigProvider;
use hiring_list::utils::{logger, validation::Validate};
use hiring_list::{CliConfig, Controller, HttpCandidateSource, PageState, ResponsePolicy, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting hiring-list");

    if let Some(path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", path.display());
        let file = match TomlConfig::from_file(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        config.merge_file(&file);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = HttpCandidateSource::from_config(&config)?;
    let policy = if config.discard_stale_responses() {
        ResponsePolicy::LatestRequestOnly
    } else {
        ResponsePolicy::LastWriteWins
    };
    let format = config.output_format();

    let controller = Controller::with_policy(source, policy);
    let mut updates = controller.updates();
    let mut attempts_left = config.attempts;

    while let Some(state) = updates.recv().await {
        match state.status {
            PageState::Loading => {
                eprintln!("{}", render::render_text(&state));
            }
            PageState::Success => {
                tracing::info!(
                    groups = state.groups.len(),
                    candidates = state.candidate_count(),
                    "Candidates loaded"
                );
                println!("{}", render::render(&state, format)?);
                return Ok(());
            }
            PageState::Failed => {
                attempts_left = attempts_left.saturating_sub(1);
                eprintln!("❌ {}", state.error_message);
                if attempts_left == 0 {
                    tracing::error!("Giving up after {} attempt(s)", config.attempts);
                    std::process::exit(2);
                }
                controller.retry();
            }
        }
    }

    anyhow::bail!("state stream closed before candidates were loaded")
}
