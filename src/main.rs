//! Wiring & DI. Entry point: load config, pick the backend adapter, inject into the
//! service, run the front-end. No business logic here.

use clap::Parser;
use dotenv::dotenv;
use meeting_summarizer::adapters::http::{HttpSummarizer, MockSummarizer};
use meeting_summarizer::adapters::ui::{OneShotInputPort, TuiInputPort};
use meeting_summarizer::cli::Cli;
use meeting_summarizer::ports::{InputPort, SummarizerPort};
use meeting_summarizer::shared::config::AppConfig;
use meeting_summarizer::usecases::SummarizeService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cli = Cli::parse();

    let cfg = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("configuration: {}", e))?
        .with_overrides(&cli.to_overrides());

    // --- Backend adapter ---
    let backend: Arc<dyn SummarizerPort> = if cfg.is_mock() {
        warn!("mock mode: no request leaves this machine");
        Arc::new(MockSummarizer::with_delay(cfg.mock_delay_ms_or_default()))
    } else {
        let http = HttpSummarizer::new(
            &cfg.base_url_or_default(),
            &cfg.summarize_path_or_default(),
            cfg.request_timeout(),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(
            endpoint = %http.endpoint(),
            timeout_secs = cfg.request_timeout().as_secs(),
            "summarization backend configured"
        );
        Arc::new(http)
    };

    let service = Arc::new(SummarizeService::new(backend));

    // --- Front-end: one-shot with --file, interactive menu otherwise ---
    let input_port: Arc<dyn InputPort> = match cli.file.clone() {
        Some(path) => Arc::new(OneShotInputPort::new(Arc::clone(&service), path, cli.json)),
        None => {
            if cli.show_banner() {
                meeting_summarizer::adapters::ui::init_ui();
            } else {
                meeting_summarizer::adapters::ui::tui::apply_theme();
            }
            Arc::new(TuiInputPort::new(Arc::clone(&service), cli.json))
        }
    };

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
