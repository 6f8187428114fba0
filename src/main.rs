use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use flightdesk::config::AppConfig;
use flightdesk::handlers;
use flightdesk::services::ai::ollama::OllamaProvider;
use flightdesk::services::ai::openai::OpenAiProvider;
use flightdesk::services::ai::LlmProvider;
use flightdesk::services::flights::aviationstack::AviationStackProvider;
use flightdesk::services::weather::openweather::OpenWeatherProvider;
use flightdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "ollama" => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
                timeout,
            )?)
        }
        _ => {
            anyhow::ensure!(
                !config.openai_api_key.is_empty(),
                "OPENAI_API_KEY must be set when LLM_PROVIDER=openai"
            );
            tracing::info!("using OpenAI LLM provider (model: {})", config.openai_model);
            Box::new(OpenAiProvider::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                config.openai_url.clone(),
                timeout,
            )?)
        }
    };

    if config.aviationstack_api_key.is_empty() {
        tracing::warn!("AVIATIONSTACK_API_KEY not set, flight lookups will fail");
    }
    if config.openweather_api_key.is_empty() {
        tracing::warn!("OPENWEATHER_API_KEY not set, weather lookups will fail");
    }

    let flights = AviationStackProvider::new(
        config.aviationstack_api_key.clone(),
        config.aviationstack_url.clone(),
        timeout,
    )?;
    let weather = OpenWeatherProvider::new(
        config.openweather_api_key.clone(),
        config.openweather_url.clone(),
        timeout,
    )?;

    let state = Arc::new(AppState::new(
        config.clone(),
        llm,
        Box::new(flights),
        Box::new(weather),
    ));

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
