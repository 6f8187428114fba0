use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub llm_provider: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub aviationstack_api_key: String,
    pub aviationstack_url: String,
    pub openweather_api_key: String,
    pub openweather_url: String,
    pub request_timeout_secs: u64,
    pub session_idle_secs: u64,
    pub max_sessions: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_url: env::var("OPENAI_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            aviationstack_api_key: env::var("AVIATIONSTACK_API_KEY").unwrap_or_default(),
            aviationstack_url: env::var("AVIATIONSTACK_URL")
                .unwrap_or_else(|_| "http://api.aviationstack.com/v1".to_string()),
            openweather_api_key: env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
            openweather_url: env::var("OPENWEATHER_URL")
                .unwrap_or_else(|_| "http://api.openweathermap.org/data/2.5".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            session_idle_secs: env::var("SESSION_IDLE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }
}
