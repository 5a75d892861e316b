use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_database: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mongo_uri = var("MONGO_URI")
            .or_else(|| var("DATABASE_URL"))
            .ok_or("MONGO_URI must be set")?;

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT '{}': {}", port, e))?,
            None => {
                log::info!("PORT not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let openai = OpenAiConfig {
            api_key: var("OPENAI_API_KEY"),
            base_url: var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        };

        if openai.api_key.is_none() {
            log::warn!("⚠️  OPENAI_API_KEY not set, meal plan generation will fail");
        }

        Ok(Config {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongo_uri,
            mongo_database: var("MONGO_DATABASE"),
            cors_allowed_origins,
            openai,
        })
    }
}
