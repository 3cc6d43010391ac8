use std::fmt;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://api:8090";

#[derive(Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub upstream_url: Option<String>,

    pub api_token: Option<String>,
    pub token_url: Option<String>,
    #[serde(default)]
    pub token_accept_invalid_certs: bool,
}

impl Envy {
    /// Loads `.env.<APP_ENV>` if present, then reads the process environment.
    pub fn load() -> Result<Self, ::envy::Error> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if let Err(e) = dotenvy::from_filename(format!(".env.{}", app_env)) {
            tracing::debug!(%e, "no dotenv file for {}", app_env);
        }

        ::envy::from_env::<Envy>()
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn upstream_url(&self) -> &str {
        self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL)
    }
}

// tokens stay out of logs
impl fmt::Debug for Envy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envy")
            .field("app_env", &self.app_env)
            .field("port", &self.port)
            .field("upstream_url", &self.upstream_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("token_url", &self.token_url)
            .field(
                "token_accept_invalid_certs",
                &self.token_accept_invalid_certs,
            )
            .finish()
    }
}
