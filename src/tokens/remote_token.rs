use async_trait::async_trait;
use reqwest::Client;

use super::{TokenError, TokenSource};

/// Fetches a token from an identity-provider endpoint that answers with a
/// JSON array of token strings. The first entry is used.
#[derive(Debug, Clone)]
pub struct RemoteToken {
    client: Client,
    url: String,
}

impl RemoteToken {
    pub fn new(url: impl Into<String>, accept_invalid_certs: bool) -> Result<Self, TokenError> {
        // development identity providers serve self-signed certificates
        let client = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TokenSource for RemoteToken {
    async fn token(&self) -> Result<String, TokenError> {
        let res = self.client.get(&self.url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TokenError::Status(status));
        }

        let text = res.text().await?;
        let tokens: Vec<String> = serde_json::from_str(&text)?;

        match tokens.into_iter().next() {
            Some(token) if token.is_empty() => Err(TokenError::Empty),
            Some(token) => Ok(token),
            None => Err(TokenError::NoTokens),
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
