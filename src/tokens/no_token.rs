use async_trait::async_trait;

use super::{TokenError, TokenSource};

/// Used when no credential is configured; every request fails before upstream is called.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoToken;

#[async_trait]
impl TokenSource for NoToken {
    async fn token(&self) -> Result<String, TokenError> {
        Err(TokenError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn is_configured(&self) -> bool {
        false
    }
}
