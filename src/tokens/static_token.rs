use std::fmt;

use async_trait::async_trait;

use super::{TokenError, TokenSource};

/// A pre-provisioned credential that lives as long as the process.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticToken").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String, TokenError> {
        if self.token.is_empty() {
            return Err(TokenError::Empty);
        }

        Ok(self.token.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_token() {
        let source = StaticToken::new("abc");
        assert_eq!(source.token().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn empty_token_is_not_a_credential() {
        let source = StaticToken::new("");
        assert!(matches!(source.token().await, Err(TokenError::Empty)));
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", StaticToken::new("abc"));
        assert!(!rendered.contains("abc"));
    }
}
