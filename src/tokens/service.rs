use std::sync::Arc;

use crate::app::envy::Envy;

use super::{NoToken, RemoteToken, StaticToken, TokenError, TokenSource};

/// Picks the credential strategy: `API_TOKEN`, then `TOKEN_URL`, then none.
pub fn from_envy(envy: &Envy) -> Result<Arc<dyn TokenSource>, TokenError> {
    if let Some(token) = envy.api_token.as_ref().filter(|t| !t.is_empty()) {
        return Ok(Arc::new(StaticToken::new(token.to_owned())));
    }

    if let Some(url) = envy.token_url.as_ref().filter(|u| !u.is_empty()) {
        if envy.token_accept_invalid_certs {
            tracing::warn!("accepting invalid certificates from {}", url);
        }

        return Ok(Arc::new(RemoteToken::new(
            url.to_owned(),
            envy.token_accept_invalid_certs,
        )?));
    }

    tracing::warn!("no bearer credential configured, /api/files will fail");
    Ok(Arc::new(NoToken))
}
