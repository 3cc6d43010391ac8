//! Bearer credential strategies.
//!
//! The listing proxy never decides where a token comes from; it asks the
//! [`TokenSource`] held in the application state for a current one on every
//! request.

use async_trait::async_trait;

pub mod errors;
pub mod no_token;
pub mod remote_token;
pub mod service;
pub mod static_token;

pub use errors::TokenError;
pub use no_token::NoToken;
pub use remote_token::RemoteToken;
pub use static_token::StaticToken;

#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Produces the bearer credential for one outbound request.
    async fn token(&self) -> Result<String, TokenError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool {
        true
    }
}
