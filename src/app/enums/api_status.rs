use axum::http::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Ready,
    Unavailable,
}

impl ApiStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Ready => "ready",
            Self::Unavailable => "unavailable",
        }
    }

    pub fn code(&self) -> StatusCode {
        match *self {
            Self::Ready => StatusCode::OK,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
