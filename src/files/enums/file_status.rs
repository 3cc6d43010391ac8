use serde::{Deserialize, Serialize};

/// Lifecycle state of a file as reported by the upstream API.
///
/// Matching is case-insensitive. Unknown values are kept as-is in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    Uploaded,
    Submitted,
    Ingested,
    Archived,
    Verified,
    BackedUp,
    Ready,
    Downloaded,
    Error,
    Disabled,
    Enabled,
    Other(String),
}

/// Display tone used by the admin page when colouring a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Primary,
    Danger,
    Muted,
    Info,
}

impl StatusTone {
    pub fn value(&self) -> &str {
        match *self {
            Self::Success => "success",
            Self::Primary => "primary",
            Self::Danger => "danger",
            Self::Muted => "muted",
            Self::Info => "info",
        }
    }
}

impl FileStatus {
    pub fn value(&self) -> &str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Submitted => "submitted",
            Self::Ingested => "ingested",
            Self::Archived => "archived",
            Self::Verified => "verified",
            Self::BackedUp => "backed up",
            Self::Ready => "ready",
            Self::Downloaded => "downloaded",
            Self::Error => "error",
            Self::Disabled => "disabled",
            Self::Enabled => "enabled",
            Self::Other(value) => value,
        }
    }

    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            Self::Uploaded
            | Self::Submitted
            | Self::Ingested
            | Self::Archived
            | Self::Verified
            | Self::BackedUp
            | Self::Ready => Some(StatusTone::Success),
            Self::Downloaded => Some(StatusTone::Primary),
            Self::Error => Some(StatusTone::Danger),
            Self::Disabled => Some(StatusTone::Muted),
            Self::Enabled => Some(StatusTone::Info),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for FileStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "uploaded" => Self::Uploaded,
            "submitted" => Self::Submitted,
            "ingested" => Self::Ingested,
            "archived" => Self::Archived,
            "verified" => Self::Verified,
            "backed up" => Self::BackedUp,
            "ready" => Self::Ready,
            "downloaded" => Self::Downloaded,
            "error" => Self::Error,
            "disabled" => Self::Disabled,
            "enabled" => Self::Enabled,
            _ => Self::Other(value),
        }
    }
}

impl From<FileStatus> for String {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Other(value) => value,
            known => known.value().to_string(),
        }
    }
}
