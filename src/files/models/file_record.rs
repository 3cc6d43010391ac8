use serde::{Deserialize, Serialize};

use crate::files::enums::file_status::FileStatus;

/// One entry of the upstream file listing.
///
/// The upstream spells the timestamp key `createAt`; both spellings are
/// accepted and `createdAt` is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(alias = "createAt")]
    pub created_at: String,
    pub file_status: FileStatus,
    pub inbox_path: String,
    #[serde(rename = "fileID", default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(
        rename = "accessionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accession_id: Option<String>,
}
