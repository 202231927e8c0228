use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::client::BaseClient;
use crate::error::DownloaderError;
use crate::identifier::PersistentId;
use crate::response::format_error_body;

/// One file of a dataset, as reported by the dataset-lookup endpoint.
///
/// Descriptors keep the order in which the repository lists the files
/// and are the unit of work of the download loop. The reported
/// `filesize` and `checksum` are informational; downloaded content is
/// not verified against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Base name the file is written under locally
    pub filename: String,
    /// Repository-internal id used to fetch the file content
    pub file_id: i64,
    /// Reported size in bytes
    pub filesize: i64,
    /// Reported checksum
    pub checksum: Checksum,
    /// Dataset-internal folder label, empty for the dataset root
    pub directory: String,
    /// Version identifier reported by the repository
    pub dataset_id: i64,
}

/// Checksum reported for a datafile, e.g. `MD5` plus its digest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Checksum {
    #[serde(rename = "type")]
    pub algorithm: String,
    pub value: String,
}

// Wire shape of the dataset-lookup response. Only the parts needed to
// build descriptors are modelled; the file list lives at
// data.latestVersion.files.
#[derive(Debug, Deserialize)]
struct DatasetResponse {
    data: DatasetData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetData {
    latest_version: LatestVersion,
}

#[derive(Debug, Deserialize)]
struct LatestVersion {
    files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    #[serde(default)]
    directory_label: Option<String>,
    dataset_version_id: i64,
    data_file: DataFile,
}

#[derive(Debug, Deserialize)]
struct DataFile {
    filename: String,
    id: i64,
    filesize: i64,
    checksum: Checksum,
}

/// Resolves a persistent identifier into the dataset's file descriptors.
///
/// Sends a GET request to the dataset-lookup endpoint and flattens the
/// response into a list of [`FileDescriptor`] values, preserving the
/// order reported by the repository. The single network call is the only
/// side effect.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `pid` - The persistent identifier of the dataset to resolve.
///
/// # Errors
///
/// * [`DownloaderError::Resolution`] when the endpoint answers with a
///   non-200 status.
/// * [`DownloaderError::Metadata`] when a 200 response does not parse
///   into the documented shape, or an entry has no filename.
/// * [`DownloaderError::Network`] when the repository is unreachable.
pub async fn list_dataset_files(
    client: &BaseClient,
    pid: &PersistentId,
) -> Result<Vec<FileDescriptor>, DownloaderError> {
    // Endpoint metadata
    let url = "api/datasets/:persistentId/";
    let parameters = HashMap::from([("persistentId".to_string(), pid.to_string())]);

    let response = client.get(url, Some(parameters)).await?;
    let status = response.status();
    let base_url = client.base_url().to_string();

    let raw = response
        .text()
        .await
        .map_err(|e| DownloaderError::Network {
            base_url: base_url.clone(),
            source: e,
        })?;

    if status != StatusCode::OK {
        return Err(DownloaderError::Resolution {
            persistent_id: pid.to_string(),
            base_url,
            status: status.as_u16(),
            body: format_error_body(&raw),
        });
    }

    let parsed: DatasetResponse =
        serde_json::from_str(&raw).map_err(|e| DownloaderError::Metadata {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

    parsed
        .data
        .latest_version
        .files
        .into_iter()
        .map(|entry| parse_entry(entry, &base_url))
        .collect()
}

/// Reduces one raw file entry to the values the download loop needs.
fn parse_entry(entry: FileEntry, base_url: &str) -> Result<FileDescriptor, DownloaderError> {
    if entry.data_file.filename.is_empty() {
        return Err(DownloaderError::Metadata {
            base_url: base_url.to_string(),
            reason: format!("datafile {} has no filename", entry.data_file.id),
        });
    }

    Ok(FileDescriptor {
        filename: entry.data_file.filename,
        file_id: entry.data_file.id,
        filesize: entry.data_file.filesize,
        checksum: entry.data_file.checksum,
        directory: entry.directory_label.unwrap_or_default(),
        dataset_id: entry.dataset_version_id,
    })
}
