//! Datafile access
//!
//! Fetches the binary content of a single datafile through the
//! repository's datafile-access endpoint.

use reqwest::StatusCode;

use crate::client::BaseClient;
use crate::error::DownloaderError;
use crate::response::format_error_body;

/// Fetches the content of one datafile by its repository-internal id.
///
/// The whole body is read into memory; there is no streaming and no
/// resume. `filename` only labels a failure.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `file_id` - The repository-internal id of the datafile.
/// * `filename` - The name the file is reported under, used in diagnostics.
///
/// # Errors
///
/// * [`DownloaderError::Download`] when the endpoint answers with a
///   non-200 status.
/// * [`DownloaderError::Network`] when the repository is unreachable.
pub async fn fetch_datafile(
    client: &BaseClient,
    file_id: i64,
    filename: &str,
) -> Result<Vec<u8>, DownloaderError> {
    let url = format!("api/access/datafile/{file_id}");
    let base_url = client.base_url().to_string();

    let response = client.get(&url, None).await?;
    let status = response.status();

    if status != StatusCode::OK {
        let body = response
            .text()
            .await
            .map_err(|e| DownloaderError::Network {
                base_url: base_url.clone(),
                source: e,
            })?;

        return Err(DownloaderError::Download {
            filename: filename.to_string(),
            base_url,
            status: status.as_u16(),
            body: format_error_body(&body),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| DownloaderError::Network {
            base_url,
            source: e,
        })?;

    Ok(bytes.to_vec())
}
