use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving a dataset or materializing its files.
///
/// Every variant is fatal: the run ends at the first error and files
/// already written stay on disk. Nothing is retried.
#[derive(Debug, Error)]
pub enum DownloaderError {
    /// The repository base URL could not be parsed.
    #[error("invalid repository URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The repository could not be reached at the network level.
    #[error("unable to reach '{base_url}': {source}")]
    Network {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The dataset-lookup endpoint answered with a non-200 status.
    #[error("could not resolve dataset '{persistent_id}' at '{base_url}' (HTTP {status})\n\n{body}")]
    Resolution {
        persistent_id: String,
        base_url: String,
        status: u16,
        body: String,
    },

    /// The dataset metadata could not be parsed into a file list.
    #[error("unexpected dataset metadata from '{base_url}': {reason}")]
    Metadata { base_url: String, reason: String },

    /// The datafile-access endpoint answered with a non-200 status.
    #[error("could not download datafile '{filename}' at '{base_url}' (HTTP {status})\n\n{body}")]
    Download {
        filename: String,
        base_url: String,
        status: u16,
        body: String,
    },

    /// A target directory could not be created.
    #[error("could not create directory '{}'", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A downloaded file could not be written to disk.
    #[error("could not save file '{filename}'")]
    FileWrite {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl DownloaderError {
    /// Maps the error to the exit code the CLI terminates with.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            DownloaderError::InvalidUrl { .. } => exitcode::USAGE,
            DownloaderError::Network { .. } => exitcode::UNAVAILABLE,
            DownloaderError::Resolution { .. }
            | DownloaderError::Metadata { .. }
            | DownloaderError::Download { .. } => exitcode::DATAERR,
            DownloaderError::DirectoryCreation { .. } | DownloaderError::FileWrite { .. } => {
                exitcode::IOERR
            }
        }
    }
}
