//! A Rust tool for downloading datasets from Dataverse repositories.
//!
//! Given a repository base URL, a dataset persistent identifier and an
//! optional API token, this crate resolves the dataset's file list and
//! materializes every file into a local directory tree that mirrors the
//! dataset's internal folder labels.

#![warn(unused_crate_dependencies)]

/// Client functionality for interacting with Dataverse APIs
pub mod client;

/// Error types for dataset resolution and file materialization
pub mod error;

/// Types for handling dataset persistent identifiers
pub mod identifier;

/// Helpers for presenting repository responses
pub(crate) mod response;

/// Native API functionality
pub mod native_api {
    /// Dataset operations
    pub mod dataset {
        pub use listfiles::list_dataset_files;

        /// File listing
        pub mod listfiles;
    }
}

/// Data access functionality
pub mod data_access {
    pub use datafile::fetch_datafile;
    pub use dataset::download_dataset;

    /// Datafile operations
    pub mod datafile;
    /// Dataset operations
    pub mod dataset;
}

/// Commonly used types and functions
pub mod prelude {
    pub use super::client::BaseClient;
    pub use super::data_access::dataset::download_dataset;
    pub use super::error::DownloaderError;
    pub use super::identifier::PersistentId;
    pub use super::native_api::dataset;
    pub use super::native_api::dataset::listfiles::{Checksum, FileDescriptor};
}

/// Command-line interface functionality
pub mod cli {
    /// Download command
    pub mod download;
}
