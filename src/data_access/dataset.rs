//! Whole-dataset download
//!
//! Materializes every file of a dataset into a local directory tree
//! that mirrors the dataset's internal folder labels.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::client::BaseClient;
use crate::data_access::datafile::fetch_datafile;
use crate::error::DownloaderError;
use crate::identifier::PersistentId;
use crate::native_api::dataset::listfiles::{list_dataset_files, FileDescriptor};

/// Downloads every file of a dataset into a directory tree under `out_dir`.
///
/// This asynchronous function performs the following steps:
/// 1. Resolves the persistent identifier into the dataset's file list.
/// 2. Derives the local root directory from the identifier's last segment.
/// 3. Fetches and writes each file sequentially, in the order the
///    repository reports them.
///
/// A progress line is printed before each fetch. The run aborts at the
/// first failure; files already written remain on disk and existing
/// files of the same name are overwritten without warning.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the requests.
/// * `pid` - The persistent identifier of the dataset to download.
/// * `out_dir` - The directory the dataset root directory is created in.
///
/// # Returns
///
/// The number of files written on success.
pub async fn download_dataset(
    client: &BaseClient,
    pid: &PersistentId,
    out_dir: &Path,
) -> Result<usize, DownloaderError> {
    let files = list_dataset_files(client, pid).await?;
    let root_dir = out_dir.join(pid.root_directory());

    for descriptor in &files {
        materialize_file(client, descriptor, &root_dir).await?;
    }

    Ok(files.len())
}

/// Fetches one descriptor and writes it below `root_dir`.
///
/// The fetch happens before any filesystem change; directories are only
/// created for content that actually arrived.
async fn materialize_file(
    client: &BaseClient,
    descriptor: &FileDescriptor,
    root_dir: &Path,
) -> Result<(), DownloaderError> {
    let target_dir = target_directory(root_dir, descriptor);
    let out_path = target_dir.join(&descriptor.filename);

    let shown = out_path.display().to_string();
    println!("Downloading {} ...", shown.bold());

    let content = fetch_datafile(client, descriptor.file_id, &descriptor.filename).await?;

    tokio::fs::create_dir_all(&target_dir)
        .await
        .map_err(|e| DownloaderError::DirectoryCreation {
            path: target_dir.clone(),
            source: e,
        })?;

    tokio::fs::write(&out_path, &content)
        .await
        .map_err(|e| DownloaderError::FileWrite {
            filename: descriptor.filename.clone(),
            source: e,
        })?;

    Ok(())
}

/// Computes the directory a descriptor is written into.
///
/// An empty directory label means the dataset root.
fn target_directory(root_dir: &Path, descriptor: &FileDescriptor) -> PathBuf {
    if descriptor.directory.is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(&descriptor.directory)
    }
}
