//! The download command
//!
//! Collects the repository URL, the persistent identifier and the
//! optional API token, then drives the whole-dataset download and
//! terminates the process on failure.

use std::path::Path;

use colored::Colorize;
use structopt::StructOpt;
use tokio::runtime::Runtime;

use crate::client::{print_error, BaseClient};
use crate::data_access::dataset::download_dataset;
use crate::error::DownloaderError;
use crate::identifier::PersistentId;

/// Arguments of the download command
#[derive(StructOpt, Debug)]
#[structopt(about = "Download all files of a dataset from a Dataverse repository")]
pub struct DownloadCommand {
    #[structopt(help = "URL of the Dataverse repository")]
    pub dataverse_url: String,

    #[structopt(help = "Persistent identifier (PID) of the dataset to download")]
    pub persistent_id: PersistentId,

    #[structopt(
        long,
        short,
        help = "API token for the Dataverse repository. Required for non-public datasets."
    )]
    pub api_token: Option<String>,
}

impl DownloadCommand {
    /// Runs the download and terminates the process with a non-zero exit
    /// code on failure.
    pub fn process(self) {
        let runtime = Runtime::new().unwrap();

        match runtime.block_on(self.run()) {
            Ok(count) => print_summary(count),
            Err(error) => {
                print_error(&error);
                std::process::exit(error.exit_code());
            }
        }
    }

    async fn run(&self) -> Result<usize, DownloaderError> {
        let client = BaseClient::new(&self.dataverse_url, self.api_token.as_deref())?;
        download_dataset(&client, &self.persistent_id, Path::new(".")).await
    }
}

/// Prints the closing summary when running interactively.
fn print_summary(count: usize) {
    if atty::is(atty::Stream::Stdout) {
        println!(
            "\n{} Downloaded {} file(s).\n",
            "🎉 Success!".green().bold(),
            count
        );
    }
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use super::*;

    #[test]
    fn test_parses_positional_arguments() {
        let command = DownloadCommand::from_iter_safe([
            "dvdl",
            "https://demo.dataverse.org",
            "doi:10.5072/FK2/ABCDEF",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(command.dataverse_url, "https://demo.dataverse.org");
        assert_eq!(command.persistent_id.as_str(), "doi:10.5072/FK2/ABCDEF");
        assert!(command.api_token.is_none());
    }

    #[test]
    fn test_parses_api_token_option() {
        let command = DownloadCommand::from_iter_safe([
            "dvdl",
            "https://demo.dataverse.org",
            "doi:10.5072/FK2/ABCDEF",
            "--api-token",
            "s3cret",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(command.api_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_rejects_empty_persistent_id() {
        let result =
            DownloadCommand::from_iter_safe(["dvdl", "https://demo.dataverse.org", "  "]);

        assert!(result.is_err());
    }
}
