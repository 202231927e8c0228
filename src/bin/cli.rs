use colored::Colorize;
use structopt::StructOpt;

use dvdownloader::cli::download::DownloadCommand;

static HEADER: &str = r#"
--- Dataverse Dataset Downloader (DVDL) ---
"#;

fn main() {
    let command = DownloadCommand::from_args();

    if atty::is(atty::Stream::Stdout) {
        println!("{}", HEADER.bold());
    }

    command.process();
}
