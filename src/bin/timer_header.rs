//! Print the header of PSRCHIVE Timer archives.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use serde_json::json;

use psrtimer::logging::init_logging;
use psrtimer::time::iso_utc;
use psrtimer::TimerHeader;

#[derive(Parser)]
#[command(
    name = "timer-header",
    version,
    about = "Decode and print the header of PSRCHIVE Timer archives"
)]
struct Cli {
    /// Timer archives to read.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Print the decoded header as JSON instead of the field listing.
    #[arg(long)]
    json: bool,

    /// Only print the one-line description of each file.
    #[arg(long, conflicts_with = "json")]
    brief: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn show(cli: &Cli, header: &TimerHeader) -> anyhow::Result<()> {
    if cli.json {
        let summary = header.summary();
        let document = json!({
            "source": header.source(),
            "summary": {
                "psrname": summary.psrname,
                "telescope": summary.telescope,
                "mjd": summary.mjd,
                "start": iso_utc(summary.start),
                "stop": iso_utc(summary.stop()),
                "duration_s": summary.duration_s,
                "position": summary.position().to_string(),
            },
            "header": header.record(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else if cli.brief {
        println!("{}", header.describe());
    } else {
        println!("{header}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());

    let mut status = ExitCode::SUCCESS;
    for path in &cli.files {
        let result = TimerHeader::from_file(path)
            .with_context(|| format!("{}", path.display()))
            .and_then(|header| show(&cli, &header));
        if let Err(error) = result {
            eprintln!("error: {error:#}");
            status = ExitCode::FAILURE;
        }
    }
    status
}
