use clap::{Parser, ValueEnum};
use most_active_cookie::{ScanConfig, ScanError, TiePolicy};
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ties {
    /// Report every key tied at the maximum count
    All,
    /// Stop at the first key below the maximum count
    FirstRun,
}

impl From<Ties> for TiePolicy {
    fn from(ties: Ties) -> Self {
        match ties {
            Ties::All => TiePolicy::All,
            Ties::FirstRun => TiePolicy::FirstRun,
        }
    }
}

#[derive(Parser)]
#[command(name = "most_active_cookie")]
#[command(about = "Report the most active cookie(s) in a cookie log for a given day", long_about = None)]
struct Cli {
    /// Path to the cookie log file
    #[arg(short, long)]
    file: PathBuf,

    /// Date to scan for, as YYYY-MM-DD
    #[arg(short, long)]
    date: String,

    /// How tied keys are reported
    #[arg(long, value_enum)]
    ties: Option<Ties>,
}

fn execute(cli: Cli) -> Result<Vec<String>, ScanError> {
    let config = ScanConfig::new(cli.file, &cli.date, cli.ties.map(TiePolicy::from))?;
    most_active_cookie::run(&config)
}

fn main() {
    most_active_cookie::init_tracing("most_active_cookie");
    let cli = Cli::parse();

    match execute(cli) {
        Ok(keys) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for key in keys {
                if writeln!(out, "{}", key).is_err() {
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
