use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file layered over config/default.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON array of requests to process. Reads stdin when omitted.
    #[arg(long)]
    pub requests: Option<PathBuf>,

    /// Log filter, overriding the configured `log_level`
    #[arg(long)]
    pub log_level: Option<String>,
}
