use anyhow::Result;
use clap::Parser;
use log::info;
use order_gateway::io::{requests, Args};
use order_gateway::{Gateway, Settings};

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log_level.clone());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    info!(
        "Starting order gateway with {} session(s)",
        settings.sessions.len()
    );
    let requests = requests::load(args.requests.as_deref())?;
    let gateway = Gateway::from_settings(&settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gateway.run(requests, &mut out)?;

    Ok(())
}
