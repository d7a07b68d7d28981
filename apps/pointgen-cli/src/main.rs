//! `pointgen [COUNT]`: prints COUNT PointIds (default 1), one per line.

mod config;

use std::io::Write;
use std::process::ExitCode;

use pointgen_pointid::Generator;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pointgen [COUNT]";

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries only identifiers.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(count) = parse_count(std::env::args().nth(1).as_deref()) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = config::load()?;
    tracing::debug!(url = %config.ip_echo_url, count, "generating point ids");

    let generator = Generator::new(&config);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut out = std::io::stdout().lock();
    for _ in 0..count {
        let id = rt.block_on(generator.next_id());
        writeln!(out, "{id}")?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Parses the optional COUNT argument. `None` means invalid.
fn parse_count(arg: Option<&str>) -> Option<u32> {
    match arg {
        None => Some(1),
        Some(s) => s.parse().ok().filter(|n| *n > 0),
    }
}
