use anyhow::Context;
use brightest_core::{BrightestSelector, Config, DEMO_COLORS, HttpPaletteSource};
use std::env;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    tracing::debug!("brightest {}", brightest_core::version());

    let config = Config::from_env()?;

    // No arguments: run the demo list.
    let args: Vec<String> = env::args().skip(1).collect();
    let colors: Vec<String> = if args.is_empty() {
        DEMO_COLORS.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    let selector = BrightestSelector::new(HttpPaletteSource::from_config(&config));
    let brightest = selector
        .select_and_name(&colors)
        .context("parse input colors")?;

    println!("{}", brightest_core::report(brightest.as_ref()));
    Ok(())
}
