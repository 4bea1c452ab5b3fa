// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph fixture generator.
//!
//! Writes small graph definition files used as deterministic input by tests
//! elsewhere. Takes no arguments: settings are read from `fixtures.ron` in
//! this crate's directory when present, and fixtures are written to
//! `fixtures/` next to it.

mod fixture;
mod generate;
mod settings;

use generate::{generate, FixtureError};
use settings::{FixtureSettings, SETTINGS_FILE_NAME};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "graphdef_fixtures=debug".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fixture generator v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(Path::new(env!("CARGO_MANIFEST_DIR"))) {
        tracing::error!("Fixture generation failed: {e}");
        std::process::exit(1);
    }
}

fn run(crate_dir: &Path) -> Result<(), FixtureError> {
    let settings = FixtureSettings::load_or_default(&crate_dir.join(SETTINGS_FILE_NAME))
        .map_err(FixtureError::Settings)?;
    let written = generate(&settings, crate_dir)?;
    tracing::info!("Generated {} fixture(s)", written.len());
    Ok(())
}
