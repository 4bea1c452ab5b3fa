// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixture generation.

use crate::settings::FixtureSettings;
use graphdef_core::{BuildError, GraphWriter, WriteError};
use std::path::{Path, PathBuf};

/// Build and write every configured fixture, in order
///
/// Output goes to the settings' output directory, resolved against `base_dir`.
/// Stops at the first failure.
pub fn generate(settings: &FixtureSettings, base_dir: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let output_dir = settings.output_dir(base_dir);
    let writer = GraphWriter::with_encoding(settings.encoding);

    tracing::info!(
        "Generating {} fixture(s) into {:?}",
        settings.fixtures.len(),
        output_dir
    );

    let mut written = Vec::with_capacity(settings.fixtures.len());
    for fixture in &settings.fixtures {
        let graph = fixture.build().map_err(|source| FixtureError::Build {
            fixture: fixture.file_name.clone(),
            source,
        })?;
        let path = writer.write(&graph, &output_dir, &fixture.file_name)?;
        tracing::info!("Wrote fixture {:?} ({} nodes)", path, graph.len());
        written.push(path);
    }

    Ok(written)
}

/// Error while generating fixtures
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Settings file could not be loaded
    #[error("Failed to load settings: {0}")]
    Settings(std::io::Error),

    /// A fixture graph is invalid
    #[error("Failed to build fixture {fixture}: {source}")]
    Build {
        /// Fixture file name
        fixture: String,
        /// Underlying error
        source: BuildError,
    },

    /// A fixture could not be written
    #[error("Failed to write fixture: {0}")]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureSpec;
    use graphdef_core::{Encoding, GraphReader};

    #[test]
    fn test_generate_builtin_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FixtureSettings::default();

        let written = generate(&settings, dir.path()).unwrap();
        let output_dir = settings.output_dir(dir.path());
        assert_eq!(
            written,
            vec![output_dir.join("graph.pb"), output_dir.join("multiplication.pb")]
        );

        let graph = GraphReader::new().read(&written[0]).unwrap();
        assert_eq!(graph, settings.fixtures[0].build().unwrap());
    }

    #[test]
    fn test_regeneration_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FixtureSettings::default();

        let first: Vec<Vec<u8>> = generate(&settings, dir.path())
            .unwrap()
            .iter()
            .map(|p| std::fs::read(p).unwrap())
            .collect();
        let second: Vec<Vec<u8>> = generate(&settings, dir.path())
            .unwrap()
            .iter()
            .map(|p| std::fs::read(p).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn test_text_encoding_setting() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FixtureSettings {
            encoding: Encoding::Text,
            fixtures: vec![FixtureSpec::multiplication("graph.pbtxt", 42.0, 69.0)],
            ..FixtureSettings::default()
        };

        let written = generate(&settings, dir.path()).unwrap();
        let graph = GraphReader::with_encoding(Encoding::Text).read(&written[0]).unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_stops_at_invalid_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let mut broken = FixtureSpec::multiplication("broken.pb", 1.0, 2.0);
        broken.variables.clear();

        let settings = FixtureSettings {
            fixtures: vec![broken, FixtureSpec::multiplication("after.pb", 1.0, 2.0)],
            ..FixtureSettings::default()
        };

        match generate(&settings, dir.path()) {
            Err(FixtureError::Build { fixture, source }) => {
                assert_eq!(fixture, "broken.pb");
                assert_eq!(source, BuildError::UnknownNode("a".to_string()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!settings.output_dir(dir.path()).join("after.pb").exists());
    }
}
