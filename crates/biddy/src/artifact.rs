//! The render artifact: everything the prerenderer needs to render the page, frozen at build time.
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{GENERATOR, content::ContentStore, errors::PrerenderError};

pub const RENDER_ARTIFACT_FILE: &str = "entry-server.bin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBundle {
    /// [`GENERATOR`] of the build that wrote the bundle.
    pub generator: String,
    pub content: ContentStore,
}

impl RenderBundle {
    pub fn new(content: ContentStore) -> Self {
        Self {
            generator: GENERATOR.to_string(),
            content,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Reads a bundle written by [`RenderBundle::encode`], refusing bundles from another version of Biddy.
    pub fn read(path: &Path) -> Result<Self, PrerenderError> {
        let bytes = fs::read(path).map_err(|_| PrerenderError::MissingRenderArtifact {
            path: path.to_path_buf(),
        })?;

        let bundle: RenderBundle =
            bincode::deserialize(&bytes).map_err(|source| PrerenderError::InvalidRenderArtifact {
                path: path.to_path_buf(),
                source,
            })?;

        if bundle.generator != GENERATOR {
            return Err(PrerenderError::GeneratorMismatch {
                path: path.to_path_buf(),
                found: bundle.generator,
                expected: GENERATOR,
            });
        }

        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_read_written_bundle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RENDER_ARTIFACT_FILE);
        let bundle = RenderBundle::new(fixtures::store());

        fs::write(&path, bundle.encode().unwrap()).unwrap();

        assert_eq!(RenderBundle::read(&path).unwrap(), bundle);
    }

    #[test]
    fn test_read_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RENDER_ARTIFACT_FILE);
        fs::write(&path, b"not a bundle").unwrap();

        assert!(matches!(
            RenderBundle::read(&path),
            Err(PrerenderError::InvalidRenderArtifact { .. })
        ));
    }

    #[test]
    fn test_read_other_generator() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RENDER_ARTIFACT_FILE);
        let bundle = RenderBundle {
            generator: "Biddy v0.0.1".to_string(),
            content: fixtures::store(),
        };
        fs::write(&path, bundle.encode().unwrap()).unwrap();

        let err = RenderBundle::read(&path).unwrap_err();
        assert!(matches!(err, PrerenderError::GeneratorMismatch { .. }));
        assert!(err.to_string().contains("Biddy v0.0.1"));
    }

    #[test]
    fn test_read_missing() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            RenderBundle::read(&dir.path().join(RENDER_ARTIFACT_FILE)),
            Err(PrerenderError::MissingRenderArtifact { .. })
        ));
    }
}
