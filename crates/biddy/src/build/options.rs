use std::path::{Path, PathBuf};

/// Options for [`execute_build()`](crate::build::execute_build).
///
/// Paths are relative to the current directory by default. Use [`BuildOptions::rooted`] to resolve them against a
/// project directory instead.
///
/// ## Examples
/// ```rust
/// use biddy::BuildOptions;
///
/// let options = BuildOptions {
///   clean_output_dir: false,
///   ..BuildOptions::rooted("website")
/// };
/// assert_eq!(options.output_dir, std::path::Path::new("website/dist"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding the JSON content files. Default: `content`
    pub content_dir: PathBuf,
    /// Files copied as-is into the output directory (images, favicon, robots.txt, sitemap.xml). Default: `public`
    pub public_dir: PathBuf,
    /// Where the page shell and client assets are written. Default: `dist`
    pub output_dir: PathBuf,
    /// Where the render artifact is written. Default: `dist-ssr`
    pub ssr_dir: PathBuf,
    /// Whether to clean the output directory before building. Default: `true`
    pub clean_output_dir: bool,
}

impl BuildOptions {
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();

        Self {
            content_dir: root.join(defaults.content_dir),
            public_dir: root.join(defaults.public_dir),
            output_dir: root.join(defaults.output_dir),
            ssr_dir: root.join(defaults.ssr_dir),
            ..defaults
        }
    }

    /// Path of the page shell inside the output directory.
    pub fn shell_path(&self) -> PathBuf {
        self.output_dir.join(crate::build::SHELL_FILE)
    }

    pub fn render_artifact_path(&self) -> PathBuf {
        self.ssr_dir.join(crate::artifact::RENDER_ARTIFACT_FILE)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            content_dir: "content".into(),
            public_dir: "public".into(),
            output_dir: "dist".into(),
            ssr_dir: "dist-ssr".into(),
            clean_output_dir: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_paths() {
        let options = BuildOptions::rooted("/srv/site");

        assert_eq!(options.content_dir, Path::new("/srv/site/content"));
        assert_eq!(options.public_dir, Path::new("/srv/site/public"));
        assert_eq!(options.shell_path(), Path::new("/srv/site/dist/index.html"));
        assert_eq!(
            options.render_artifact_path(),
            Path::new("/srv/site/dist-ssr/entry-server.bin")
        );
        assert!(options.clean_output_dir);
    }
}
