use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use colored::Colorize;
use log::info;

use crate::{
    artifact::{RENDER_ARTIFACT_FILE, RenderBundle},
    build::{BuildOptions, SHELL_FILE},
    errors::{BiddyError, PrerenderError},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    page::render_app,
    shell::ROOT_PLACEHOLDER,
    view::ViewState,
};

/// Options for [`prerender()`].
#[derive(Debug, Clone)]
pub struct PrerenderOptions {
    /// The page shell written by the build. Default: `dist/index.html`
    pub shell_path: PathBuf,
    /// Directory holding the render artifact, removed once the page is prerendered. Default: `dist-ssr`
    pub ssr_dir: PathBuf,
}

impl PrerenderOptions {
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        Self::from(&BuildOptions::rooted(root))
    }

    pub fn render_artifact_path(&self) -> PathBuf {
        self.ssr_dir.join(RENDER_ARTIFACT_FILE)
    }
}

impl From<&BuildOptions> for PrerenderOptions {
    fn from(options: &BuildOptions) -> Self {
        Self {
            shell_path: options.shell_path(),
            ssr_dir: options.ssr_dir.clone(),
        }
    }
}

impl Default for PrerenderOptions {
    fn default() -> Self {
        Self {
            shell_path: PathBuf::from("dist").join(SHELL_FILE),
            ssr_dir: "dist-ssr".into(),
        }
    }
}

/// Renders the page into the shell's root element and removes the SSR directory.
///
/// Nothing is written unless the shell, its placeholder and the render artifact are all present and valid.
pub fn prerender(options: &PrerenderOptions) -> Result<(), BiddyError> {
    let start = Instant::now();
    print_title("prerendering");

    let shell_path = &options.shell_path;
    let artifact_path = options.render_artifact_path();

    if !shell_path.exists() {
        return Err(PrerenderError::MissingShell {
            path: shell_path.clone(),
        }
        .into());
    }
    if !artifact_path.exists() {
        return Err(PrerenderError::MissingRenderArtifact {
            path: artifact_path,
        }
        .into());
    }

    let shell = fs::read_to_string(shell_path)?;
    if !shell.contains(ROOT_PLACEHOLDER) {
        return Err(PrerenderError::MissingPlaceholder {
            path: shell_path.clone(),
            placeholder: ROOT_PLACEHOLDER,
        }
        .into());
    }

    let bundle = RenderBundle::read(&artifact_path)?;
    let app_html = render_app(&bundle.content, ViewState::default());

    let prerendered = shell.replacen(
        ROOT_PLACEHOLDER,
        &format!(r#"<div id="root">{}</div>"#, app_html),
        1,
    );
    fs::write(shell_path, prerendered)?;
    fs::remove_dir_all(&options.ssr_dir)?;

    info!(target: "pages", "/ -> {} {}", shell_path.to_string_lossy().dimmed(), format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default()));
    info!(target: "build", "Removed {}", options.ssr_dir.display());

    Ok(())
}
