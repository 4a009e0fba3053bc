use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use colored::Colorize;
use log::{debug, info, warn};

use crate::{
    artifact::RenderBundle,
    assets::{client_asset_paths, write_client_assets},
    content::ContentStore,
    errors::BiddyError,
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    shell::page_shell,
};

pub mod metadata;
pub mod options;

pub use metadata::BuildOutput;
pub use options::BuildOptions;

/// File name of the page shell inside the output directory.
pub const SHELL_FILE: &str = "index.html";

/// Writes the page shell, the client assets and the public files into the output directory, and the render artifact
/// into the SSR directory.
pub fn execute_build(options: &BuildOptions) -> Result<BuildOutput, BiddyError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::default();
    let section_format_options = FormatElapsedTimeOptions::section();

    if options.clean_output_dir && options.output_dir.exists() {
        debug!(target: "build", "Cleaning {}", options.output_dir.display());
        fs::remove_dir_all(&options.output_dir)?;
    }
    fs::create_dir_all(&options.output_dir)?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("loading content");
    let content_start = Instant::now();
    let content = ContentStore::load(&options.content_dir)?;
    info!(target: "content", "{}", format!("Content loaded in {}", format_elapsed_time(content_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());

    print_title("writing page shell");
    let shell_start = Instant::now();
    let shell_path = options.shell_path();
    fs::write(&shell_path, page_shell(&content.site).into_string())?;
    build_metadata.shell = shell_path.to_string_lossy().to_string();
    info!(target: "pages", "/ -> {} {}", shell_path.to_string_lossy().dimmed(), format_elapsed_time(shell_start.elapsed(), &FormatElapsedTimeOptions::default()));

    for asset in write_client_assets(&options.output_dir)? {
        info!(target: "assets", "{}", asset.dimmed());
        build_metadata.add_asset(asset);
    }

    if options.public_dir.exists() {
        print_title("copying public files");
        let public_start = Instant::now();
        let mut generated = client_asset_paths(&options.output_dir);
        generated.push(shell_path);
        copy_recursively(&options.public_dir, &options.output_dir, &generated, &mut build_metadata)?;
        info!(target: "build", "{}", format!("{} public files copied in {}", build_metadata.static_files.len(), format_elapsed_time(public_start.elapsed(), &section_format_options)).bold());
    } else {
        debug!(target: "build", "No public directory at {}, skipping", options.public_dir.display());
    }

    print_title("writing render artifact");
    let artifact_path = options.render_artifact_path();
    fs::create_dir_all(&options.ssr_dir)?;
    fs::write(&artifact_path, RenderBundle::new(content).encode()?)?;
    build_metadata.render_artifact = artifact_path.to_string_lossy().to_string();
    info!(target: "build", "{}", artifact_path.to_string_lossy().dimmed());

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &section_format_options)).bold());

    Ok(build_metadata)
}

/// Copies `source` into `destination`, leaving out any file that would replace one of the `generated` paths.
fn copy_recursively(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    generated: &[PathBuf],
    build_metadata: &mut BuildOutput,
) -> io::Result<()> {
    fs::create_dir_all(&destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.as_ref().join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_recursively(entry.path(), target, generated, build_metadata)?;
        } else if generated.contains(&target) {
            warn!(target: "build", "{} would overwrite a generated file, skipping", entry.path().display());
            build_metadata
                .skipped_static_files
                .push(entry.path().to_string_lossy().to_string());
        } else {
            fs::copy(entry.path(), &target)?;
            build_metadata.add_static_file(target.to_string_lossy().to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ROOT_PLACEHOLDER;
    use tempfile::{TempDir, tempdir};

    fn project() -> (TempDir, BuildOptions) {
        let dir = tempdir().unwrap();
        let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../website/content");

        fs::create_dir_all(dir.path().join("content")).unwrap();
        for entry in fs::read_dir(content_dir).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), dir.path().join("content").join(entry.file_name())).unwrap();
        }

        fs::create_dir_all(dir.path().join("public/images")).unwrap();
        fs::write(dir.path().join("public/robots.txt"), "User-agent: *\n").unwrap();
        fs::write(dir.path().join("public/images/hero.jpg"), b"jpg").unwrap();

        let options = BuildOptions::rooted(dir.path());
        (dir, options)
    }

    #[test]
    fn test_build_writes_everything() {
        let (dir, options) = project();

        let output = execute_build(&options).unwrap();

        let shell = fs::read_to_string(options.shell_path()).unwrap();
        assert!(shell.contains(ROOT_PLACEHOLDER));
        assert!(dir.path().join("dist/assets/site.css").exists());
        assert!(dir.path().join("dist/assets/client.js").exists());
        assert!(dir.path().join("dist/robots.txt").exists());
        assert!(dir.path().join("dist/images/hero.jpg").exists());
        assert!(options.render_artifact_path().exists());

        assert_eq!(output.static_files.len(), 2);
        assert_eq!(output.assets.len(), 2);
        assert_eq!(output.written_files().len(), 6);
    }

    #[test]
    fn test_build_artifact_holds_content() {
        let (_dir, options) = project();

        execute_build(&options).unwrap();

        let bundle = RenderBundle::read(&options.render_artifact_path()).unwrap();
        assert_eq!(
            bundle.content,
            ContentStore::load(&options.content_dir).unwrap()
        );
    }

    #[test]
    fn test_build_cleans_output_dir() {
        let (dir, options) = project();
        fs::create_dir_all(&options.output_dir).unwrap();
        fs::write(dir.path().join("dist/stale.html"), "old").unwrap();

        execute_build(&options).unwrap();
        assert!(!dir.path().join("dist/stale.html").exists());

        fs::write(dir.path().join("dist/stale.html"), "old").unwrap();
        execute_build(&BuildOptions {
            clean_output_dir: false,
            ..options
        })
        .unwrap();
        assert!(dir.path().join("dist/stale.html").exists());
    }

    #[test]
    fn test_public_files_do_not_replace_generated_files() {
        let (dir, options) = project();
        fs::create_dir_all(dir.path().join("public/assets")).unwrap();
        fs::write(dir.path().join("public/index.html"), "stale shell").unwrap();
        fs::write(dir.path().join("public/assets/site.css"), "body {}").unwrap();
        fs::write(dir.path().join("public/assets/logo.svg"), "<svg/>").unwrap();

        let output = execute_build(&options).unwrap();

        let shell = fs::read_to_string(options.shell_path()).unwrap();
        assert!(shell.contains(ROOT_PLACEHOLDER));
        assert_eq!(
            fs::read_to_string(dir.path().join("dist/assets/site.css")).unwrap(),
            crate::assets::STYLESHEET
        );
        assert!(dir.path().join("dist/assets/logo.svg").exists());
        assert_eq!(output.skipped_static_files.len(), 2);
        assert_eq!(output.static_files.len(), 3);
    }

    #[test]
    fn test_build_without_public_dir() {
        let (dir, options) = project();
        fs::remove_dir_all(dir.path().join("public")).unwrap();

        let output = execute_build(&options).unwrap();
        assert!(output.static_files.is_empty());
    }

    #[test]
    fn test_build_missing_content_fails() {
        let dir = tempdir().unwrap();

        let err = execute_build(&BuildOptions::rooted(dir.path())).unwrap_err();
        assert!(matches!(err, BiddyError::Content(_)));
    }
}
