//! Client assets shipped next to the page shell.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const STYLESHEET_URL: &str = "/assets/site.css";
pub const CLIENT_SCRIPT_URL: &str = "/assets/client.js";

pub const STYLESHEET: &str = include_str!("../assets/site.css");
pub const CLIENT_SCRIPT: &str = include_str!("../assets/client.js");

const CLIENT_ASSETS: [(&str, &str); 2] = [(STYLESHEET_URL, STYLESHEET), (CLIENT_SCRIPT_URL, CLIENT_SCRIPT)];

fn asset_path(output_dir: &Path, url: &str) -> PathBuf {
    output_dir.join(url.trim_start_matches('/'))
}

/// Paths the client assets are written to inside `output_dir`.
pub fn client_asset_paths(output_dir: &Path) -> Vec<PathBuf> {
    CLIENT_ASSETS
        .iter()
        .map(|(url, _)| asset_path(output_dir, url))
        .collect()
}

/// Writes every client asset into `output_dir`, returning the written paths.
pub fn write_client_assets(output_dir: &Path) -> io::Result<Vec<String>> {
    CLIENT_ASSETS
        .into_iter()
        .map(|(url, contents)| {
            let path = asset_path(output_dir, url);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, contents)?;
            Ok(path.to_string_lossy().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_client_assets() {
        let dir = tempdir().unwrap();

        let written = write_client_assets(dir.path()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            client_asset_paths(dir.path()),
            written.iter().map(PathBuf::from).collect::<Vec<_>>()
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("assets/site.css")).unwrap(),
            STYLESHEET
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("assets/client.js")).unwrap(),
            CLIENT_SCRIPT
        );
    }

    #[test]
    fn test_client_script_drives_page_hooks() {
        for hook in [
            "data-menu-toggle",
            "data-close-menu",
            "data-scroll-top",
            "data-bandcamp-wrapper",
            "mobile-nav",
            "ResizeObserver",
        ] {
            assert!(CLIENT_SCRIPT.contains(hook), "client script ignores {}", hook);
        }
    }
}
