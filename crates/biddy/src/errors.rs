//! Error types for Biddy.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, show the Display message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ContentError {
    #[error("Failed to read content file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse content file: {path}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error)]
pub enum PrerenderError {
    #[error("Missing {}. Run `biddy build` first.", .path.display())]
    MissingShell { path: PathBuf },

    #[error("Missing {}. Run the build before prerender.", .path.display())]
    MissingRenderArtifact { path: PathBuf },

    #[error("Expected \"{placeholder}\" in {}", .path.display())]
    MissingPlaceholder {
        path: PathBuf,
        placeholder: &'static str,
    },

    #[error("Render artifact {} could not be decoded", .path.display())]
    InvalidRenderArtifact {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error(
        "Render artifact {} was produced by {found}, but this is {expected}. Run the build again.",
        .path.display()
    )]
    GeneratorMismatch {
        path: PathBuf,
        found: String,
        expected: &'static str,
    },
}

#[derive(Error)]
pub enum BootstrapError {
    #[error("Expected element with id \"root\"")]
    RootNotFound,

    #[error(transparent)]
    Rewrite(#[from] lol_html::errors::RewritingError),
}

#[derive(Error, Debug)]
pub enum BiddyError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Prerender(#[from] PrerenderError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("Failed to encode render artifact")]
    Encode(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ContentError, PrerenderError, BootstrapError);
