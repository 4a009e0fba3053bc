#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod bootstrap;
pub mod build;
pub mod content;
pub mod errors;
pub mod page;
pub mod prerender;
pub mod seo;
pub mod shell;
pub mod structured_data;
pub mod view;

pub mod artifact;
pub mod assets;
pub mod logging;

// Exports for end-users
pub use build::{BuildOptions, BuildOutput, execute_build};
pub use prerender::{PrerenderOptions, prerender};
pub use seo::{SeoOptions, generate_seo_files};

/// The version of Biddy being used.
///
/// Written into the page shell's generator tag and into the render artifact, which is refused by other versions.
pub const GENERATOR: &str = concat!("Biddy v", env!("CARGO_PKG_VERSION"));
