mod logging;
mod preview;
mod server_utils;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use biddy::{
    BuildOptions, PrerenderOptions, SeoOptions, errors::BiddyError, execute_build,
    generate_seo_files, logging::init_logging, prerender,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use preview::{PreviewOptions, start_preview_web_server};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding `content/` and `public/`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Silence all output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate robots.txt and sitemap.xml
    Seo {
        /// Canonical URL of the site
        #[arg(long)]
        site_url: Option<String>,
        /// Ask search engines not to index the site
        #[arg(long)]
        no_index: bool,
        /// Directory to write the files to, relative to the project directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the page shell, the client assets and the render artifact
    Build {
        /// Output directory, relative to the project directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Keep existing files in the output directory
        #[arg(long)]
        no_clean: bool,
    },
    /// Render the page into the built page shell
    Prerender {
        /// Output directory of the build, relative to the project directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the built site
    Preview {
        /// Output directory of the build, relative to the project directory
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = preview::PORT)]
        port: u16,
        /// Expose the server to the local network
        #[arg(long)]
        host: bool,
    },
}

fn seo_options(
    root: &Path,
    site_url: Option<String>,
    no_index: bool,
    out: Option<PathBuf>,
) -> SeoOptions {
    let defaults = SeoOptions::rooted(root);
    SeoOptions {
        site_url: site_url.unwrap_or(defaults.site_url),
        indexable: !no_index,
        output_dir: out.map(|out| root.join(out)).unwrap_or(defaults.output_dir),
    }
}

fn build_options(root: &Path, out: Option<PathBuf>, no_clean: bool) -> BuildOptions {
    let defaults = BuildOptions::rooted(root);
    BuildOptions {
        output_dir: out.map(|out| root.join(out)).unwrap_or(defaults.output_dir),
        clean_output_dir: !no_clean,
        ..defaults
    }
}

async fn run(cli: Cli) -> Result<(), BiddyError> {
    let root = cli.root;

    match cli.command {
        Commands::Seo {
            site_url,
            no_index,
            out,
        } => {
            init_logging();
            generate_seo_files(&seo_options(&root, site_url, no_index, out))?;
        }
        Commands::Build { out, no_clean } => {
            init_logging();
            execute_build(&build_options(&root, out, no_clean))?;
        }
        Commands::Prerender { out } => {
            init_logging();
            prerender(&PrerenderOptions::from(&build_options(&root, out, false)))?;
        }
        Commands::Preview { out, port, host } => {
            logging::init_tracing();

            let build = build_options(&root, out, false);
            if !build.output_dir.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!(
                        "The {} directory does not exist. Please run `biddy build` first.",
                        build.output_dir.display()
                    ),
                )
                .into());
            }

            start_preview_web_server(PreviewOptions {
                dist_dir: build.output_dir,
                content_dir: build.content_dir,
                port,
                host,
            })
            .await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !quiet {
                eprintln!("{} {}", "error:".bold().red(), err);

                let mut source = std::error::Error::source(&err);
                while let Some(cause) = source {
                    eprintln!("  {} {}", "caused by:".dimmed(), cause);
                    source = cause.source();
                }
            }
            ExitCode::FAILURE
        }
    }
}
