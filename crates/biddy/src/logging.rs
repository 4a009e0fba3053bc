use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
        }
    }
}

impl FormatElapsedTimeOptions {
    /// Thresholds for whole build steps, which are expected to take longer than single files.
    pub fn section() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 5,
            millis_yellow_threshold: None,
            millis_red_threshold: None,
        }
    }
}

/// Sets up `env_logger` with Biddy's output format.
///
/// `RUST_LOG` is honoured and defaults to `info`. Passing `--quiet` on the command line silences every record.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    let _ = Builder::from_env(logging_env)
        .format(|buf, record| {
            if std::env::args().any(|arg| arg == "--quiet") {
                return Ok(());
            }

            if record.target() == "SKIP_FORMAT" {
                return writeln!(buf, "{}", record.args());
            }

            let target = record.target().to_ascii_lowercase();
            let target = match record.level() {
                log::Level::Error => target.bold().red(),
                log::Level::Warn => target.bold().yellow(),
                _ => target.bold().bright_yellow(),
            };

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                target,
                record.args()
            )
        })
        .try_init();
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > 60 => format!("{}m{}s", secs / 60, secs % 60).red(),
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}

pub fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_time_units() {
        colored::control::set_override(false);
        let options = FormatElapsedTimeOptions::default();

        assert_eq!(
            format_elapsed_time(Duration::from_micros(250), &options).to_string(),
            "250μs"
        );
        assert_eq!(
            format_elapsed_time(Duration::from_millis(42), &options).to_string(),
            "42ms"
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(3), &options).to_string(),
            "3s"
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(125), &options).to_string(),
            "2m5s"
        );
    }

    #[test]
    fn test_section_thresholds_ignore_millis() {
        let slow = Duration::from_millis(900);
        assert_eq!(
            format_elapsed_time(slow, &FormatElapsedTimeOptions::section()),
            "900ms".normal()
        );
        assert_eq!(
            format_elapsed_time(slow, &FormatElapsedTimeOptions::default()),
            "900ms".red()
        );
    }
}
