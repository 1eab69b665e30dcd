use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football competition data exporter
///
/// Fetches standings, matches, goals and top scorers for a competition from
/// the football-data.org API and writes them as CSV tables linked through a
/// shared teams table.
///
/// Running without arguments exports the Champions League into the current
/// directory. The API token is read from the `API_KEY` environment variable
/// or from `api_key` in the config file.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Competition code to export (e.g. CL, PL, BL1). Defaults to CL.
    #[arg(long = "competition", value_name = "CODE", help_heading = "Export")]
    pub competition: Option<String>,

    /// Directory the CSV tables are written to. Created if missing.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", help_heading = "Export")]
    pub output_dir: Option<String>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
