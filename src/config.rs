use clap::Parser;
use std::path::PathBuf;

/// Mobile vs computer internet usage dashboard.
#[derive(Debug, Parser)]
#[command(name = "usage_dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON dataset: an array of {no?, country, mobile, computer}
    #[arg(short, long, env = "USAGE_DASH_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Directory for the CSV export and chart descriptions
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Rows in the top-N rankings
    #[arg(short, long, default_value_t = 5)]
    pub top: i64,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub out_dir: PathBuf,
    pub top_n: i64,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_path: cli.data,
            out_dir: cli.out_dir,
            top_n: cli.top,
            verbose: cli.verbose,
        }
    }
}

impl Config {
    pub fn charts_path(&self) -> PathBuf {
        self.out_dir.join("charts.json")
    }

    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::from(Cli::parse_from(["usage_dash"]));
        assert_eq!(cfg.data_path, PathBuf::from("data.json"));
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.charts_path(), PathBuf::from("./charts.json"));
        assert_eq!(cfg.default_log_level(), "warn");
    }

    #[test]
    fn overrides() {
        let cfg = Config::from(Cli::parse_from([
            "usage_dash",
            "--data",
            "usage.json",
            "--top",
            "3",
            "-v",
        ]));
        assert_eq!(cfg.data_path, PathBuf::from("usage.json"));
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.default_log_level(), "info");
    }
}
