use clap::{Parser, Subcommand};
use connectors::config::DEFAULT_CONFIG_FILE;
use report::naming::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "highlight-reports",
    version = "0.1.0",
    about = "Builds spreadsheet reports from CAST Highlight findings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
    pub config: PathBuf,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory the workbook is written to, created if missing"
    )]
    pub output_dir: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Green findings of one application, one sheet
    Green,
    /// Green findings of one application with a per-rule summary sheet
    GreenSummary,
    /// Cloud-readiness patterns of a whole domain
    Cloud,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["highlight-reports", "green"]).unwrap();
        assert_eq!(cli.command, Commands::Green);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert_eq!(cli.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "highlight-reports",
            "green-summary",
            "--config",
            "/etc/hl.json",
            "--output-dir",
            "reports",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::GreenSummary);
        assert_eq!(cli.config, PathBuf::from("/etc/hl.json"));
        assert_eq!(cli.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["highlight-reports"]).is_err());
        assert!(Cli::try_parse_from(["highlight-reports", "security"]).is_err());
    }
}
