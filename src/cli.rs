use crate::core::Lang;
use crate::io::writers::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "esgscore")]
#[command(about = "ESG self-assessment score aggregation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "plain", global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one assessment envelope
    Score {
        /// Envelope JSON file returned by the assessment API
        input: PathBuf,

        /// Assessment year to select from multi-year envelopes
        #[arg(short, long, env = "ESGSCORE_YEAR", default_value = "")]
        year: String,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Language for question text (en, ms)
        #[arg(long)]
        lang: Option<Lang>,

        /// List every question with its result
        #[arg(long)]
        details: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Score several firms' envelopes and summarize them
    Batch {
        /// Envelope JSON files, one per firm
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Assessment year to select from multi-year envelopes
        #[arg(short, long, env = "ESGSCORE_YEAR", default_value = "")]
        year: String,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the status label for a percentage
    Status {
        /// Percentage in [0, 100]
        #[arg(allow_negative_numbers = true)]
        percentage: f64,

        /// Print the uppercase chart label instead
        #[arg(long)]
        chart: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "esgscore", "-vv", "score", "firm.json", "--year", "2023", "--format", "json",
            "--lang", "ms", "--details",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Score {
                input,
                year,
                format,
                lang,
                details,
                ..
            } => {
                assert_eq!(input, PathBuf::from("firm.json"));
                assert_eq!(year, "2023");
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(lang, Some(Lang::Ms));
                assert!(details);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_batch_requires_inputs() {
        assert!(Cli::try_parse_from(["esgscore", "batch"]).is_err());
    }
}
