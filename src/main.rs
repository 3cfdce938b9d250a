use anyhow::Result;
use clap::Parser;
use esgscore::cli::{Cli, Commands};
use esgscore::commands::{self, BatchConfig, ScoreConfig};
use esgscore::formatting::FormattingConfig;
use esgscore::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbosity);
    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();

    match cli.command {
        Commands::Score {
            input,
            year,
            format,
            output,
            lang,
            details,
            config,
        } => commands::handle_score(ScoreConfig {
            input,
            year,
            format,
            output,
            lang,
            details,
            config,
        }),
        Commands::Batch {
            inputs,
            year,
            format,
            output,
            config,
        } => commands::handle_batch(BatchConfig {
            inputs,
            year,
            format,
            output,
            config,
        }),
        Commands::Status {
            percentage,
            chart,
            config,
        } => commands::handle_status(percentage, chart, config.as_deref()),
        Commands::Init { force } => commands::init_config(force),
    }
}
