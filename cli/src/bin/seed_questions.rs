//! seed-questions: reconcile the question tables with the catalogue

use anyhow::Result;
use clap::Parser;
use questionnaire_application::{SeedQuestionsError, SeedQuestionsUseCase};
use questionnaire_cli::{connect, init_logging, load_catalogue, load_config, print_config_sources};
use questionnaire_presentation::{SeedCli, SeedProgressReporter, SeedReportFormatter};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = SeedCli::parse();
    init_logging(cli.verbose);

    if cli.show_config {
        print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let catalogue = load_catalogue(&config)?;

    if cli.dry_run {
        print!("{}", SeedReportFormatter::format_dry_run(&catalogue));
        return Ok(());
    }

    let store = connect(&config)?;
    let use_case = SeedQuestionsUseCase::new(store);

    info!("Starting seed");
    let result = if cli.quiet {
        use_case.execute(&catalogue).await
    } else {
        let progress = SeedProgressReporter::new();
        use_case.execute_with_progress(&catalogue, &progress).await
    };

    let report = match result {
        Ok(report) => report,
        Err(SeedQuestionsError::FinalState { report, source }) => {
            // Entries were already applied; show what happened before failing
            print!("{}", SeedReportFormatter::format_outcomes(&report));
            return Err(SeedQuestionsError::FinalState { report, source }.into());
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", SeedReportFormatter::format(&report));

    if !report.is_clean() {
        warn!(
            "{} entries and {} deactivations failed",
            report.failed(),
            report.failed_deactivations()
        );
    }

    Ok(())
}
