//! verify-questions: read-only consistency audit of the question tables

use anyhow::Result;
use clap::Parser;
use questionnaire_application::{VerifyQuestionsInput, VerifyQuestionsUseCase};
use questionnaire_cli::{connect, init_logging, load_catalogue, load_config, print_config_sources};
use questionnaire_presentation::{OutputFormat, VerificationFormatter, VerifyCli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = VerifyCli::parse();
    init_logging(cli.verbose);

    if cli.show_config {
        print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let expected_active = match config.verify.expected_active {
        Some(n) => n,
        None => load_catalogue(&config)?.len() as u64,
    };

    let store = connect(&config)?;
    let use_case = VerifyQuestionsUseCase::new(store);

    info!("Verifying against {} expected active questions", expected_active);
    let report = use_case
        .execute(VerifyQuestionsInput::new(expected_active))
        .await?;

    let output = match cli.output {
        OutputFormat::Text => VerificationFormatter::format(&report),
        OutputFormat::Json => VerificationFormatter::format_json(&report),
    };
    print!("{}", output);
    if cli.output == OutputFormat::Json {
        println!();
    }

    Ok(())
}
