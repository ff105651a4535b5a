// Ask Krivya command-line entry point
// Classifies (or screens) text and prints the report as JSON on stdout.

use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use krivya_core::analysis::{samples, NewsScreener, TextClassifier};
use krivya_core::{logging, AppError, Settings};

#[derive(Debug, Parser)]
#[command(name = "krivya", version, about = "Classify text as fact or emotion")]
struct Cli {
    /// Text to analyze; read from stdin when omitted
    text: Vec<String>,

    /// Run the news credibility screener instead of the classifier
    #[arg(long, conflicts_with = "samples")]
    screen: bool,

    /// Classify every built-in sample text
    #[arg(long)]
    samples: bool,

    /// Seed for reproducible verdicts (overrides KRIVYA_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn read_input(args: &[String]) -> Result<String, AppError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load().context("failed to load settings")?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    logging::init(&settings).context("failed to initialize logging")?;

    if cli.samples {
        let classifier = TextClassifier::from_settings(&settings);
        let reports: Vec<_> = samples::all()
            .map(|(_, text)| classifier.analyze(text))
            .collect();
        print_json(&reports, cli.pretty)?;
        return Ok(());
    }

    let text = read_input(&cli.text).context("failed to read input")?;

    if cli.screen {
        let screener = NewsScreener::new();
        let report = match settings.seed {
            Some(seed) => screener.screen(&text, &mut StdRng::seed_from_u64(seed)),
            None => screener.screen(&text, &mut rand::thread_rng()),
        }?;
        info!(status = ?report.status, confidence = report.confidence, "Screening complete");
        print_json(&report, cli.pretty)?;
    } else {
        // Blank input is a caller precondition; the classifier itself accepts it.
        if text.trim().is_empty() {
            return Err(AppError::Validation("no text given".to_string()).into());
        }
        let classifier = TextClassifier::from_settings(&settings);
        print_json(&classifier.analyze(&text), cli.pretty)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logging may not be initialized yet, so report straight to stderr
    if let Err(e) = run(cli) {
        eprintln!("krivya: {:#}", e);
        std::process::exit(1);
    }
}
