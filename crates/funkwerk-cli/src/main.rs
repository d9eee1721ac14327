// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// funkwerk — scan printed WiFi credentials into a joinable QR code.
//
// Reference collaborator for the scan pipeline: reads a photo, runs
// extract → parse → encode → render, writes the join code, and optionally
// hands the join URI to the OS.

mod config_store;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use funkwerk_core::error::Result;
use funkwerk_core::human_errors::{humanize_error, humanize_failure};
use funkwerk_core::types::{Credentials, ExtractionOutcome, JoinUri, ProvisionedNetwork, ScanOutcome};
use funkwerk_ocr::OcrTextExtractor;
use funkwerk_pipeline::{ScanPipeline, ScanSession};
use funkwerk_provision::qr::QrRenderer;
use funkwerk_provision::{encode, parse};
use tracing_subscriber::EnvFilter;

/// Scan printed WiFi credentials into a joinable QR code
#[derive(Parser, Debug)]
#[command(name = "funkwerk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a photo of printed credentials and render a join code
    Scan {
        /// Path to the photo (JPEG, PNG, TIFF, ...)
        image: PathBuf,

        /// Where to write the join-code PNG
        #[arg(long, default_value = "join-code.png")]
        qr_out: PathBuf,

        /// Directory containing the OCR model files
        #[arg(long)]
        models: Option<PathBuf>,

        /// Skip the photo-preparation pass
        #[arg(long)]
        no_enhance: bool,

        /// Also hand the join URI to the OS (best-effort)
        #[arg(long)]
        join: bool,
    },

    /// Print the raw recognized text for a photo (debugging aid)
    Ocr {
        /// Path to the photo
        image: PathBuf,

        /// Directory containing the OCR model files
        #[arg(long)]
        models: Option<PathBuf>,

        /// Skip the photo-preparation pass
        #[arg(long)]
        no_enhance: bool,
    },

    /// Parse credentials from already-recognized text
    Parse {
        /// Read text from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Encode known credentials without scanning
    Encode {
        /// Network name
        #[arg(long)]
        ssid: String,

        /// Network password (omit for an open network)
        #[arg(long, default_value = "")]
        password: String,

        /// Write a join-code PNG here
        #[arg(long)]
        qr_out: Option<PathBuf>,

        /// Also hand the join URI to the OS (best-effort)
        #[arg(long)]
        join: bool,
    },

    /// Show or update persistent settings
    Config {
        /// Set the OCR model directory
        #[arg(long)]
        models: Option<PathBuf>,

        /// Enable or disable the photo-preparation pass
        #[arg(long)]
        enhance: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            let human = humanize_error(&err);
            eprintln!("error: {}", human.message);
            eprintln!("  {}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Scan {
            image,
            qr_out,
            models,
            no_enhance,
            join,
        } => scan(image, qr_out, models, no_enhance, join).await,
        Command::Ocr {
            image,
            models,
            no_enhance,
        } => ocr(image, models, no_enhance).await,
        Command::Parse { file } => parse_text(file),
        Command::Encode {
            ssid,
            password,
            qr_out,
            join,
        } => encode_credentials(ssid, password, qr_out, join).await,
        Command::Config { models, enhance } => configure(models, enhance),
    }
}

/// Apply CLI overrides on top of persisted settings.
fn effective_config(models: Option<PathBuf>, no_enhance: bool) -> funkwerk_core::AppConfig {
    let mut config = config_store::load_or_default();
    if models.is_some() {
        config.model_dir = models;
    }
    if no_enhance {
        config.enhance_photos = false;
    }
    config
}

async fn scan(
    image: PathBuf,
    qr_out: PathBuf,
    models: Option<PathBuf>,
    no_enhance: bool,
    join: bool,
) -> Result<ExitCode> {
    let config = effective_config(models, no_enhance);
    let extractor = OcrTextExtractor::from_config(&config)?;
    let renderer = QrRenderer::from_config(&config);
    let mut session = ScanSession::new(ScanPipeline::new(extractor, renderer));

    let bytes = std::fs::read(&image)?;
    let report = session.submit(&bytes).await?;

    match report.outcome {
        ScanOutcome::Provisioned(network) => {
            print_network(&network);
            std::fs::write(&qr_out, &network.code.png)?;
            println!("Join code written to {}", qr_out.display());
            if join {
                request_join(&network.join_uri);
            }
            Ok(ExitCode::SUCCESS)
        }
        ScanOutcome::Failed(reason) => {
            let human = humanize_failure(&reason);
            eprintln!("{}", human.message);
            eprintln!("  {}", human.suggestion);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn ocr(image: PathBuf, models: Option<PathBuf>, no_enhance: bool) -> Result<ExitCode> {
    use funkwerk_core::capability::TextExtractor;

    let config = effective_config(models, no_enhance);
    let extractor = OcrTextExtractor::from_config(&config)?;
    let bytes = std::fs::read(&image)?;
    let text = extractor.extract(&bytes).await?;
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}

fn parse_text(file: Option<PathBuf>) -> Result<ExitCode> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match parse(&text) {
        ExtractionOutcome::Success(credentials) => {
            let encoded = encode(&credentials);
            print_credentials(&credentials);
            println!("Payload:  {}", encoded.payload);
            println!("Join URI: {}", encoded.join_uri);
            Ok(ExitCode::SUCCESS)
        }
        ExtractionOutcome::Failure(reason) => {
            let human = humanize_failure(&reason);
            eprintln!("{}", human.message);
            eprintln!("  {}", human.suggestion);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn encode_credentials(
    ssid: String,
    password: String,
    qr_out: Option<PathBuf>,
    join: bool,
) -> Result<ExitCode> {
    use funkwerk_core::capability::PayloadRenderer;

    let credentials = Credentials::new(ssid, password);
    let encoded = encode(&credentials);
    print_credentials(&credentials);
    println!("Payload:  {}", encoded.payload);
    println!("Join URI: {}", encoded.join_uri);

    if let Some(path) = qr_out {
        let renderer = QrRenderer::from_config(&config_store::load_or_default());
        let code = renderer.render(encoded.payload.as_str()).await?;
        std::fs::write(&path, &code.png)?;
        println!("Join code written to {}", path.display());
    }
    if join {
        request_join(&encoded.join_uri);
    }
    Ok(ExitCode::SUCCESS)
}

fn configure(models: Option<PathBuf>, enhance: Option<bool>) -> Result<ExitCode> {
    let mut config = config_store::load_or_default();
    let changed = models.is_some() || enhance.is_some();

    if models.is_some() {
        config.model_dir = models;
    }
    if let Some(enhance) = enhance {
        config.enhance_photos = enhance;
    }
    if changed {
        config_store::persist_config(&config)?;
        tracing::info!(path = %config_store::data_dir().display(), "settings saved");
    }

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}

fn print_credentials(credentials: &Credentials) {
    println!("Network:  {}", credentials.ssid);
    if credentials.is_open() {
        println!("Password: (open network)");
    } else {
        println!("Password: {}", credentials.password);
    }
}

fn print_network(network: &ProvisionedNetwork) {
    print_credentials(&network.credentials);
    println!("Payload:  {}", network.payload);
    println!("Join URI: {}", network.join_uri);
}

/// Best-effort, fire-and-forget: a failed handoff is a note, not an error.
fn request_join(uri: &JoinUri) {
    let bridge = funkwerk_bridge::platform_bridge();
    if let Ok(Some(current)) = bridge.wifi_ssid() {
        tracing::info!(current_network = %current, "requesting network join");
    }
    match bridge.request_join(uri.as_str()) {
        Ok(()) => println!("Join requested — watch for a system prompt."),
        Err(err) => {
            let human = humanize_error(&err);
            eprintln!("note: {} {}", human.message, human.suggestion);
        }
    }
}
