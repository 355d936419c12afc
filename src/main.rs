use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use promptpay::application::generator::PromptPayGenerator;
use promptpay::config::Profile;
use promptpay::domain::ports::PayloadRendererBox;
use promptpay::infrastructure::text::TextRenderer;
use promptpay::interfaces::csv::payload_writer::PayloadWriter;
use promptpay::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding fields of the built-in Thai PromptPay profile
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the payload for a mobile number or national id
    #[command(allow_negative_numbers = true)]
    Generate {
        /// 10-digit mobile number or 13-digit national id
        target: String,

        /// Amount to transfer; rounded to 2 decimal places
        amount: Decimal,

        /// Print a JSON object instead of the bare payload
        #[arg(long)]
        json: bool,
    },
    /// Generate payloads for every `target,amount` row of a CSV file
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "promptpay=debug"
    } else {
        "promptpay=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let profile = match cli.profile {
        Some(path) => {
            let file = File::open(&path).into_diagnostic()?;
            let profile = Profile::from_json_reader(BufReader::new(file)).into_diagnostic()?;
            tracing::info!(path = %path.display(), "loaded profile");
            profile
        }
        None => Profile::default(),
    };

    let renderer: PayloadRendererBox = Box::new(TextRenderer::new(tokio::io::stdout()));
    let generator = PromptPayGenerator::new(profile, renderer).into_diagnostic()?;

    match cli.command {
        Command::Generate {
            target,
            amount,
            json,
        } => {
            if json {
                let record = generator.generate_record(&target, amount).into_diagnostic()?;
                let output = serde_json::to_string_pretty(&record).into_diagnostic()?;
                println!("{output}");
            } else {
                generator
                    .publish(&target, amount, None)
                    .await
                    .into_diagnostic()?;
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);

            let stdout = io::stdout();
            let mut writer = PayloadWriter::new(stdout.lock());
            let (mut written, mut skipped) = (0usize, 0usize);

            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        match generator.generate_record(&request.target, request.amount) {
                            Ok(record) => {
                                writer.write_record(&record).into_diagnostic()?;
                                written += 1;
                            }
                            Err(e) => {
                                eprintln!("Error processing request {}: {}", request.target, e);
                                skipped += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading request: {}", e);
                        skipped += 1;
                    }
                }
            }

            writer.flush().into_diagnostic()?;
            tracing::info!(written, skipped, "batch finished");
        }
    }

    Ok(())
}
