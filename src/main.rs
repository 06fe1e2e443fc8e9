use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::config::{self, DEFAULT_ADDR, Environment, ServerConfig};
use receipt_points::domain::scoring;
use receipt_points::error::ReceiptError;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::{self, AppState};
use receipt_points::interfaces::json::receipt_reader::ReceiptReader;
use std::fs::File;
use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, env = "RECEIPT_POINTS_ADDR", default_value = DEFAULT_ADDR)]
        addr: SocketAddr,

        /// Deployment mode; development raises the default log level
        #[arg(long = "env", env = "RECEIPT_POINTS_ENV", value_enum, default_value_t)]
        environment: Environment,
    },
    /// Validate and score a receipt JSON file without starting the service
    Score {
        /// Receipt JSON file, or `-` for stdin
        input: PathBuf,

        /// Print the points awarded by each rule
        #[arg(long)]
        breakdown: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { addr, environment } => {
            config::init_tracing(environment.default_log_filter());
            serve(ServerConfig { addr, environment }).await
        }
        Command::Score { input, breakdown } => {
            config::init_tracing("warn");
            score(input, breakdown)
        }
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    info!("Running in {} mode", config.environment);

    let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));
    let app = http::router(AppState::new(processor));

    http::serve(config.addr, app).await.into_diagnostic()
}

fn score(input: PathBuf, breakdown: bool) -> Result<()> {
    let source: Box<dyn Read> = if input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&input).into_diagnostic()?)
    };

    let receipt = ReceiptReader::new(source).receipt().into_diagnostic()?;

    let points = match ReceiptProcessor::evaluate(&receipt) {
        Ok(points) => points,
        Err(ReceiptError::InvalidReceipt(reason)) => {
            return Err(miette!("Invalid receipt: {reason}"));
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    if breakdown {
        for (rule, rule_points) in scoring::breakdown(&receipt) {
            println!("{rule}: {rule_points}");
        }
    }
    println!("{points}");

    Ok(())
}
