use std::{env, fs::File, io::BufReader, path::Path};

use bank_accounts::dlq::StdErrDLQ;
use bank_accounts::engine::Engine;
use bank_accounts::ingestion::{CsvReader, JsonLinesReader};
use bank_accounts::output_repository::StdOutOutput;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "bank_accounts".to_string());
    let Some(file_path) = args.next() else {
        return Err(format!("usage: {} <applications.csv|applications.jsonl>", program).into());
    };
    let file_path = Path::new(&file_path);
    let file = File::open(file_path)?;
    tracing::info!(path = %file_path.display(), "reading account applications");

    let json_lines = matches!(
        file_path.extension().and_then(|ext| ext.to_str()),
        Some("jsonl" | "json")
    );

    if json_lines {
        let ingestion = JsonLinesReader::new(BufReader::new(file));
        let mut engine = Engine::new(ingestion, StdOutOutput::new(), StdErrDLQ::default());
        engine.process().await?;
        engine.flush();
    } else {
        let ingestion = CsvReader::new(file);
        let mut engine = Engine::new(ingestion, StdOutOutput::new(), StdErrDLQ::default());
        engine.process().await?;
        engine.flush();
    }

    Ok(())
}
