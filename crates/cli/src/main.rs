use crate::error::CliError;
use clap::Parser;
use connectors::{
    file::csv::{
        adapter::{CsvAdapter, CsvSettings},
        source::CsvDataSource,
    },
    sql::postgres::{PgConnectionParams, PgDestination},
};
use ingest::params::IngestParams;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;

#[derive(Parser)]
#[command(name = "csvload", version = "0.0.1", about = "Chunked CSV to Postgres loader")]
struct Cli {
    #[arg(long, help = "user name for postgres")]
    user: String,

    #[arg(long, help = "password for postgres")]
    password: String,

    #[arg(long, help = "host for postgres")]
    host: String,

    #[arg(long, help = "port for postgres")]
    port: u16,

    #[arg(long, help = "database name for postgres")]
    db: String,

    #[arg(long, help = "name of the table where we will write the results to")]
    table_name: String,

    #[arg(long, help = "path to the csv file")]
    csv_name: String,

    #[arg(long, num_args = 0.., help = "list of columns to convert to a date/time type")]
    dt_cols: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger, INFO unless overridden via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        table_name = %cli.table_name,
        csv_name = %cli.csv_name,
        dt_cols = ?cli.dt_cols,
        "Starting ingestion"
    );

    let adapter = CsvAdapter::new(&cli.csv_name, CsvSettings::default())?;
    let mut source = CsvDataSource::new(adapter)?;

    let connection = PgConnectionParams {
        user: cli.user,
        password: cli.password,
        host: cli.host,
        port: cli.port,
        db: cli.db,
    };
    let destination = PgDestination::connect(&connection).await?;

    let params = IngestParams::new(&cli.table_name, cli.dt_cols);
    ingest::runner::run(&params, &mut source, &destination).await?;

    Ok(())
}
