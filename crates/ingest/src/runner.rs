use crate::{error::IngestError, params::IngestParams, transform};
use connectors::{
    file::csv::source::ChunkSource,
    sql::{destination::TableDestination, generator},
};
use model::{
    records::chunk::{Chunk, ChunkRead},
    schema::TableSchema,
};
use std::time::Instant;
use tracing::{error, info};

/// Totals for one run, reported on completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub chunks_loaded: usize,
    pub chunks_failed: usize,
    pub rows_loaded: u64,
}

/// Runs the chunked ingestion loop to completion.
///
/// Reads one chunk at a time, converts the configured date/time columns,
/// creates the destination table from the first chunk's schema (replacing any
/// existing table of the same name), and appends every chunk. A failing chunk
/// is logged with its row-index range and dropped; the loop continues with
/// the next read. Only a missing date/time column is fatal, raised before any
/// chunk is read or written.
pub async fn run(
    params: &IngestParams,
    source: &mut dyn ChunkSource,
    destination: &dyn TableDestination,
) -> Result<RunSummary, IngestError> {
    let dt_cols = transform::resolve_dt_columns(source.columns(), &params.dt_cols)?;
    let schema_before = TableSchema::new(&params.table_name, source.columns().to_vec());
    let schema_after = transform::schema_with_datetime(&schema_before, &dt_cols);

    let mut summary = RunSummary::default();
    let mut chunk_index = 0usize;
    let mut previewed = false;
    let mut created = false;

    loop {
        let started = Instant::now();
        let next_index = source.rows_read();

        match source.fetch(params.chunk_size) {
            Ok(ChunkRead::EndOfData) => {
                info!(
                    chunks_loaded = summary.chunks_loaded,
                    chunks_failed = summary.chunks_failed,
                    rows_loaded = summary.rows_loaded,
                    "Finished ingesting data into the database"
                );
                break;
            }
            Ok(ChunkRead::Chunk(chunk)) => {
                let index_start = chunk.first_index;
                let index_end = chunk.last_index();

                let outcome = load_chunk(
                    chunk,
                    &dt_cols,
                    &schema_before,
                    &schema_after,
                    destination,
                    &mut previewed,
                    &mut created,
                )
                .await;

                match outcome {
                    Ok(rows) => {
                        summary.chunks_loaded += 1;
                        summary.rows_loaded += rows;
                        info!(
                            chunk = chunk_index,
                            rows,
                            took_ms = started.elapsed().as_millis() as u64,
                            "Inserted another chunk"
                        );
                    }
                    Err(err) => {
                        summary.chunks_failed += 1;
                        error!(%err, index_start, index_end, "Chunk failed, continuing with the next one");
                    }
                }
                chunk_index += 1;
            }
            Err(err) => {
                // The bad record was consumed; the next fetch resumes after it
                summary.chunks_failed += 1;
                let index_end = source.rows_read().saturating_sub(1);
                error!(%err, index_start = next_index, index_end, "Failed to read chunk, continuing with the next one");
                chunk_index += 1;
            }
        }
    }

    Ok(summary)
}

async fn load_chunk(
    mut chunk: Chunk,
    dt_cols: &[String],
    schema_before: &TableSchema,
    schema_after: &TableSchema,
    destination: &dyn TableDestination,
    previewed: &mut bool,
    created: &mut bool,
) -> Result<u64, IngestError> {
    // Diagnostic only: the schema as it would be created, before and after
    // the date/time conversion. Printed once per run.
    if !*previewed {
        println!("{}", generator::create_table(schema_before));
        println!("{}", generator::create_table(schema_after));
        *previewed = true;
    }

    transform::convert_datetime_columns(&mut chunk, dt_cols)?;

    if !*created {
        destination.create_table(schema_after).await?;
        *created = true;
    }

    let written = destination.append_rows(schema_after, &chunk.rows).await?;
    Ok(written)
}
