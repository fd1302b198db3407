use datafusion::prelude::{CsvReadOptions, SessionContext};
use tracing::info;

use crate::constants::{MOVIES_TABLE, RATINGS_TABLE};
use crate::error::Result;
use crate::schema;

use super::EtlJob;

/// Row counts observed while registering the source tables.
#[derive(Debug, Clone, Copy)]
pub struct SourceCounts {
    pub ratings_rows: usize,
    pub movies_rows: usize,
}

/// Registers both delimited files on the engine under fixed table names.
/// No validation beyond the fixed schemas: a malformed row surfaces as an
/// engine error once the query runs.
pub async fn register_sources(ctx: &SessionContext, job: &EtlJob) -> Result<SourceCounts> {
    let ratings_schema = schema::ratings();
    ctx.register_csv(
        RATINGS_TABLE,
        &job.ratings_path,
        CsvReadOptions::new()
            .has_header(false)
            .delimiter(b'\t')
            .schema(&ratings_schema)
            .file_extension(".txt"),
    )
    .await?;

    let movies_schema = schema::movies();
    ctx.register_csv(
        MOVIES_TABLE,
        &job.movies_path,
        CsvReadOptions::new()
            .has_header(false)
            .delimiter(b'|')
            .schema(&movies_schema)
            .file_extension(".txt"),
    )
    .await?;

    let ratings_rows = ctx.table(RATINGS_TABLE).await?.count().await?;
    let movies_rows = ctx.table(MOVIES_TABLE).await?.count().await?;
    info!(ratings_rows, movies_rows, "registered source tables");

    Ok(SourceCounts {
        ratings_rows,
        movies_rows,
    })
}
