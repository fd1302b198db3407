use std::fs;
use std::path::Path;

use datafusion::arrow::util::pretty::pretty_format_batches;
use datafusion::config::CsvOptions;
use datafusion::dataframe::DataFrameWriteOptions;
use datafusion::prelude::DataFrame;
use tracing::info;

use crate::constants::PREVIEW_ROWS;
use crate::error::Result;

use super::EtlJob;

/// Prints the head of the result untruncated, then persists the full result
/// set as header-bearing CSV, replacing any previous output directory.
pub async fn preview_and_write(stats: DataFrame, job: &EtlJob) -> Result<usize> {
    let preview = stats.clone().limit(0, Some(PREVIEW_ROWS))?.collect().await?;
    println!("{}", pretty_format_batches(&preview)?);

    let result_groups = stats.clone().count().await?;

    // The engine appends part files into an existing directory, so the whole
    // directory is dropped first: a smaller rerun must not leave stale part
    // files behind.
    let output_dir = Path::new(&job.output_dir);
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;

    stats
        .write_csv(
            &job.output_dir,
            DataFrameWriteOptions::new(),
            Some(CsvOptions::default().with_has_header(true)),
        )
        .await?;

    info!(result_groups, output_dir = %job.output_dir, "wrote result set");
    Ok(result_groups)
}
