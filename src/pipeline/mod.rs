use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use datafusion::prelude::SessionContext;
use tracing::info;

use crate::constants;
use crate::error::Result;

pub mod extract;
pub mod load;
pub mod transform;

/// Everything one batch run needs to know. `Default` is the production
/// configuration; tests point the same pipeline at scratch files.
#[derive(Debug, Clone)]
pub struct EtlJob {
    pub ratings_path: String,
    pub movies_path: String,
    pub output_dir: String,
    pub min_ratings: i64,
}

impl Default for EtlJob {
    fn default() -> Self {
        Self {
            ratings_path: constants::RATINGS_PATH.to_string(),
            movies_path: constants::MOVIES_PATH.to_string(),
            output_dir: constants::OUTPUT_DIR.to_string(),
            min_ratings: constants::MIN_RATINGS,
        }
    }
}

/// Outcome report for a single pipeline run.
#[derive(Debug, Clone)]
pub struct EtlSummary {
    pub ratings_rows: usize,
    pub movies_rows: usize,
    pub result_groups: usize,
    pub output_dir: String,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Runs extract, transform and load once, end to end. Any engine or I/O
/// failure aborts the run; there is no retry or partial output.
pub async fn run_etl(job: &EtlJob) -> Result<EtlSummary> {
    let started_at = Utc::now();
    let timer = Instant::now();

    let ctx = SessionContext::new();

    let sources = extract::register_sources(&ctx, job).await?;
    let stats = transform::movie_stats(&ctx, job.min_ratings).await?;
    let result_groups = load::preview_and_write(stats, job).await?;

    let summary = EtlSummary {
        ratings_rows: sources.ratings_rows,
        movies_rows: sources.movies_rows,
        result_groups,
        output_dir: job.output_dir.clone(),
        started_at,
        elapsed: timer.elapsed(),
    };

    info!(
        result_groups = summary.result_groups,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "ETL run finished"
    );

    Ok(summary)
}
