use tracing::{error, info};

use movielens_stats::logging;
use movielens_stats::pipeline::{run_etl, EtlJob};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let job = EtlJob::default();
    info!("Starting movie rating stats run");

    match run_etl(&job).await {
        Ok(summary) => {
            println!("\n📊 ETL Run Summary:");
            println!("   Ratings read: {}", summary.ratings_rows);
            println!("   Movies read: {}", summary.movies_rows);
            println!("   Popular movies written: {}", summary.result_groups);
            println!("   Output directory: {}", summary.output_dir);
            println!(
                "   Started: {}",
                summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("   Elapsed: {:.2?}", summary.elapsed);
            Ok(())
        }
        Err(e) => {
            error!("ETL run failed: {}", e);
            Err(e.into())
        }
    }
}
