use datafusion::arrow::datatypes::DataType;
use datafusion::common::JoinType;
use datafusion::functions_aggregate::expr_fn::{avg, count};
use datafusion::prelude::*;
use tracing::debug;

use crate::constants::{MOVIES_TABLE, RATINGS_TABLE};
use crate::error::Result;

/// Builds the movie-stats query: join ratings to titles, aggregate mean and
/// count per title, keep titles with at least `min_ratings` ratings,
/// best-rated first. Pure plan construction; nothing executes until the
/// caller collects or writes the frame.
pub async fn movie_stats(ctx: &SessionContext, min_ratings: i64) -> Result<DataFrame> {
    // Both files carry integer ids; the join runs on their string form. The
    // movie-side key is renamed to item_id so the joined schema holds no
    // duplicate column names.
    let ratings = ctx
        .table(RATINGS_TABLE)
        .await?
        .with_column("movie_id", cast(col("movie_id"), DataType::Utf8))?;

    let movies = ctx.table(MOVIES_TABLE).await?.select(vec![
        cast(col("movie_id"), DataType::Utf8).alias("item_id"),
        col("title"),
    ])?;

    let joined = ratings.join(movies, JoinType::Inner, &["movie_id"], &["item_id"], None)?;

    let stats = joined.aggregate(
        vec![col("title")],
        vec![
            avg(col("rating")).alias("avg_rating"),
            count(col("rating")).alias("num_ratings"),
        ],
    )?;

    let popular = stats
        .filter(col("num_ratings").gt_eq(lit(min_ratings)))?
        .sort(vec![col("avg_rating").sort(false, false)])?;

    debug!(plan = %popular.logical_plan().display_indent(), "movie stats plan");

    Ok(popular)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datafusion::arrow::array::{Float64Array, Int32Array, Int64Array, StringArray};
    use datafusion::arrow::datatypes::{Field, Schema};
    use datafusion::arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    /// Movie 1 "X" gathers three ratings averaging 4.0, movie 2 "Y" two
    /// averaging 2.5. Movie 9 has ratings but no metadata row; movie 3 "Z"
    /// has metadata but no ratings.
    fn test_ctx() -> SessionContext {
        let ctx = SessionContext::new();

        let ratings_schema = Arc::new(Schema::new(vec![
            Field::new("user_id", DataType::Utf8, false),
            Field::new("movie_id", DataType::Int32, false),
            Field::new("rating", DataType::Float64, false),
            Field::new("timestamp", DataType::Utf8, false),
        ]));
        let ratings = RecordBatch::try_new(
            ratings_schema,
            vec![
                Arc::new(StringArray::from(vec!["u1", "u2", "u3", "u1", "u2", "u4"])),
                Arc::new(Int32Array::from(vec![1, 1, 1, 2, 2, 9])),
                Arc::new(Float64Array::from(vec![5.0, 4.0, 3.0, 2.0, 3.0, 5.0])),
                Arc::new(StringArray::from(vec!["881250949"; 6])),
            ],
        )
        .unwrap();

        let movies_schema = Arc::new(Schema::new(vec![
            Field::new("movie_id", DataType::Int32, false),
            Field::new("title", DataType::Utf8, false),
        ]));
        let movies = RecordBatch::try_new(
            movies_schema,
            vec![
                Arc::new(Int32Array::from(vec![1, 2, 3])),
                Arc::new(StringArray::from(vec!["X", "Y", "Z"])),
            ],
        )
        .unwrap();

        let _ = ctx.register_batch(RATINGS_TABLE, ratings).unwrap();
        let _ = ctx.register_batch(MOVIES_TABLE, movies).unwrap();
        ctx
    }

    async fn collect_stats(ctx: &SessionContext, min_ratings: i64) -> Vec<(String, f64, i64)> {
        let df = movie_stats(ctx, min_ratings).await.unwrap();
        let batches = df.collect().await.unwrap();
        let mut rows = Vec::new();
        for batch in &batches {
            let titles = batch
                .column(0)
                .as_any()
                .downcast_ref::<StringArray>()
                .unwrap();
            let avgs = batch
                .column(1)
                .as_any()
                .downcast_ref::<Float64Array>()
                .unwrap();
            let counts = batch
                .column(2)
                .as_any()
                .downcast_ref::<Int64Array>()
                .unwrap();
            for i in 0..batch.num_rows() {
                rows.push((titles.value(i).to_string(), avgs.value(i), counts.value(i)));
            }
        }
        rows
    }

    #[tokio::test]
    async fn aggregates_mean_and_count_per_title() {
        let ctx = test_ctx();
        let rows = collect_stats(&ctx, 3).await;
        assert_eq!(rows, vec![("X".to_string(), 4.0, 3)]);
    }

    #[tokio::test]
    async fn sorts_by_average_rating_descending() {
        let ctx = test_ctx();
        let rows = collect_stats(&ctx, 2).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "X");
        assert_eq!(rows[1].0, "Y");
        assert!(rows[0].1 >= rows[1].1);
    }

    #[tokio::test]
    async fn unmatched_ids_drop_out_of_the_join() {
        let ctx = test_ctx();
        let rows = collect_stats(&ctx, 1).await;
        let titles: Vec<&str> = rows.iter().map(|r| r.0.as_str()).collect();
        assert!(!titles.contains(&"Z"));
        assert_eq!(rows.len(), 2);
    }
}
