/// Fixed locations and thresholds for the batch job.
/// The job is deliberately non-configurable: reruns always read the same
/// sources and overwrite the same destination.

// Source files
pub const RATINGS_PATH: &str = "movie_data/u_data.txt";
pub const MOVIES_PATH: &str = "movie_data/u_item.txt";

// Destination directory for the result CSV
pub const OUTPUT_DIR: &str = "results";

// Table names registered on the query engine
pub const RATINGS_TABLE: &str = "ratings";
pub const MOVIES_TABLE: &str = "movies";

// A movie needs at least this many ratings to appear in the result
pub const MIN_RATINGS: i64 = 100;

// Rows printed to stdout before the result is persisted
pub const PREVIEW_ROWS: usize = 15;
