use datafusion::arrow::datatypes::{DataType, Field, Schema};

/// Genre flag columns carried by the movie file, in file order. They are
/// read so the fixed 24-column layout lines up, then dropped by projection.
pub const GENRE_FLAGS: [&str; 19] = [
    "unknown",
    "Action",
    "Adventure",
    "Animation",
    "Children's",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Film-Noir",
    "Horror",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

/// Schema of the tab-delimited ratings file: one rating event per line.
pub fn ratings() -> Schema {
    Schema::new(vec![
        Field::new("user_id", DataType::Utf8, false),
        Field::new("movie_id", DataType::Int32, false),
        Field::new("rating", DataType::Float64, false),
        Field::new("timestamp", DataType::Utf8, false),
    ])
}

/// Schema of the pipe-delimited movie file: id, title, three metadata
/// columns, then the 19 genre flags.
pub fn movies() -> Schema {
    let mut fields = vec![
        Field::new("movie_id", DataType::Int32, false),
        Field::new("title", DataType::Utf8, false),
        Field::new("release_date", DataType::Utf8, true),
        Field::new("video_release_date", DataType::Utf8, true),
        Field::new("imdb_url", DataType::Utf8, true),
    ];
    for genre in GENRE_FLAGS {
        fields.push(Field::new(genre, DataType::Int32, true));
    }
    Schema::new(fields)
}
