use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Cannot compute a rate over a zero-length duration"))]
    ZeroDuration,

    #[snafu(display("Duration must be a finite, non-negative number of seconds, got {secs}"))]
    InvalidDuration { secs: f64 },

    #[snafu(display("Invalid {kind}: '{input}'"))]
    InvalidNumber { input: String, kind: &'static str },

    #[snafu(display("Unsupported output format: {value} (expected 'human' or 'json')"))]
    InvalidOutputFormat { value: String },

    #[snafu(display("Failed to serialize output: {source}"))]
    Serialize { source: serde_json::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serialize { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
