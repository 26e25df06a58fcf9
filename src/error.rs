use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot open input file: {path}: {source}")]
    InputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file: {path}: {source}")]
    OutputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line} is not a JSON object (found {found})")]
    NotAnObject { line: usize, found: &'static str },

    #[error("Read error on line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
