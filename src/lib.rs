//! Convert JSON Lines into CSV with control over which columns appear and in
//! what order.
//!
//! Conversion is two-pass: every record is read first so the header can be
//! built from the union of all field names, then the CSV is written.

pub mod cli;
pub mod collector;
pub mod error;
pub mod header;
pub mod logger;
pub mod stream;
pub mod writer;

use std::io::{BufRead, Write};

pub use cli::{Cli, Options};
pub use collector::{Collection, KeyUniverse, Record, collect_records};
pub use error::{ConvertError, Result};
pub use header::FieldSelection;
pub use writer::write_csv;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub header: Vec<String>,
    pub rows: usize,
}

/// Converts `reader` into CSV on `writer`.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    selection: &FieldSelection,
    limit: Option<usize>,
) -> Result<Conversion> {
    let collection = collect_records(reader, limit)?;
    let header = selection.resolve(&collection.keys);
    let rows = write_csv(writer, &header, &collection.records)?;
    Ok(Conversion { header, rows })
}

/// Runs a conversion between the paths in `options`.
///
/// The output is opened only after all input has been read and parsed, so a
/// malformed record never creates or truncates the output file.
pub fn run(options: &Options) -> Result<Conversion> {
    let collection = {
        let reader = stream::open_input(&options.infile)?;
        collect_records(reader, options.limit)?
    };
    let header = options.selection.resolve(&collection.keys);

    let sink = stream::open_output(&options.outfile)?;
    let rows = write_csv(sink, &header, &collection.records)?;

    tracing::info!(
        input = %options.infile,
        output = %options.outfile,
        rows,
        columns = header.len(),
        "conversion completed"
    );
    Ok(Conversion { header, rows })
}
