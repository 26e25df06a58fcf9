use clap::Parser;

use crate::header::FieldSelection;
use crate::stream::STDIO_PATH;

/// Convert JSON Lines (one JSON object per line) to CSV.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Convert JSON Lines to CSV", long_about = None)]
pub struct Cli {
    /// Input file, `-` for stdin
    #[arg(default_value = STDIO_PATH)]
    pub infile: String,

    /// Output file, `-` for stdout
    #[arg(default_value = STDIO_PATH)]
    pub outfile: String,

    /// Fields to include, defaults to all
    #[arg(short, long, num_args = 0..)]
    pub include: Vec<String>,

    /// Fields to exclude, defaults to none
    #[arg(short, long, num_args = 0..)]
    pub exclude: Vec<String>,

    /// Fields to put first, in this order
    #[arg(short, long, num_args = 0..)]
    pub order: Vec<String>,

    /// Number of records to process; negative means all
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    pub number: i64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a conversion run needs, detached from argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub infile: String,
    pub outfile: String,
    pub selection: FieldSelection,
    pub limit: Option<usize>,
}

impl Cli {
    pub fn limit(&self) -> Option<usize> {
        usize::try_from(self.number).ok()
    }

    pub fn into_options(self) -> Options {
        let limit = self.limit();
        Options {
            infile: self.infile,
            outfile: self.outfile,
            selection: FieldSelection::new(self.include, self.exclude, self.order),
            limit,
        }
    }
}
