//! Input and output endpoints. The path `-` stands for stdin or stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::error::{ConvertError, Result};

pub const STDIO_PATH: &str = "-";

pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == STDIO_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| ConvertError::InputOpen {
        path: path.to_owned(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == STDIO_PATH {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(path).map_err(|source| ConvertError::OutputOpen {
        path: path.to_owned(),
        source,
    })?;
    Ok(Box::new(BufWriter::new(file)))
}
