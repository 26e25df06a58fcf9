use std::io::Write;

use csv::Writer;
use serde_json::Value;

use crate::collector::Record;
use crate::error::Result;

/// Renders a JSON value as a CSV cell.
pub fn render_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Arrays and objects are not flattened, they go out as compact JSON
        other => other.to_string(),
    }
}

/// Writes `header` followed by one row per record.
///
/// A record missing a header field gets an empty cell; fields not in the
/// header are ignored. Returns the number of data rows written.
pub fn write_csv<W: Write>(mut sink: W, header: &[String], records: &[Record]) -> Result<usize> {
    // The csv crate cannot express a zero-field row, so an empty header
    // becomes bare line terminators.
    if header.is_empty() {
        for _ in 0..=records.len() {
            sink.write_all(b"\n")?;
        }
        sink.flush()?;
        return Ok(records.len());
    }

    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(header)?;

    for record in records {
        let row: Vec<String> = header
            .iter()
            .map(|k| record.get(k).map(render_value).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(records.len())
}
