//! Workbook decoding.
//!
//! Decodes a buffer with `calamine`, takes the first sheet by position and
//! turns it into a [`RecordSet`] keyed by the sheet's header row.
//!
//! # Example
//!
//! ```no_run
//! use sheetview::decode::decode_bytes;
//!
//! let data = std::fs::read("people.xlsx")?;
//! let records = decode_bytes(&data)?;
//! println!("{} rows, columns {:?}", records.len(), records.column_names());
//! # Ok::<(), sheetview::Error>(())
//! ```

use crate::detect::{detect_format_from_bytes, FormatType};
use crate::error::{Error, Result};
use crate::model::{Record, RecordSet, Value};
use calamine::{open_workbook_from_rs, Data, Ods, Range, Reader, Xls, Xlsb, Xlsx};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::io::{Cursor, Read, Seek};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Header name given to columns whose header cell is empty.
const EMPTY_HEADER: &str = "__EMPTY";

/// What the decoder saw in the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    /// Detected container format.
    #[serde(serialize_with = "serialize_format")]
    pub format: FormatType,
    /// Name of the sheet that was decoded (the first one).
    pub sheet_name: String,
    /// Number of sheets in the workbook.
    pub sheet_count: usize,
}

fn serialize_format<S: serde::Serializer>(
    format: &FormatType,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(format.extension())
}

/// A decoded first sheet together with its summary.
#[derive(Debug, Clone)]
pub struct DecodedSheet {
    pub summary: SheetSummary,
    pub records: RecordSet,
}

/// Decode a workbook buffer into the records of its first sheet.
pub fn decode_bytes(data: &[u8]) -> Result<RecordSet> {
    decode_workbook(data).map(|sheet| sheet.records)
}

/// Decode a workbook buffer, keeping the sheet summary.
pub fn decode_workbook(data: &[u8]) -> Result<DecodedSheet> {
    let format = detect_format_from_bytes(data)?;
    debug!(%format, bytes = data.len(), "detected workbook format");

    let cursor = Cursor::new(data);
    let (sheet_name, sheet_count, range) = match format {
        FormatType::Xlsx => first_sheet::<Xlsx<_>, _>(cursor)?,
        FormatType::Xlsb => first_sheet::<Xlsb<_>, _>(cursor)?,
        FormatType::Xls => first_sheet::<Xls<_>, _>(cursor)?,
        FormatType::Ods => first_sheet::<Ods<_>, _>(cursor)?,
    };

    let records = range_to_records(&range);
    debug!(
        sheet = %sheet_name,
        rows = records.len(),
        columns = records.column_names().len(),
        "decoded first sheet"
    );

    Ok(DecodedSheet {
        summary: SheetSummary {
            format,
            sheet_name,
            sheet_count,
        },
        records,
    })
}

/// Open the workbook and read the cell range of its first sheet.
fn first_sheet<R, RS>(reader: RS) -> Result<(String, usize, Range<Data>)>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let mut workbook: R = open_workbook_from_rs(reader).map_err(decode_error)?;

    let names = workbook.sheet_names();
    let first = names
        .first()
        .cloned()
        .ok_or_else(|| Error::Decode("workbook contains no sheets".to_string()))?;

    let range = workbook.worksheet_range(&first).map_err(decode_error)?;
    Ok((first, names.len(), range))
}

fn decode_error(err: impl Display) -> Error {
    Error::Decode(err.to_string())
}

/// Convert a sheet range into records, using its first row as the header.
///
/// Empty cells are omitted from each record and rows without any value are
/// skipped.
pub fn range_to_records(range: &Range<Data>) -> RecordSet {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return RecordSet::new();
    };
    let header = header_names(header_row);

    let records = rows
        .filter_map(|row| {
            let record: Record = header
                .iter()
                .zip(row.iter())
                .filter_map(|(name, cell)| cell_value(cell).map(|v| (name.clone(), v)))
                .collect();
            (!record.is_empty()).then_some(record)
        })
        .collect();

    RecordSet::from_records(records)
}

/// Build unique column names from the header row.
///
/// Empty header cells become `__EMPTY`; repeated names get `_1`, `_2`, ...
fn header_names(row: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();

    row.iter()
        .map(|cell| {
            let base = match cell_value(cell) {
                Some(value) => value.to_string().nfc().collect::<String>(),
                None => EMPTY_HEADER.to_string(),
            };

            let mut name = base.clone();
            if used.contains(&name) {
                let counter = counters.entry(base.clone()).or_insert(0);
                loop {
                    *counter += 1;
                    name = format!("{}_{}", base, counter);
                    if !used.contains(&name) {
                        break;
                    }
                }
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

/// Convert a calamine cell to a value; empty and error cells have none.
fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::Text(s.clone())),
        Data::Float(f) => Some(Value::Number(*f)),
        Data::Int(i) => Some(Value::Number(*i as f64)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => Some(Value::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::Text(s.clone())),
    }
}
