use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use super::model::{Column, Frame, Value};
use super::options::ReadOptions;
use crate::error::{Error, FrameError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a CSV file into a [`Frame`].
///
/// Any failure (missing file, permission denied, malformed CSV, unknown
/// `usecols` entry) is returned as [`Error::Read`] carrying `path`.
pub fn read_csv(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Frame> {
    let path = path.as_ref();
    debug!("reading CSV {}", path.display());

    let frame = File::open(path)
        .map_err(FrameError::from)
        .and_then(|file| parse_frame(file, options))
        .map_err(|e| Error::read(path, e))?;

    debug!(
        "read {} rows x {} columns from {}",
        frame.num_rows(),
        frame.num_columns(),
        path.display()
    );
    Ok(frame)
}

/// Read the sample submission shipped with a dataset.
pub fn read_sample_submission(path: impl AsRef<Path>) -> Result<Frame> {
    read_csv(path, &ReadOptions::default())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse CSV from any reader. Rows shorter than the header are padded with
/// missing values; longer rows are an error.
fn parse_frame<R: Read>(source: R, options: &ReadOptions) -> std::result::Result<Frame, FrameError> {
    let mut records = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .comment(options.comment)
        .has_headers(false)
        .flexible(true)
        .from_reader(source)
        .into_records();

    for _ in 0..options.skip_rows {
        if records.next().transpose()?.is_none() {
            break;
        }
    }

    let header = if options.has_headers {
        records.next().transpose()?
    } else {
        None
    };

    let mut rows: Vec<StringRecord> = Vec::new();
    for result in records {
        if options.nrows.is_some_and(|n| rows.len() >= n) {
            break;
        }
        rows.push(result?);
    }

    let names = match &header {
        Some(h) => normalise_headers(h),
        None => (0..rows.first().map_or(0, StringRecord::len))
            .map(|i| i.to_string())
            .collect(),
    };
    if names.is_empty() {
        return Err(FrameError::NoColumns);
    }

    for (row_no, record) in rows.iter().enumerate() {
        if record.len() > names.len() {
            return Err(FrameError::RaggedRow {
                row: row_no,
                expected: names.len(),
                found: record.len(),
            });
        }
    }

    let keep = selected_indices(&names, options.usecols.as_deref())?;

    let columns = keep
        .into_iter()
        .map(|col_idx| {
            let cells: Vec<Option<&str>> = rows
                .iter()
                .map(|r| r.get(col_idx).filter(|field| !options.is_na(field)))
                .collect();
            infer_column(names[col_idx].clone(), &cells)
        })
        .collect();

    Frame::new(columns)
}

/// Blank names become `Unnamed: <i>`; repeats get `.1`, `.2`, ... suffixes.
fn normalise_headers(header: &StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());
    for (i, raw) in header.iter().enumerate() {
        let base = if raw.is_empty() {
            format!("Unnamed: {i}")
        } else {
            raw.to_string()
        };
        let mut name = base.clone();
        let mut dup = 0;
        while names.contains(&name) {
            dup += 1;
            name = format!("{base}.{dup}");
        }
        names.push(name);
    }
    names
}

/// Indices of the columns to keep, in file order.
fn selected_indices(
    names: &[String],
    usecols: Option<&[String]>,
) -> std::result::Result<Vec<usize>, FrameError> {
    let Some(wanted) = usecols else {
        return Ok((0..names.len()).collect());
    };
    if let Some(missing) = wanted.iter().find(|w| !names.contains(w)) {
        return Err(FrameError::UnknownColumn(missing.clone()));
    }
    Ok((0..names.len())
        .filter(|&i| wanted.contains(&names[i]))
        .collect())
}

// ---------------------------------------------------------------------------
// Column type inference
// ---------------------------------------------------------------------------

/// Pick the narrowest type every present cell parses as: integers (only
/// when nothing is missing, `u64` when `i64` overflows), then floats, then
/// booleans, then raw text. Integer literals that fit no integer type keep
/// their text rather than lose digits as floats. Surrounding whitespace is
/// ignored when parsing but kept in text columns.
fn infer_column(name: String, cells: &[Option<&str>]) -> Column {
    let typed = as_ints(cells).or_else(|| as_uints(cells)).or_else(|| {
        if cells.iter().flatten().any(|s| is_wide_integer(s.trim())) {
            None
        } else {
            as_floats(cells).or_else(|| as_bools(cells))
        }
    });
    let values = typed.unwrap_or_else(|| {
        cells
            .iter()
            .map(|c| c.map_or(Value::Null, Value::from))
            .collect()
    });
    Column { name, values }
}

fn as_ints(cells: &[Option<&str>]) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|c| c.and_then(|s| s.trim().parse::<i64>().ok()).map(Value::Int))
        .collect()
}

fn as_uints(cells: &[Option<&str>]) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|c| c.and_then(|s| s.trim().parse::<u64>().ok()).map(Value::UInt))
        .collect()
}

/// An optionally signed run of digits that overflows `i64`.
fn is_wide_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && s.parse::<i64>().is_err()
}

fn as_floats(cells: &[Option<&str>]) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|c| match c {
            Some(s) => s.trim().parse::<f64>().ok().map(Value::Float),
            None => Some(Value::Null),
        })
        .collect()
}

fn as_bools(cells: &[Option<&str>]) -> Option<Vec<Value>> {
    cells
        .iter()
        .map(|c| match c.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("true") => Some(Value::Bool(true)),
            Some(s) if s.eq_ignore_ascii_case("false") => Some(Value::Bool(false)),
            Some(_) => None,
            None => Some(Value::Null),
        })
        .collect()
}
