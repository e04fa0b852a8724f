use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::debug;

use super::model::Frame;
use crate::error::{Error, FrameError, Result};

/// Write `frame` as a submission CSV at `path`: header row, no index column.
///
/// The frame's columns are not checked; a submission is expected to carry
/// `id` and `amount` but any columns are written as given. Prints a
/// confirmation line on success.
pub fn write_submission(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(
        "writing {} rows x {} columns to {}",
        frame.num_rows(),
        frame.num_columns(),
        path.display()
    );

    std::fs::File::create(path)
        .map_err(FrameError::from)
        .and_then(|file| write_frame(frame, file))
        .map_err(|e| Error::write(path, e))?;

    println!("Submission successfully written to: {}", path.display());
    Ok(())
}

/// Serialize `frame` as CSV into any writer. A frame without columns
/// produces no output.
pub fn write_frame<W: Write>(frame: &Frame, sink: W) -> std::result::Result<(), FrameError> {
    let mut writer = WriterBuilder::new().from_writer(sink);
    if frame.num_columns() == 0 {
        return Ok(());
    }

    writer.write_record(frame.column_names())?;

    let mut record: Vec<String> = Vec::with_capacity(frame.num_columns());
    for row in 0..frame.num_rows() {
        record.clear();
        record.extend(frame.columns().iter().map(|c| c.values[row].to_string()));
        writer.write_record(&record)?;
    }

    // Drop would swallow a failed flush.
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, Value};

    fn to_string(frame: &Frame) -> String {
        let mut buf = Vec::new();
        write_frame(frame, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_submission_layout() {
        let frame = Frame::new(vec![
            Column::new("id", [1i64, 2]),
            Column::new("amount", [10.0, 20.25]),
        ])
        .unwrap();
        assert_eq!(to_string(&frame), "id,amount\n1,10.0\n2,20.25\n");
    }

    #[test]
    fn test_nulls_bools_and_quoting() {
        let frame = Frame::new(vec![
            Column::new("name", [Value::from("a,b"), Value::Null]),
            Column::new("flag", [Some(true), None]),
        ])
        .unwrap();
        assert_eq!(to_string(&frame), "name,flag\n\"a,b\",True\n,\n");
    }

    #[test]
    fn test_nan_is_written_as_empty_field() {
        let frame = Frame::new(vec![
            Column::new("id", [1i64, 2]),
            Column::new("amount", [f64::NAN, 1e16]),
        ])
        .unwrap();
        assert_eq!(to_string(&frame), "id,amount\n1,\n2,1e16\n");
    }

    #[test]
    fn test_empty_frame_writes_nothing() {
        assert_eq!(to_string(&Frame::default()), "");
    }

    #[test]
    fn test_header_only_frame() {
        let frame = Frame::new(vec![Column::new("id", Vec::<i64>::new())]).unwrap();
        assert_eq!(to_string(&frame), "id\n");
    }
}
