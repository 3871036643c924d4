//! Integration tests for the field cursor with files on disk
//!
//! These tests drive the public API the way the command-line tool does:
//! lines come from a `LineFile`, are fed to one reused `FieldCursor`, and
//! results go to a sink.

use csv_cursor::cli::commands::fields::extract_fields;
use csv_cursor::{
    Config, CursorCheck, Error, FieldCursor, FieldType, FieldValue, LineFile, LineSink,
    LineSource, LineWriter, RowLayout,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Reading a station file row by row with typed readers
#[test]
fn test_typed_rows_from_file() {
    let file = csv_file("src_id,name,lat,elevation\n1001,Heathrow,51.479,25\n1002,Gatwick,51.148,59\n");
    let mut source = LineFile::new(file.path());

    let header = source.read_line().unwrap();
    let mut cursor = FieldCursor::new(header);
    assert_eq!(cursor.total_columns(), 4);

    let mut rows = Vec::new();
    while source.has_line().unwrap() {
        cursor.set_text(source.read_line().unwrap());
        let id = cursor.next_long().unwrap();
        let name = cursor.next_string().unwrap();
        let lat = cursor.next_double().unwrap();
        let elevation = cursor.next_short().unwrap();
        assert!(cursor.next_string().unwrap_err().is_out_of_range());
        rows.push((id, name, lat, elevation));
    }

    assert_eq!(
        rows,
        vec![
            (1001, "Heathrow".to_string(), 51.479, 25),
            (1002, "Gatwick".to_string(), 51.148, 59),
        ]
    );
}

/// A whole file loaded as one buffer reads straight across row boundaries
#[test]
fn test_whole_file_as_one_buffer() {
    let file = csv_file("a,b\nc,d\n");
    let text = std::fs::read_to_string(file.path()).unwrap();
    let mut cursor = FieldCursor::new(text);

    let mut fields = Vec::new();
    loop {
        match cursor.next_string() {
            Ok(field) => fields.push(field),
            Err(Error::OutOfRange { position, length }) => {
                assert_eq!(position, length);
                break;
            }
            Err(other) => panic!("unexpected error {:?}", other),
        }
    }
    assert_eq!(fields, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_extract_fields_file_to_file() {
    let input = csv_file("id,reading\n1,10.5\n2,,11\nbad,1\n3,12\n");
    let output = NamedTempFile::new().unwrap();

    let mut source = LineFile::new(input.path());
    let mut sink = LineFile::new(output.path());
    let layout = RowLayout::parse("i,f").unwrap();

    let stats = extract_fields(
        &mut source,
        &mut sink,
        Some(&layout),
        true,
        &Config::default(),
    )
    .unwrap();
    sink.close().unwrap();

    // "2,,11" collapses the empty field and reads 11 as the reading
    assert_eq!(
        std::fs::read_to_string(output.path()).unwrap(),
        "id,reading\n1,10.5\n2,11\n3,12\n"
    );
    assert_eq!(stats.total_records, 4);
    assert_eq!(stats.records_skipped, 1);
    assert!(stats.errors[0].starts_with("Line 4:"));
}

#[test]
fn test_reused_cursor_with_legacy_check() {
    let config = Config::default().with_legacy_cursor_check();
    let mut cursor = FieldCursor::default().with_cursor_check(config.parser.cursor_check);
    assert_eq!(cursor.cursor_check(), CursorCheck::Current);

    cursor.set_text("abc");
    cursor.set_cursor(99).unwrap();
    assert!(cursor.next_string().unwrap_err().is_out_of_range());

    cursor.set_text("xyz");
    assert_eq!(cursor.next_string().unwrap(), "xyz");
}

#[test]
fn test_read_row_with_layout_values() {
    let mut cursor = FieldCursor::new("7, -2, 1e2, text");
    let layout = RowLayout::new(vec![
        FieldType::Integer,
        FieldType::Short,
        FieldType::Float,
        FieldType::String,
    ]);

    assert_eq!(
        cursor.read_row(&layout).unwrap(),
        vec![
            FieldValue::Integer(7),
            FieldValue::Short(-2),
            FieldValue::Float(100.0),
            FieldValue::String("text".to_string()),
        ]
    );
}

#[test]
fn test_writer_sink_collects_output() {
    let mut sink = LineWriter::new(Vec::new());
    let mut cursor = FieldCursor::new("q, r ,s");

    while let Ok(field) = cursor.next_string() {
        sink.write_line(&field).unwrap();
    }
    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "q\nr \ns\n");
}
