//! Tests for line sources and sinks

use super::*;
use crate::Error;
use std::io::Cursor;
use tempfile::TempDir;

fn temp_file_with(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.csv");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_line_file_reads_lines() {
    let (_dir, path) = temp_file_with("id,name\n1,alpha\r\n2,beta");
    let mut file = LineFile::new(&path);

    assert!(file.has_line().unwrap());
    assert_eq!(file.read_line().unwrap(), "id,name");
    assert_eq!(file.read_line().unwrap(), "1,alpha");
    assert_eq!(file.read_line().unwrap(), "2,beta");
    assert!(!file.has_line().unwrap());
}

#[test]
fn test_line_file_read_past_end() {
    let (_dir, path) = temp_file_with("only\n");
    let mut file = LineFile::new(&path);

    file.read_line().unwrap();
    match file.read_line() {
        Err(Error::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_line_file_missing() {
    let dir = TempDir::new().unwrap();
    let mut file = LineFile::new(dir.path().join("absent.csv"));

    match file.has_line() {
        Err(Error::Io { message, .. }) => {
            assert_eq!(message, "File absent.csv cannot be found")
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_line_file_write_then_read() {
    let (_dir, path) = temp_file_with("old content\n");
    let mut file = LineFile::new(&path);

    file.write("a,b").unwrap();
    file.write_line(",c").unwrap();
    file.write_line("1,2,3").unwrap();

    // Switching to read mode reopens from the first line
    assert_eq!(file.read_all().unwrap(), vec!["a,b,c", "1,2,3"]);
}

#[test]
fn test_line_file_write_truncates_after_read() {
    let (_dir, path) = temp_file_with("h1,h2\nv1,v2\n");
    let mut file = LineFile::new(&path);

    let lines = file.read_all().unwrap();
    assert_eq!(lines.len(), 2);

    for line in &lines {
        file.write_line(line).unwrap();
    }
    file.write_line("v3,v4").unwrap();
    file.close().unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "h1,h2\nv1,v2\nv3,v4\n"
    );
}

#[test]
fn test_line_file_close_rewinds_reader() {
    let (_dir, path) = temp_file_with("first\nsecond\n");
    let mut file = LineFile::new(&path);

    assert_eq!(file.read_line().unwrap(), "first");
    file.close().unwrap();
    assert_eq!(file.read_line().unwrap(), "first");
}

#[test]
fn test_line_reader_over_memory() {
    let mut reader = LineReader::new(Cursor::new("x\ny\n"));

    assert_eq!(reader.read_all().unwrap(), vec!["x", "y"]);
    assert!(!reader.has_line().unwrap());
    assert!(reader.read_line().is_err());
}

#[test]
fn test_line_writer_over_memory() {
    let mut writer = LineWriter::new(Vec::new());

    writer.write("a").unwrap();
    writer.write_line("b").unwrap();
    writer.write_line("c").unwrap();

    assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "ab\nc\n");
}

#[test]
fn test_line_file_append_line() {
    let (_dir, path) = temp_file_with("id,name\n1,alpha\n");
    let mut file = LineFile::new(&path);

    assert_eq!(file.read_line().unwrap(), "id,name");
    file.append_line("2,beta").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "id,name\n1,alpha\n2,beta\n"
    );
    assert_eq!(file.read_all().unwrap(), vec!["id,name", "1,alpha", "2,beta"]);
}

#[test]
fn test_line_file_append_matches_line_endings() {
    let (_dir, crlf) = temp_file_with("a\r\n");
    LineFile::new(&crlf).append_line("b").unwrap();
    assert_eq!(std::fs::read_to_string(&crlf).unwrap(), "a\r\nb\r\n");

    let (_dir2, open_ended) = temp_file_with("a");
    LineFile::new(&open_ended).append_line("b").unwrap();
    assert_eq!(std::fs::read_to_string(&open_ended).unwrap(), "a\nb\n");

    let (_dir3, empty) = temp_file_with("");
    LineFile::new(&empty).append_line("b").unwrap();
    assert_eq!(std::fs::read_to_string(&empty).unwrap(), "b\n");
}

#[test]
fn test_line_file_append_missing() {
    let dir = TempDir::new().unwrap();
    let mut file = LineFile::new(dir.path().join("absent.csv"));

    assert!(matches!(file.append_line("x"), Err(Error::Io { .. })));
}
