//! End-to-end read → replace → write-back cycle against real files.

use linedit_engine::{TextBuffer, io};
use pretty_assertions::assert_eq;

#[test]
fn test_full_edit_cycle_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.txt");
    std::fs::write(&path, "buy milk\nwalk dog\nwrite tests").unwrap();

    let content = io::read_file(&path, 1024).unwrap();
    let mut buffer = TextBuffer::from_bytes(&content, 1024).unwrap();

    let patch = buffer.replace_line(1, b"walk the dog twice").unwrap();
    assert!(!patch.truncated());

    io::write_file(&path, buffer.as_bytes()).unwrap();

    let reread = std::fs::read_to_string(&path).unwrap();
    assert_eq!(reread, "buy milk\nwalk the dog twice\nwrite tests");
}

#[test]
fn test_failed_replacement_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.txt");
    std::fs::write(&path, "one\ntwo").unwrap();

    let content = io::read_file(&path, 1024).unwrap();
    let mut buffer = TextBuffer::from_bytes(&content, 1024).unwrap();

    // Hard error: the caller aborts before the write-back step
    assert!(buffer.replace_line(7, b"seven").is_err());
    assert_eq!(buffer.as_bytes(), b"one\ntwo");

    let reread = std::fs::read_to_string(&path).unwrap();
    assert_eq!(reread, "one\ntwo");
}

#[test]
fn test_truncated_replacement_still_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snug.txt");
    std::fs::write(&path, "ab\ncd").unwrap();

    let content = io::read_file(&path, 8).unwrap();
    let mut buffer = TextBuffer::from_bytes(&content, 8).unwrap();

    let patch = buffer.replace_line(1, b"overlong").unwrap();
    assert!(patch.truncated());

    io::write_file(&path, buffer.as_bytes()).unwrap();

    let reread = std::fs::read_to_string(&path).unwrap();
    assert_eq!(reread, "ab\nover");
    assert!(reread.len() <= 7);
}
