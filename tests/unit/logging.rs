use super::*;

#[test]
fn tail_writer_splits_lines_on_drop() {
    let (tx, rx) = mpsc::sync_channel(8);
    {
        let mut w = TailWriter::new(tx);
        w.write_all(b"first line\nsecond").unwrap();
        w.write_all(b" line\n").unwrap();
        assert!(rx.try_recv().is_err());
    }
    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(lines, vec!["first line", "second line"]);
}

#[test]
fn empty_writer_sends_nothing() {
    let (tx, rx) = mpsc::sync_channel(8);
    drop(TailWriter::new(tx));
    assert!(rx.try_recv().is_err());
}

#[test]
fn unread_tail_stays_bounded() {
    let (tx, rx) = mpsc::sync_channel(3);
    for i in 0..5000 {
        let mut w = TailWriter::new(tx.clone());
        writeln!(w, "line {i}").unwrap();
    }
    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(lines, vec!["line 0", "line 1", "line 2"]);
}

#[test]
fn tail_writer_survives_a_dropped_receiver() {
    let (tx, rx) = mpsc::sync_channel(1);
    drop(rx);
    let mut w = TailWriter::new(tx);
    writeln!(w, "nobody listens").unwrap();
    drop(w);
}

#[test]
fn ensure_log_dir_creates_nested_dirs() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("a").join("b");
    let made = ensure_log_dir(dir.clone()).unwrap();
    assert_eq!(made, dir);
    assert!(dir.is_dir());
}

#[test]
fn default_log_dir_is_under_temp() {
    assert!(default_log_dir().starts_with(std::env::temp_dir()));
    assert!(default_log_dir().ends_with("tuitree/logs"));
}
