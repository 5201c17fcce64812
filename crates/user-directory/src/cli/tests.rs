//! Unit tests for the search CLI helpers.

use std::io::{self, Cursor, Write};

use rstest::{fixture, rstest};
use serde_json::Value;

use super::*;
use crate::generator::DatasetGenerator;

#[fixture]
fn session() -> SearchSession {
    SearchSession::new(DatasetGenerator::new(120).with_seed(11).generate().into())
}

fn settings(query: Option<&str>) -> DirectorySettings {
    DirectorySettings {
        record_count: 120,
        load_delay_ms: 0,
        seed: Some(11),
        result_limit: 2,
        query: query.map(str::to_owned),
    }
}

fn parse_lines(bytes: &[u8]) -> Vec<Value> {
    let text = String::from_utf8(bytes.to_vec()).expect("utf-8 output");
    text.lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[rstest]
fn write_report_emits_single_json_line(session: SearchSession) {
    let mut out = Vec::new();
    let count = write_report(&session, "Sales", 3, &mut out).expect("report");

    let lines = parse_lines(&out);
    assert_eq!(lines.len(), 1);
    let line = lines.first().expect("one line");
    assert_eq!(line["resultCount"], count);
    assert_eq!(count, 15);
    assert_eq!(line["results"].as_array().map(Vec::len), Some(3));
}

#[rstest]
fn run_queries_answers_every_line(session: SearchSession) {
    let input = Cursor::new("engineering\n\nno-such-user\n");
    let mut out = Vec::new();

    let answered = run_queries(&session, input, &mut out, 1).expect("queries run");

    assert_eq!(answered, 3);
    let lines = parse_lines(&out);
    let counts: Vec<_> = lines.iter().map(|l| l["resultCount"].clone()).collect();
    assert_eq!(counts, [Value::from(15), Value::from(120), Value::from(0)]);
}

#[test]
fn run_prefers_configured_query() {
    let input = Cursor::new("ignored\nalso ignored\n");
    let mut out = Vec::new();

    let answered = run(&settings(Some("firstname12")), input, &mut out).expect("run");

    assert_eq!(answered, 1);
    let lines = parse_lines(&out);
    let line = lines.first().expect("one line");
    assert_eq!(line["query"], "firstname12");
    assert_eq!(line["resultCount"], 2);
}

#[test]
fn run_reads_stdin_without_configured_query() {
    let input = Cursor::new("lastname7\n");
    let mut out = Vec::new();

    let answered = run(&settings(None), input, &mut out).expect("run");

    assert_eq!(answered, 1);
    let lines = parse_lines(&out);
    let line = lines.first().expect("one line");
    // LastName7 covers ids 7 and 107; LastName70..=79 also contain the query.
    assert_eq!(line["resultCount"], 12);
    assert_eq!(line["results"].as_array().map(Vec::len), Some(2));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("closed"))
    }
}

#[rstest]
fn write_failures_are_reported(session: SearchSession) {
    let result = write_report(&session, "hr", 1, &mut FailingWriter);
    assert!(matches!(
        result,
        Err(CliError::WriteReport { .. })
    ));
}

#[rstest]
fn malformed_lines_are_answered_as_empty_queries(session: SearchSession) {
    let input = Cursor::new(b"engineering\n\xff\xfe\nsales\n".to_vec());
    let mut out = Vec::new();

    let answered = run_queries(&session, input, &mut out, 1).expect("queries answered");

    assert_eq!(answered, 3);
    let lines = parse_lines(&out);
    let counts: Vec<_> = lines.iter().map(|l| l["resultCount"].clone()).collect();
    assert_eq!(counts, [Value::from(15), Value::from(120), Value::from(15)]);
}

#[rstest]
fn crlf_line_endings_are_stripped(session: SearchSession) {
    let input = Cursor::new(b"sales\r\nhr".to_vec());
    let mut out = Vec::new();

    let answered = run_queries(&session, input, &mut out, 1).expect("queries answered");

    assert_eq!(answered, 2);
    let lines = parse_lines(&out);
    let queries: Vec<_> = lines.iter().map(|l| l["query"].clone()).collect();
    assert_eq!(queries, [Value::from("sales"), Value::from("hr")]);
}
