//! Line-by-line customer report pipeline.
//!
//! Each input line is decoded on its own, so a malformed line costs exactly
//! that line. Only a failure of the underlying reader aborts the report.

use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::record::{RawRecord, Record};

/// Counters collected while scanning the input.
///
/// Every line read lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub lines: usize,
    pub malformed: usize,
    pub missing_user_id: usize,
    pub rejected: usize,
    pub matched: usize,
}

/// Matching records sorted by `user_id`, plus scan counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub records: Vec<Record>,
    pub stats: ReportStats,
}

/// Read `input` to the end and return the records accepted by `predicate`,
/// sorted ascending by `user_id`.
///
/// Lines that are not JSON objects are skipped and reported to
/// `diagnostics`. Objects without a `user_id` are skipped silently.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if reading from `input` fails; no
/// partial result is produced in that case.
///
/// # Examples
///
/// ```
/// use proximity_lib::{build_report, NoopSink};
///
/// let input = "{\"user_id\": 2, \"name\": \"B\"}\nnot json\n{\"user_id\": 1, \"name\": \"A\"}\n";
/// let records = build_report(input.as_bytes(), |_| true, &NoopSink).unwrap();
/// let ids: Vec<_> = records.iter().map(|r| r.user_id).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
pub fn build_report<R, P, S>(input: R, predicate: P, diagnostics: &S) -> Result<Vec<Record>>
where
    R: BufRead,
    P: FnMut(&Record) -> bool,
    S: DiagnosticSink + ?Sized,
{
    scan_report(input, predicate, diagnostics).map(|report| report.records)
}

/// Same as [`build_report`] but also returns the [`ReportStats`] of the scan.
pub fn scan_report<R, P, S>(mut input: R, mut predicate: P, diagnostics: &S) -> Result<Report>
where
    R: BufRead,
    P: FnMut(&Record) -> bool,
    S: DiagnosticSink + ?Sized,
{
    let mut stats = ReportStats::default();
    let mut matches = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        let raw = match RawRecord::from_json(&line) {
            Ok(raw) => raw,
            Err(err) => {
                stats.malformed += 1;
                diagnostics.report(&Diagnostic::MalformedLine {
                    line: stats.lines,
                    message: err.to_string(),
                });
                continue;
            }
        };

        let Some(record) = raw.into_record() else {
            stats.missing_user_id += 1;
            continue;
        };

        if predicate(&record) {
            stats.matched += 1;
            matches.push(record);
        } else {
            stats.rejected += 1;
        }
    }

    // stable: equal ids keep input order
    matches.sort_by_key(|record| record.user_id);

    debug!(
        lines = stats.lines,
        malformed = stats.malformed,
        missing_user_id = stats.missing_user_id,
        rejected = stats.rejected,
        matched = stats.matched,
        "customer report complete"
    );

    Ok(Report {
        records: matches,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;
    use crate::diagnostics::{CollectingSink, NoopSink};
    use crate::error::Error;

    const MIXED_INPUT: &str = r#"
	{"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}
	{"latitude": "52.986375", "user_id": 9, "name": "Thomas", "longitude": "-6.043701"}
	{"latitude": ".986375", "user_id": 74, "name": "
unexpectednewline", "longitude": "-6.043701"}
	{}
	[]
	42
	true
	{"latitude": "51.92893", "user_id": 1, "name": "Alice Cahill", "longitude": "-10.27699"}
foo"#;

    fn everyone_but_thomas(record: &Record) -> bool {
        record.name != "Thomas"
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn keeps_matching_records_sorted_by_user_id() {
        let sink = CollectingSink::new();
        let report = scan_report(MIXED_INPUT.as_bytes(), everyone_but_thomas, &sink).unwrap();

        assert_eq!(names(&report.records), vec!["Alice Cahill", "Christina McArdle"]);
        assert_eq!(
            report.stats,
            ReportStats {
                lines: 11,
                malformed: 7,
                missing_user_id: 1,
                rejected: 1,
                matched: 2,
            }
        );
        assert_eq!(sink.len(), 7);
    }

    #[test]
    fn malformed_lines_carry_their_line_number() {
        let sink = CollectingSink::new();
        build_report("{\"user_id\": 1}\n[1]\n".as_bytes(), |_| true, &sink).unwrap();

        match sink.diagnostics().as_slice() {
            [Diagnostic::MalformedLine { line, message }] => {
                assert_eq!(*line, 2);
                assert!(message.contains("expected a JSON object"), "{message}");
            }
            other => panic!("unexpected diagnostics: {other:?}"),
        }
    }

    #[test]
    fn records_without_user_id_are_skipped_silently() {
        let sink = CollectingSink::new();
        let records = build_report(
            "{\"name\": \"Anon\"}\n{\"user_id\": null}\n".as_bytes(),
            |_| true,
            &sink,
        )
        .unwrap();
        assert!(records.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let input = "{\"user_id\": 5, \"name\": \"first\"}\n\
                     {\"user_id\": 1, \"name\": \"one\"}\n\
                     {\"user_id\": 5, \"name\": \"second\"}\n";
        let records = build_report(input.as_bytes(), |_| true, &NoopSink).unwrap();
        assert_eq!(names(&records), vec!["one", "first", "second"]);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = scan_report(io::empty(), |_| true, &NoopSink).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.stats, ReportStats::default());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let input = "{\"user_id\": 2}\r\n{\"user_id\": 1}\r\n";
        let records = build_report(input.as_bytes(), |_| true, &NoopSink).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_id, 1);
    }

    #[test]
    fn invalid_utf8_line_is_skipped_not_fatal() {
        let input: &[u8] = b"{\"user_id\": 1, \"name\": \"\xff\"}\n{\"user_id\": 2}\n";
        let sink = CollectingSink::new();
        let records = build_report(input, |_| true, &sink).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, 2);
        assert_eq!(sink.len(), 1);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_failure_aborts_the_report() {
        let result = build_report(BufReader::new(FailingReader), |_| true, &NoopSink);
        match result {
            Err(Error::Io(err)) => assert_eq!(err.to_string(), "disk on fire"),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_after_good_lines_returns_no_records() {
        let good = "{\"user_id\": 1}\n{\"user_id\": 2}\n".as_bytes();
        let input = BufReader::new(good.chain(FailingReader));
        let mut seen = 0;
        let result = build_report(
            input,
            |_| {
                seen += 1;
                true
            },
            &NoopSink,
        );
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(seen, 2);
    }
}
