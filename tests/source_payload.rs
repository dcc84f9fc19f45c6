// tests/source_payload.rs
use std::path::PathBuf;

use congress_stats::model::{Chamber, Party};
use congress_stats::source::{self, FileSource, MemberDataSource};
use congress_stats::stats;

fn sample() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/senate_sample.json")
}

#[test]
fn file_source_reads_api_envelope() {
    let src = FileSource::new(sample());
    let members = src.fetch(Chamber::Senate).unwrap();
    assert_eq!(members.len(), 6);
    assert_eq!(members[1].party(), Some(Party::Independent));
    assert_eq!(members[2].full_name(), "Susan M. Collins");
}

#[test]
fn mistyped_fields_decode_as_missing() {
    let members = FileSource::new(sample()).fetch(Chamber::Senate).unwrap();
    let pat = &members[5];
    assert_eq!(pat.party(), None);
    assert_eq!(pat.missed_votes, None);
    assert_eq!(pat.votes_with_party_pct, None);
    assert_eq!(pat.seniority.as_deref(), Some("1"));

    let quality = stats::data_quality(&members);
    assert_eq!(quality.unknown_party.get("L"), Some(&1));
    assert_eq!(quality.missing(stats::Metric::MissedVotes), 2);
}

#[test]
fn load_chamber_reports_through_progress() {
    struct Recorder(Vec<String>);
    impl congress_stats::progress::Progress for Recorder {
        fn log(&mut self, msg: &str) { self.0.push(msg.to_string()); }
    }

    let src = FileSource::new(sample());
    let mut rec = Recorder(Vec::new());
    let members = source::load_chamber(&src, Chamber::Senate, Some(&mut rec)).unwrap();
    assert_eq!(members.len(), 6);
    assert_eq!(rec.0.last().map(String::as_str), Some("Loaded 6 senate members"));
}

#[test]
fn missing_file_is_an_io_error() {
    let src = FileSource::new("does/not/exist.json");
    let err = src.fetch(Chamber::House).unwrap_err();
    assert!(matches!(err, congress_stats::error::Error::Io(_)));
}

#[test]
fn envelope_without_members_names_the_chamber() {
    let err = source::parse_members_payload(r#"{"status":"ERROR","errors":[]}"#, Chamber::Senate).unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON structure for senate data");
}
